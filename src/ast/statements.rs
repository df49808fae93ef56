use std::slice::Iter;

use super::{
    ast::{Signature, Stmt, Type},
    expressions::{EnumMember, HeritageClause, Identifier, TypeParameter, VariableDeclarationList},
};

/// Root of every parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceFile {
    pub statements: Vec<Stmt>,
}

impl SourceFile {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

/// Body of a `namespace`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleBlock {
    pub statements: Vec<Stmt>,
}

impl ModuleBlock {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

/// `const a: T = 1, b = 2;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStatement {
    pub declaration_list: VariableDeclarationList,
    pub leading_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDeclaration {
    pub name: Identifier,
    pub ty: Type,
    pub leading_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: Identifier,
    pub members: Vec<EnumMember>,
    pub leading_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub heritage_clauses: Vec<HeritageClause>,
    pub members: Vec<Signature>,
    pub leading_comment: Option<String>,
}

/// `namespace Name { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    pub name: Identifier,
    pub body: ModuleBlock,
    pub leading_comment: Option<String>,
}
