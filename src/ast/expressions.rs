use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::ast::{Expr, Type};

// LITERALS

/// Numeric literal, kept as written (`32700`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericLiteral {
    pub text: String,
}

impl Display for NumericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// String literal without its quotes. Escapes are not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub text: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// `['\n', '\r\n']`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLiteralExpression {
    pub elements: Vec<Expr>,
}

// NAMES

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
}

impl Identifier {
    pub fn new(text: impl Into<String>) -> Self {
        Identifier { text: text.into() }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// `Left.Right`. Deeper qualification is not part of the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub left: Identifier,
    pub right: Identifier,
}

// DECLARATION PARTS

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: Identifier,
    pub initializer: Option<Expr>,
    pub leading_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: Identifier,
}

/// One item of an interface's `extends` list.
///
/// `interface A extends B, C {}` produces two clauses holding one type each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeritageClause {
    pub types: Vec<ExpressionWithTypeArguments>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionWithTypeArguments {
    pub expression: Identifier,
}

/// Index signature parameter, `key: string` in `[key: string]: T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: Identifier,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarationList {
    pub declarations: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub name: Identifier,
    pub ty: Option<Type>,
    pub initializer: Option<Expr>,
}

/// `-32700`. The operator is always [`TokenKind::Dash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixUnaryExpression {
    pub operator: TokenKind,
    pub operand: Box<Expr>,
}
