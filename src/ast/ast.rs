use std::fmt::Display;

use super::{
    expressions::{
        ArrayLiteralExpression, EnumMember, ExpressionWithTypeArguments, HeritageClause,
        Identifier, NumericLiteral, Parameter, PrefixUnaryExpression, QualifiedName,
        StringLiteral, TypeParameter, VariableDeclaration, VariableDeclarationList,
    },
    signatures::{IndexSignature, PropertySignature},
    statements::{
        EnumDeclaration, InterfaceDeclaration, ModuleBlock, ModuleDeclaration, SourceFile,
        TypeAliasDeclaration, VariableStatement,
    },
    types::{
        ArrayType, LiteralType, ParenthesizedType, TupleType, TypeLiteral, TypeReference,
        UnionType,
    },
};

/// Node Trait
///
/// Implemented by every element of the tree. Gives a borrowed, closed view
/// of the element for traversal.
pub trait AstNode {
    fn as_node(&self) -> Node<'_>;
}

/// Value-producing constructs.
pub trait ExprNode: AstNode {}

/// Expressions usable in a type position.
pub trait TypeNode: ExprNode {}

/// Members of an interface or type literal.
pub trait SignatureNode: ExprNode {}

/// Declarations and blocks.
pub trait StmtNode: AstNode {}

/// Statement positions: the contents of a source file or namespace body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Variable(VariableStatement),
    TypeAlias(TypeAliasDeclaration),
    Enum(EnumDeclaration),
    Interface(InterfaceDeclaration),
    Module(ModuleDeclaration),
}

/// Type positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Literal(LiteralType),
    TypeLiteral(TypeLiteral),
    Array(ArrayType),
    Tuple(TupleType),
    Union(UnionType),
    Parenthesized(ParenthesizedType),
    Reference(TypeReference),
}

/// Member positions of interfaces and type literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    Property(PropertySignature),
    Index(IndexSignature),
}

/// Initializer positions of enum members and variable declarations.
///
/// A bare identifier initializer refers to another declaration and is kept
/// as a [`TypeReference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    ArrayLiteral(ArrayLiteralExpression),
    PrefixUnary(PrefixUnaryExpression),
    Reference(TypeReference),
}

/// The literal inside a [`LiteralType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Numeric(NumericLiteral),
    String(StringLiteral),
}

/// The name a [`TypeReference`] points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityName {
    Identifier(Identifier),
    Qualified(QualifiedName),
}

impl Type {
    /// Shorthand for a reference to a plain, unqualified name.
    pub fn reference(name: impl Into<String>) -> Self {
        Type::Reference(TypeReference {
            type_name: EntityName::Identifier(Identifier::new(name)),
        })
    }
}

/// Borrowed view of any tree element.
///
/// This is the closed set of variants the walker dispatches over; matching
/// on it is exhaustive, so adding a variant here forces every traversal to
/// handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    // Expressions
    NumericLiteral(&'a NumericLiteral),
    StringLiteral(&'a StringLiteral),
    ArrayLiteralExpression(&'a ArrayLiteralExpression),
    Identifier(&'a Identifier),
    QualifiedName(&'a QualifiedName),
    EnumMember(&'a EnumMember),
    TypeParameter(&'a TypeParameter),
    HeritageClause(&'a HeritageClause),
    ExpressionWithTypeArguments(&'a ExpressionWithTypeArguments),
    Parameter(&'a Parameter),
    VariableDeclarationList(&'a VariableDeclarationList),
    VariableDeclaration(&'a VariableDeclaration),
    PrefixUnaryExpression(&'a PrefixUnaryExpression),

    // Signatures
    PropertySignature(&'a PropertySignature),
    IndexSignature(&'a IndexSignature),

    // Types
    LiteralType(&'a LiteralType),
    TypeLiteral(&'a TypeLiteral),
    ArrayType(&'a ArrayType),
    TypeReference(&'a TypeReference),
    UnionType(&'a UnionType),
    TupleType(&'a TupleType),
    ParenthesizedType(&'a ParenthesizedType),

    // Statements
    SourceFile(&'a SourceFile),
    ModuleBlock(&'a ModuleBlock),
    VariableStatement(&'a VariableStatement),
    TypeAliasDeclaration(&'a TypeAliasDeclaration),
    EnumDeclaration(&'a EnumDeclaration),
    InterfaceDeclaration(&'a InterfaceDeclaration),
    ModuleDeclaration(&'a ModuleDeclaration),
}

/// Node Kinds
///
/// Payload-free mirror of [`Node`], for diagnostics and tree printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    NumericLiteral,
    StringLiteral,
    ArrayLiteralExpression,
    Identifier,
    QualifiedName,
    EnumMember,
    TypeParameter,
    HeritageClause,
    ExpressionWithTypeArguments,
    Parameter,
    VariableDeclarationList,
    VariableDeclaration,
    PrefixUnaryExpression,
    PropertySignature,
    IndexSignature,
    LiteralType,
    TypeLiteral,
    ArrayType,
    TypeReference,
    UnionType,
    TupleType,
    ParenthesizedType,
    SourceFile,
    ModuleBlock,
    VariableStatement,
    TypeAliasDeclaration,
    EnumDeclaration,
    InterfaceDeclaration,
    ModuleDeclaration,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl NodeKind {
    pub fn is_type(self) -> bool {
        matches!(
            self,
            NodeKind::LiteralType
                | NodeKind::TypeLiteral
                | NodeKind::ArrayType
                | NodeKind::TypeReference
                | NodeKind::UnionType
                | NodeKind::TupleType
                | NodeKind::ParenthesizedType
        )
    }

    pub fn is_signature(self) -> bool {
        matches!(self, NodeKind::PropertySignature | NodeKind::IndexSignature)
    }

    pub fn is_stmt(self) -> bool {
        matches!(
            self,
            NodeKind::SourceFile
                | NodeKind::ModuleBlock
                | NodeKind::VariableStatement
                | NodeKind::TypeAliasDeclaration
                | NodeKind::EnumDeclaration
                | NodeKind::InterfaceDeclaration
                | NodeKind::ModuleDeclaration
        )
    }

    /// Everything that is not a statement is an expression; types and
    /// signatures are expressions too.
    pub fn is_expr(self) -> bool {
        !self.is_stmt()
    }
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::NumericLiteral(_) => NodeKind::NumericLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
            Node::ArrayLiteralExpression(_) => NodeKind::ArrayLiteralExpression,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::QualifiedName(_) => NodeKind::QualifiedName,
            Node::EnumMember(_) => NodeKind::EnumMember,
            Node::TypeParameter(_) => NodeKind::TypeParameter,
            Node::HeritageClause(_) => NodeKind::HeritageClause,
            Node::ExpressionWithTypeArguments(_) => NodeKind::ExpressionWithTypeArguments,
            Node::Parameter(_) => NodeKind::Parameter,
            Node::VariableDeclarationList(_) => NodeKind::VariableDeclarationList,
            Node::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Node::PrefixUnaryExpression(_) => NodeKind::PrefixUnaryExpression,
            Node::PropertySignature(_) => NodeKind::PropertySignature,
            Node::IndexSignature(_) => NodeKind::IndexSignature,
            Node::LiteralType(_) => NodeKind::LiteralType,
            Node::TypeLiteral(_) => NodeKind::TypeLiteral,
            Node::ArrayType(_) => NodeKind::ArrayType,
            Node::TypeReference(_) => NodeKind::TypeReference,
            Node::UnionType(_) => NodeKind::UnionType,
            Node::TupleType(_) => NodeKind::TupleType,
            Node::ParenthesizedType(_) => NodeKind::ParenthesizedType,
            Node::SourceFile(_) => NodeKind::SourceFile,
            Node::ModuleBlock(_) => NodeKind::ModuleBlock,
            Node::VariableStatement(_) => NodeKind::VariableStatement,
            Node::TypeAliasDeclaration(_) => NodeKind::TypeAliasDeclaration,
            Node::EnumDeclaration(_) => NodeKind::EnumDeclaration,
            Node::InterfaceDeclaration(_) => NodeKind::InterfaceDeclaration,
            Node::ModuleDeclaration(_) => NodeKind::ModuleDeclaration,
        }
    }

    /// The comment attached to this node, if it is a kind that carries one.
    pub fn leading_comment(&self) -> Option<&'a str> {
        let comment = match self {
            Node::EnumMember(n) => &n.leading_comment,
            Node::PropertySignature(n) => &n.leading_comment,
            Node::IndexSignature(n) => &n.leading_comment,
            Node::VariableStatement(n) => &n.leading_comment,
            Node::TypeAliasDeclaration(n) => &n.leading_comment,
            Node::EnumDeclaration(n) => &n.leading_comment,
            Node::InterfaceDeclaration(n) => &n.leading_comment,
            Node::ModuleDeclaration(n) => &n.leading_comment,
            _ => return None,
        };
        comment.as_deref()
    }
}

// Ties each concrete struct to its `Node` variant and capability tier.
macro_rules! impl_node {
    ($($ty:ident => $($tier:ident),*;)*) => {
        $(
            impl AstNode for $ty {
                fn as_node(&self) -> Node<'_> {
                    Node::$ty(self)
                }
            }
            $(impl $tier for $ty {})*
        )*
    };
}

impl_node! {
    NumericLiteral => ExprNode;
    StringLiteral => ExprNode;
    ArrayLiteralExpression => ExprNode;
    Identifier => ExprNode;
    QualifiedName => ExprNode;
    EnumMember => ExprNode;
    TypeParameter => ExprNode;
    HeritageClause => ExprNode;
    ExpressionWithTypeArguments => ExprNode;
    Parameter => ExprNode;
    VariableDeclarationList => ExprNode;
    VariableDeclaration => ExprNode;
    PrefixUnaryExpression => ExprNode;
    PropertySignature => ExprNode, SignatureNode;
    IndexSignature => ExprNode, SignatureNode;
    LiteralType => ExprNode, TypeNode;
    TypeLiteral => ExprNode, TypeNode;
    ArrayType => ExprNode, TypeNode;
    TypeReference => ExprNode, TypeNode;
    UnionType => ExprNode, TypeNode;
    TupleType => ExprNode, TypeNode;
    ParenthesizedType => ExprNode, TypeNode;
    SourceFile => StmtNode;
    ModuleBlock => StmtNode;
    VariableStatement => StmtNode;
    TypeAliasDeclaration => StmtNode;
    EnumDeclaration => StmtNode;
    InterfaceDeclaration => StmtNode;
    ModuleDeclaration => StmtNode;
}

impl AstNode for Stmt {
    fn as_node(&self) -> Node<'_> {
        match self {
            Stmt::Variable(n) => n.as_node(),
            Stmt::TypeAlias(n) => n.as_node(),
            Stmt::Enum(n) => n.as_node(),
            Stmt::Interface(n) => n.as_node(),
            Stmt::Module(n) => n.as_node(),
        }
    }
}

impl StmtNode for Stmt {}

impl AstNode for Type {
    fn as_node(&self) -> Node<'_> {
        match self {
            Type::Literal(n) => n.as_node(),
            Type::TypeLiteral(n) => n.as_node(),
            Type::Array(n) => n.as_node(),
            Type::Tuple(n) => n.as_node(),
            Type::Union(n) => n.as_node(),
            Type::Parenthesized(n) => n.as_node(),
            Type::Reference(n) => n.as_node(),
        }
    }
}

impl ExprNode for Type {}
impl TypeNode for Type {}

impl AstNode for Signature {
    fn as_node(&self) -> Node<'_> {
        match self {
            Signature::Property(n) => n.as_node(),
            Signature::Index(n) => n.as_node(),
        }
    }
}

impl ExprNode for Signature {}
impl SignatureNode for Signature {}

impl AstNode for Expr {
    fn as_node(&self) -> Node<'_> {
        match self {
            Expr::NumericLiteral(n) => n.as_node(),
            Expr::StringLiteral(n) => n.as_node(),
            Expr::ArrayLiteral(n) => n.as_node(),
            Expr::PrefixUnary(n) => n.as_node(),
            Expr::Reference(n) => n.as_node(),
        }
    }
}

impl ExprNode for Expr {}

impl AstNode for Literal {
    fn as_node(&self) -> Node<'_> {
        match self {
            Literal::Numeric(n) => n.as_node(),
            Literal::String(n) => n.as_node(),
        }
    }
}

impl ExprNode for Literal {}

impl AstNode for EntityName {
    fn as_node(&self) -> Node<'_> {
        match self {
            EntityName::Identifier(n) => n.as_node(),
            EntityName::Qualified(n) => n.as_node(),
        }
    }
}

impl ExprNode for EntityName {}
