//! Type expressions.
//!
//! These are the constructs allowed in a type position:
//!
//! - Literal types (`1`, `'text'`)
//! - Type literals (`{ line: uinteger }`)
//! - Array, tuple, union and parenthesized types
//! - References to named types, optionally qualified once (`Ns.Member`)

use super::ast::{EntityName, Literal, Signature, Type};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralType {
    pub literal: Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLiteral {
    pub members: Vec<Signature>,
}

/// `T[]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub element_type: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub type_name: EntityName,
}

/// `A | B | C`. Always holds at least two members, in source order, and
/// never directly contains another union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub types: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleType {
    pub elements: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenthesizedType {
    pub ty: Box<Type>,
}
