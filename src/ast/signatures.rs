use super::{
    ast::Type,
    expressions::{Identifier, Parameter},
};

/// `readonly name?: Type; // trailing`
///
/// `readonly` is accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySignature {
    pub name: Identifier,
    pub question_token: bool,
    pub ty: Type,
    pub leading_comment: Option<String>,
    pub trailing_comment: Option<String>,
}

/// `[key: string]: Type;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSignature {
    pub parameters: Vec<Parameter>,
    pub ty: Type,
    pub leading_comment: Option<String>,
}
