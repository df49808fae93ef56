use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::{Keyword, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Type operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Union,
    Array,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Initializers
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_reference_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenBracket, parse_array_literal_expr);

    // Statements. `export` is a modifier and handled by `parse_stmt`.
    parser.stmt(Keyword::Const, parse_variable_stmt);
    parser.stmt(Keyword::Type, parse_type_alias_decl_stmt);
    parser.stmt(Keyword::Enum, parse_enum_decl_stmt);
    parser.stmt(Keyword::Interface, parse_interface_decl_stmt);
    parser.stmt(Keyword::Namespace, parse_module_decl_stmt);
}

pub type StmtLookup = HashMap<Keyword, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
