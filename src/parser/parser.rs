//! Parser state and token plumbing.
//!
//! The parser pulls tokens from the [`Lexer`] one at a time. Comment tokens
//! never reach the grammar: [`Parser::advance`] absorbs them into two
//! single-slot registers, one for the last leading comment and one for the
//! last trailing comment. Grammar rules read and clear those registers at
//! fixed points:
//!
//! - a declaration takes the leading comment right after its keyword
//! - a property signature takes the trailing comment right after its `;`
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by keyword
//! - NUD handlers for initializer expressions
//! - NUD/LED handlers and binding powers for types

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::statements::SourceFile,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{illegal_reason, Lexer},
        tokens::{Keyword, Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt_list,
    types::{create_token_type_lookups, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler, TypeNUDLookup},
};

/// Recursive descent parser over a single source buffer.
///
/// Single use: [`Parser::parse_source_file`] consumes it.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// The token the grammar is looking at
    token: Token,
    /// Last comment seen on a line of its own
    last_comment: Option<String>,
    /// Last comment seen after code on the same line
    last_line_comment: Option<String>,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    type_nud_lookup: TypeNUDLookup,
    type_led_lookup: TypeLEDLookup,
    type_binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a parser with its lookup tables registered. No token is read
    /// until parsing starts.
    pub fn new(source: &'a [u8]) -> Self {
        let mut parser = Parser {
            lexer: Lexer::new(source),
            token: MK_TOKEN!(TokenKind::EOF, String::new(), 0, 0),
            last_comment: None,
            last_line_comment: None,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        };

        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);

        parser
    }

    /// Parses statements until end of input.
    pub fn parse_source_file(mut self) -> Result<SourceFile, Error> {
        self.advance()?;

        let statements = parse_stmt_list(&mut self, TokenKind::EOF)?;
        debug!(statements = statements.len(), "parsed source file");

        Ok(SourceFile { statements })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.token.kind
    }

    /// True when the current token is the identifier `text`.
    pub fn is_identifier(&self, text: &str) -> bool {
        self.token.kind == TokenKind::Identifier && self.token.value == text
    }

    /// Moves to the next non-comment token and returns the previous one.
    ///
    /// Comments passed on the way are stored in the comment registers. An
    /// illegal token from the lexer ends the parse.
    pub fn advance(&mut self) -> Result<Token, Error> {
        loop {
            let next = self.lexer.pop();
            match next.kind {
                TokenKind::LeadingComment => self.last_comment = non_empty(next.value),
                TokenKind::TrailingComment => self.last_line_comment = non_empty(next.value),
                TokenKind::Illegal => {
                    let error = Error::new(illegal_reason(&next), next.span.start);
                    debug!(offset = next.span.start.0, %error, "lexical error");
                    return Err(error);
                }
                _ => return Ok(std::mem::replace(&mut self.token, next)),
            }
        }
    }

    /// Consumes a token of the given kind or fails without advancing.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.token.kind != expected_kind {
            return Err(self.expected(expected_kind));
        }

        self.advance()
    }

    /// Error for the current token when `expected_kind` was required.
    pub fn expected(&self, expected_kind: TokenKind) -> Error {
        let error = match self.token.kind {
            TokenKind::EOF => ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected_kind.name()),
            },
            found => ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found,
                token: self.token.value.clone(),
            },
        };

        Error::new(error, self.get_position())
    }

    /// Error for the current token at a position where none of the accepted
    /// tokens is a single kind. `expected` describes what was acceptable.
    pub fn unexpected(&self, expected: &str) -> Error {
        let error = match self.token.kind {
            TokenKind::EOF => ErrorImpl::UnexpectedEndOfInput {
                expected: String::from(expected),
            },
            kind => ErrorImpl::UnexpectedToken {
                kind,
                token: self.token.value.clone(),
            },
        };

        Error::new(error, self.get_position())
    }

    /// Takes the pending leading comment.
    pub fn consume_comment(&mut self) -> Option<String> {
        self.last_comment.take()
    }

    /// Takes the pending trailing comment.
    pub fn consume_line_comment(&mut self) -> Option<String> {
        self.last_line_comment.take()
    }

    /// Byte offset of the current token.
    pub fn get_position(&self) -> Position {
        self.token.span.start
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_type_bp_lookup(&self) -> &BPLookup {
        &self.type_binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    /// Registers an initializer handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    /// Registers a type operator and its binding power.
    pub fn type_led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: TypeLEDHandler) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    /// Registers the handler for a type starting with `kind`.
    ///
    /// Unlike operators this does not touch the binding power table: a
    /// token that only starts a type must end the operator loop.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }
}

fn non_empty(comment: String) -> Option<String> {
    if comment.is_empty() {
        None
    } else {
        Some(comment)
    }
}

/// Parses a declaration file into its syntax tree.
///
/// Fails on the first lexical or syntax error; no partial tree is returned.
pub fn parse(source: &[u8]) -> Result<SourceFile, Error> {
    Parser::new(source).parse_source_file()
}
