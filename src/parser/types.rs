//! Type parsing implementation.
//!
//! This module handles parsing of type expressions. It supports:
//!
//! - Type references (`string`, `Ns.Member`)
//! - Type literals (`{ line: uinteger }`)
//! - Parenthesized and tuple types
//! - String and number literal types
//! - Array types (`T[]`, `T[][]`)
//! - Union types (`A | B | C`), kept flat
//!
//! It uses NUD/LED handlers with binding powers to resolve precedence
//! between `|` and `[]`.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::{EntityName, Literal, Type},
        expressions::{NumericLiteral, QualifiedName, StringLiteral},
        types::{
            ArrayType, LiteralType, ParenthesizedType, TupleType, TypeLiteral, TypeReference,
            UnionType,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_identifier, lookups::BindingPower, parser::Parser, stmt::parse_signature_block,
};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, Type, BindingPower) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_type_reference);
    parser.type_nud(TokenKind::OpenCurly, parse_type_literal);
    parser.type_nud(TokenKind::OpenParen, parse_parenthesized_type);
    parser.type_nud(TokenKind::OpenBracket, parse_tuple_type);
    parser.type_nud(TokenKind::String, parse_literal_type);
    parser.type_nud(TokenKind::Number, parse_literal_type);

    parser.type_led(TokenKind::Pipe, BindingPower::Union, parse_union_type);
    parser.type_led(TokenKind::OpenBracket, BindingPower::Array, parse_array_type);
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("a type")),
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, extend the lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = *parser
            .get_type_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let led = match parser.get_type_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected("a type operator")),
        };
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_type_reference(parser: &mut Parser) -> Result<Type, Error> {
    let left = parse_identifier(parser)?;

    let type_name = if parser.current_token_kind() == TokenKind::Dot {
        parser.advance()?;
        EntityName::Qualified(QualifiedName {
            left,
            right: parse_identifier(parser)?,
        })
    } else {
        EntityName::Identifier(left)
    };

    Ok(Type::Reference(TypeReference { type_name }))
}

pub fn parse_type_literal(parser: &mut Parser) -> Result<Type, Error> {
    let members = parse_signature_block(parser)?;
    Ok(Type::TypeLiteral(TypeLiteral { members }))
}

pub fn parse_parenthesized_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let ty = parse_type(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Type::Parenthesized(ParenthesizedType { ty: Box::new(ty) }))
}

/// `[A, B]`, `[]`, `[A, B,]`
pub fn parse_tuple_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut elements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseBracket {
        elements.push(parse_type(parser, BindingPower::Default)?);
        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance()?;
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Type::Tuple(TupleType { elements }))
}

pub fn parse_literal_type(parser: &mut Parser) -> Result<Type, Error> {
    let literal = match parser.current_token_kind() {
        TokenKind::String => Literal::String(StringLiteral {
            text: parser.advance()?.value,
        }),
        TokenKind::Number => Literal::Numeric(NumericLiteral {
            text: parser.advance()?.value,
        }),
        _ => return Err(parser.unexpected("a literal type")),
    };

    Ok(Type::Literal(LiteralType { literal }))
}

pub fn parse_array_type(
    parser: &mut Parser,
    left: Type,
    _bp: BindingPower,
) -> Result<Type, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Type::Array(ArrayType {
        element_type: Box::new(left),
    }))
}

/// Collects every `|` member at this level into one union.
pub fn parse_union_type(parser: &mut Parser, left: Type, bp: BindingPower) -> Result<Type, Error> {
    let mut types = vec![left];

    while parser.current_token_kind() == TokenKind::Pipe {
        parser.advance()?;
        types.push(parse_type(parser, bp)?);
    }

    Ok(Type::Union(UnionType { types }))
}
