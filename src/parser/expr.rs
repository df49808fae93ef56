use crate::{
    ast::{
        ast::{EntityName, Expr},
        expressions::{
            ArrayLiteralExpression, Identifier, NumericLiteral, PrefixUnaryExpression,
            StringLiteral,
        },
        types::TypeReference,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses an initializer: the value after `=` in an enum member or a
/// variable declaration.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("an initializer")),
    };

    nud(parser)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Identifier::new(token.value))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => Ok(Expr::NumericLiteral(NumericLiteral {
            text: parser.advance()?.value,
        })),
        TokenKind::String => Ok(Expr::StringLiteral(StringLiteral {
            text: parser.advance()?.value,
        })),
        _ => Err(parser.unexpected("a literal")),
    }
}

/// A bare name refers to another declaration: `Error = ErrorCodes.Base` is
/// not supported, `Error = Base` is.
pub fn parse_reference_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parse_identifier(parser)?;
    Ok(Expr::Reference(TypeReference {
        type_name: EntityName::Identifier(name),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.expect(TokenKind::Dash)?;
    let operand = parse_expr(parser)?;

    Ok(Expr::PrefixUnary(PrefixUnaryExpression {
        operator: operator_token.kind,
        operand: Box::new(operand),
    }))
}

/// `['\n', '\r\n']`. A trailing comma is accepted.
pub fn parse_array_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut elements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseBracket {
        elements.push(parse_expr(parser)?);
        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance()?;
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::ArrayLiteral(ArrayLiteralExpression { elements }))
}
