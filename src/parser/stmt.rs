use tracing::trace;

use crate::{
    ast::{
        ast::{Signature, Stmt},
        expressions::{
            EnumMember, ExpressionWithTypeArguments, HeritageClause, Identifier, Parameter,
            TypeParameter, VariableDeclaration, VariableDeclarationList,
        },
        signatures::{IndexSignature, PropertySignature},
        statements::{
            EnumDeclaration, InterfaceDeclaration, ModuleBlock, ModuleDeclaration,
            TypeAliasDeclaration, VariableStatement,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, TokenKind},
};

use super::{
    expr::{parse_expr, parse_identifier},
    lookups::BindingPower,
    parser::Parser,
    types::parse_type,
};

/// Parses statements until `terminator` is the current token, which is left
/// in place. Stray `;` between statements are skipped.
pub fn parse_stmt_list(parser: &mut Parser, terminator: TokenKind) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    loop {
        match parser.current_token_kind() {
            kind if kind == terminator => return Ok(statements),
            TokenKind::Semicolon => {
                parser.advance()?;
            }
            _ => statements.push(parse_stmt(parser)?),
        }
    }
}

/// Dispatches on the statement's leading keyword, skipping any number of
/// `export` modifiers.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    loop {
        if parser.current_token_kind() != TokenKind::Identifier {
            return Err(parser.expected(TokenKind::Identifier));
        }

        let text = parser.current_token().value.as_str();
        trace!(keyword = text, offset = parser.get_position().0, "parse_stmt");

        let handler = match Keyword::lookup(text) {
            Some(Keyword::Export) => {
                parser.advance()?;
                continue;
            }
            Some(keyword) => parser.get_stmt_lookup().get(&keyword).copied(),
            None => None,
        };

        return match handler {
            Some(handler) => handler(parser),
            None => Err(Error::new(
                ErrorImpl::UnexpectedKeyword {
                    keyword: parser.current_token().value.clone(),
                },
                parser.get_position(),
            )),
        };
    }
}

pub fn parse_variable_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    let leading_comment = parser.consume_comment();

    let mut declarations = Vec::new();
    loop {
        declarations.push(parse_variable_decl(parser)?);
        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance()?;
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Variable(VariableStatement {
        declaration_list: VariableDeclarationList { declarations },
        leading_comment,
    }))
}

fn parse_variable_decl(parser: &mut Parser) -> Result<VariableDeclaration, Error> {
    let name = parse_identifier(parser)?;

    let mut ty = None;
    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance()?;
        ty = Some(parse_type(parser, BindingPower::Default)?);
    }

    let mut initializer = None;
    if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance()?;
        initializer = Some(parse_expr(parser)?);
    }

    Ok(VariableDeclaration {
        name,
        ty,
        initializer,
    })
}

pub fn parse_type_alias_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    let leading_comment = parser.consume_comment();

    let name = parse_identifier(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let ty = parse_type(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance()?;
    }

    Ok(Stmt::TypeAlias(TypeAliasDeclaration {
        name,
        ty,
        leading_comment,
    }))
}

pub fn parse_enum_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    let leading_comment = parser.consume_comment();

    let name = parse_identifier(parser)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut members = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        members.push(parse_enum_member(parser)?);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance()?;
            }
            TokenKind::CloseCurly => {}
            _ => return Err(parser.unexpected("`,` or `}`")),
        }
    }

    close_block(parser)?;

    Ok(Stmt::Enum(EnumDeclaration {
        name,
        members,
        leading_comment,
    }))
}

fn parse_enum_member(parser: &mut Parser) -> Result<EnumMember, Error> {
    let name = parse_identifier(parser)?;
    let leading_comment = parser.consume_comment();

    let mut initializer = None;
    if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance()?;
        initializer = Some(parse_expr(parser)?);
    }

    Ok(EnumMember {
        name,
        initializer,
        leading_comment,
    })
}

pub fn parse_interface_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    let leading_comment = parser.consume_comment();

    let name = parse_identifier(parser)?;

    let mut type_parameters = Vec::new();
    if parser.current_token_kind() == TokenKind::Less {
        parser.advance()?;
        loop {
            type_parameters.push(TypeParameter {
                name: parse_identifier(parser)?,
            });
            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
        parser.expect(TokenKind::Greater)?;
    }

    // Each comma separated base becomes its own clause.
    let mut heritage_clauses = Vec::new();
    if parser.is_identifier("extends") {
        parser.advance()?;
        loop {
            heritage_clauses.push(HeritageClause {
                types: vec![ExpressionWithTypeArguments {
                    expression: parse_identifier(parser)?,
                }],
            });
            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    let members = parse_signature_block(parser)?;

    Ok(Stmt::Interface(InterfaceDeclaration {
        name,
        type_parameters,
        heritage_clauses,
        members,
        leading_comment,
    }))
}

pub fn parse_module_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    let leading_comment = parser.consume_comment();

    let name = parse_identifier(parser)?;
    parser.expect(TokenKind::OpenCurly)?;
    let statements = parse_stmt_list(parser, TokenKind::CloseCurly)?;
    close_block(parser)?;

    Ok(Stmt::Module(ModuleDeclaration {
        name,
        body: ModuleBlock { statements },
        leading_comment,
    }))
}

/// `{ member... }` of an interface or type literal.
pub fn parse_signature_block(parser: &mut Parser) -> Result<Vec<Signature>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut members = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        members.push(parse_signature(parser)?);
    }

    close_block(parser)?;
    Ok(members)
}

// A comment left before `}` belongs to nothing; drop it so the next
// declaration does not pick it up.
fn close_block(parser: &mut Parser) -> Result<(), Error> {
    parser.consume_comment();
    parser.expect(TokenKind::CloseCurly)?;
    Ok(())
}

fn parse_signature(parser: &mut Parser) -> Result<Signature, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_property_signature(parser),
        TokenKind::OpenBracket => parse_index_signature(parser),
        _ => Err(parser.unexpected("a property or index signature")),
    }
}

fn parse_property_signature(parser: &mut Parser) -> Result<Signature, Error> {
    // Only a comment after this member's own terminator is its trailing one.
    parser.consume_line_comment();
    let leading_comment = parser.consume_comment();

    let name = if parser.is_identifier("readonly") {
        let modifier = parser.advance()?;
        match parser.current_token_kind() {
            TokenKind::Colon | TokenKind::Question => Identifier::new(modifier.value),
            _ => parse_identifier(parser)?,
        }
    } else {
        parse_identifier(parser)?
    };

    let question_token = parser.current_token_kind() == TokenKind::Question;
    if question_token {
        parser.advance()?;
    }

    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser, BindingPower::Default)?;
    skip_member_separator(parser)?;

    let trailing_comment = parser.consume_line_comment();

    Ok(Signature::Property(PropertySignature {
        name,
        question_token,
        ty,
        leading_comment,
        trailing_comment,
    }))
}

fn parse_index_signature(parser: &mut Parser) -> Result<Signature, Error> {
    let leading_comment = parser.consume_comment();

    parser.expect(TokenKind::OpenBracket)?;
    let parameter = parse_parameter(parser)?;
    parser.consume_line_comment();
    parser.expect(TokenKind::CloseBracket)?;

    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser, BindingPower::Default)?;
    skip_member_separator(parser)?;

    Ok(Signature::Index(IndexSignature {
        parameters: vec![parameter],
        ty,
        leading_comment,
    }))
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let name = parse_identifier(parser)?;
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser, BindingPower::Default)?;

    Ok(Parameter { name, ty })
}

fn skip_member_separator(parser: &mut Parser) -> Result<(), Error> {
    if matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::Comma
    ) {
        parser.advance()?;
    }
    Ok(())
}
