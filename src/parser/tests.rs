//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the declaration grammar including:
//! - Type aliases, enums, interfaces, namespaces and constants
//! - Type expressions and their precedence
//! - Comment attachment
//! - Error reporting

use super::parser::{parse, Parser};
use crate::{
    ast::{
        ast::{EntityName, Expr, Literal, Signature, Stmt, Type},
        expressions::{
            ArrayLiteralExpression, EnumMember, ExpressionWithTypeArguments, HeritageClause,
            Identifier, NumericLiteral, Parameter, PrefixUnaryExpression, QualifiedName,
            StringLiteral, TypeParameter, VariableDeclaration,
        },
        signatures::{IndexSignature, PropertySignature},
        statements::{EnumDeclaration, SourceFile, TypeAliasDeclaration},
        types::{ArrayType, LiteralType, ParenthesizedType, TupleType, TypeReference, UnionType},
    },
    errors::errors::{ErrorClass, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

fn parse_ok(source: &str) -> SourceFile {
    match parse(source.as_bytes()) {
        Ok(file) => file,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

fn parse_single(source: &str) -> Stmt {
    let mut file = parse_ok(source);
    assert_eq!(file.statements.len(), 1, "expected one statement in {source:?}");
    file.statements.remove(0)
}

fn parse_err(source: &str) -> crate::errors::errors::Error {
    match parse(source.as_bytes()) {
        Ok(file) => panic!("expected {source:?} to fail, got {file:?}"),
        Err(err) => err,
    }
}

fn reference(name: &str) -> Type {
    Type::reference(name)
}

fn property(name: &str, ty: Type) -> Signature {
    Signature::Property(PropertySignature {
        name: Identifier::new(name),
        question_token: false,
        ty,
        leading_comment: None,
        trailing_comment: None,
    })
}

fn members(stmt: &Stmt) -> &[Signature] {
    match stmt {
        Stmt::Interface(decl) => &decl.members,
        other => panic!("expected an interface, got {other:?}"),
    }
}

fn alias_type(stmt: &Stmt) -> &Type {
    match stmt {
        Stmt::TypeAlias(decl) => &decl.ty,
        other => panic!("expected a type alias, got {other:?}"),
    }
}

#[test]
fn test_parse_type_alias() {
    let stmt = parse_single("type X = number;");

    assert_eq!(
        stmt,
        Stmt::TypeAlias(TypeAliasDeclaration {
            name: Identifier::new("X"),
            ty: reference("number"),
            leading_comment: None,
        })
    );
}

#[test]
fn test_parse_type_alias_without_semicolon() {
    let file = parse_ok("type A = string\ntype B = A");
    assert_eq!(file.statements.len(), 2);
}

#[test]
fn test_parse_generic_interface() {
    let stmt = parse_single("interface P<T> { token: Tok; value: T; }");

    let Stmt::Interface(decl) = &stmt else {
        panic!("expected an interface, got {stmt:?}");
    };
    assert_eq!(decl.name, Identifier::new("P"));
    assert_eq!(
        decl.type_parameters,
        vec![TypeParameter {
            name: Identifier::new("T")
        }]
    );
    assert!(decl.heritage_clauses.is_empty());
    assert_eq!(
        decl.members,
        vec![property("token", reference("Tok")), property("value", reference("T"))]
    );
}

#[test]
fn test_parse_multiple_type_parameters() {
    let stmt = parse_single("interface Pair<K, V> { key: K; value: V; }");

    let Stmt::Interface(decl) = &stmt else {
        panic!("expected an interface, got {stmt:?}");
    };
    let names: Vec<&str> = decl
        .type_parameters
        .iter()
        .map(|param| param.name.text.as_str())
        .collect();
    assert_eq!(names, ["K", "V"]);
}

#[test]
fn test_parse_string_enum() {
    let stmt = parse_single("enum E { A = 'a', B = 'b' }");

    assert_eq!(
        stmt,
        Stmt::Enum(EnumDeclaration {
            name: Identifier::new("E"),
            members: vec![
                EnumMember {
                    name: Identifier::new("A"),
                    initializer: Some(Expr::StringLiteral(StringLiteral {
                        text: String::from("a")
                    })),
                    leading_comment: None,
                },
                EnumMember {
                    name: Identifier::new("B"),
                    initializer: Some(Expr::StringLiteral(StringLiteral {
                        text: String::from("b")
                    })),
                    leading_comment: None,
                },
            ],
            leading_comment: None,
        })
    );
}

#[test]
fn test_parse_enum_trailing_comma_and_bare_members() {
    let stmt = parse_single("enum Kind { Text, Method = 2, Other = -1, }");

    let Stmt::Enum(decl) = &stmt else {
        panic!("expected an enum, got {stmt:?}");
    };
    assert_eq!(decl.members.len(), 3);
    assert_eq!(decl.members[0].initializer, None);
    assert_eq!(
        decl.members[1].initializer,
        Some(Expr::NumericLiteral(NumericLiteral {
            text: String::from("2")
        }))
    );
    assert_eq!(
        decl.members[2].initializer,
        Some(Expr::PrefixUnary(PrefixUnaryExpression {
            operator: TokenKind::Dash,
            operand: Box::new(Expr::NumericLiteral(NumericLiteral {
                text: String::from("1")
            })),
        }))
    );
}

#[test]
fn test_parse_empty_enum() {
    let stmt = parse_single("enum Empty {}");
    let Stmt::Enum(decl) = &stmt else {
        panic!("expected an enum, got {stmt:?}");
    };
    assert!(decl.members.is_empty());
}

#[test]
fn test_parse_index_signature() {
    let stmt = parse_single("interface O { [key: string]: number; }");

    assert_eq!(
        members(&stmt),
        [Signature::Index(IndexSignature {
            parameters: vec![Parameter {
                name: Identifier::new("key"),
                ty: reference("string"),
            }],
            ty: reference("number"),
            leading_comment: None,
        })]
    );
}

#[test]
fn test_parse_unterminated_string_is_lex_error() {
    let err = parse_err("const x: string = 'abc;");

    assert_eq!(err.class(), ErrorClass::Lex);
    assert_eq!(
        err.get_impl(),
        &ErrorImpl::UnterminatedString {
            literal: String::from("'abc;")
        }
    );
    assert_eq!(err.get_position(), &Position(18));
}

#[test]
fn test_parse_interface_extends_with_union() {
    let stmt = parse_single("interface R extends Message { id: integer | string | null; }");

    let Stmt::Interface(decl) = &stmt else {
        panic!("expected an interface, got {stmt:?}");
    };
    assert_eq!(
        decl.heritage_clauses,
        vec![HeritageClause {
            types: vec![ExpressionWithTypeArguments {
                expression: Identifier::new("Message")
            }]
        }]
    );
    assert_eq!(
        decl.members,
        vec![property(
            "id",
            Type::Union(UnionType {
                types: vec![reference("integer"), reference("string"), reference("null")]
            })
        )]
    );
}

#[test]
fn test_heritage_items_become_separate_clauses() {
    let stmt = parse_single("interface A extends B, C {}");

    let Stmt::Interface(decl) = &stmt else {
        panic!("expected an interface, got {stmt:?}");
    };
    assert_eq!(decl.heritage_clauses.len(), 2);
    for (clause, name) in decl.heritage_clauses.iter().zip(["B", "C"]) {
        assert_eq!(clause.types.len(), 1);
        assert_eq!(clause.types[0].expression, Identifier::new(name));
    }
}

#[test]
fn test_single_type_is_never_a_union() {
    let stmt = parse_single("type A = B;");
    assert!(!matches!(alias_type(&stmt), Type::Union(_)));
}

#[test]
fn test_union_stays_flat() {
    let stmt = parse_single("type A = B | C[] | (D | E) | 'x' | 1;");

    assert_eq!(
        alias_type(&stmt),
        &Type::Union(UnionType {
            types: vec![
                reference("B"),
                Type::Array(ArrayType {
                    element_type: Box::new(reference("C"))
                }),
                Type::Parenthesized(ParenthesizedType {
                    ty: Box::new(Type::Union(UnionType {
                        types: vec![reference("D"), reference("E")]
                    }))
                }),
                Type::Literal(LiteralType {
                    literal: Literal::String(StringLiteral {
                        text: String::from("x")
                    })
                }),
                Type::Literal(LiteralType {
                    literal: Literal::Numeric(NumericLiteral {
                        text: String::from("1")
                    })
                }),
            ]
        })
    );
}

#[test]
fn test_array_binds_tighter_than_union() {
    let stmt = parse_single("type A = (TextEdit | AnnotatedTextEdit)[];");

    let Type::Array(array) = alias_type(&stmt) else {
        panic!("expected an array type");
    };
    assert!(matches!(*array.element_type, Type::Parenthesized(_)));
}

#[test]
fn test_nested_array_type() {
    let stmt = parse_single("type Matrix = uinteger[][];");

    assert_eq!(
        alias_type(&stmt),
        &Type::Array(ArrayType {
            element_type: Box::new(Type::Array(ArrayType {
                element_type: Box::new(reference("uinteger"))
            }))
        })
    );
}

#[test]
fn test_qualified_type_reference() {
    let stmt = parse_single("type K = DocumentDiagnosticReportKind.Full;");

    assert_eq!(
        alias_type(&stmt),
        &Type::Reference(TypeReference {
            type_name: EntityName::Qualified(QualifiedName {
                left: Identifier::new("DocumentDiagnosticReportKind"),
                right: Identifier::new("Full"),
            })
        })
    );
}

#[test]
fn test_qualification_is_one_level_deep() {
    let err = parse_err("type K = A.B.C;");
    assert_eq!(err.class(), ErrorClass::Syntax);
}

#[test]
fn test_tuple_types() {
    let stmt = parse_single("type Label = string | [uinteger, uinteger];");
    let Type::Union(union) = alias_type(&stmt) else {
        panic!("expected a union");
    };
    assert_eq!(
        union.types[1],
        Type::Tuple(TupleType {
            elements: vec![reference("uinteger"), reference("uinteger")]
        })
    );

    let stmt = parse_single("type Empty = [];");
    assert_eq!(alias_type(&stmt), &Type::Tuple(TupleType { elements: vec![] }));

    let stmt = parse_single("type One = [A,];");
    assert_eq!(
        alias_type(&stmt),
        &Type::Tuple(TupleType {
            elements: vec![reference("A")]
        })
    );
}

#[test]
fn test_type_literal_members() {
    let stmt = parse_single("type Position = { line: uinteger; character: uinteger };");

    let Type::TypeLiteral(literal) = alias_type(&stmt) else {
        panic!("expected a type literal");
    };
    assert_eq!(
        literal.members,
        vec![
            property("line", reference("uinteger")),
            property("character", reference("uinteger")),
        ]
    );
}

#[test]
fn test_comma_separated_members() {
    let stmt = parse_single("type P = { line: uinteger, character: uinteger, };");
    let Type::TypeLiteral(literal) = alias_type(&stmt) else {
        panic!("expected a type literal");
    };
    assert_eq!(literal.members.len(), 2);
}

#[test]
fn test_optional_and_readonly_properties() {
    let stmt = parse_single(
        "interface SemanticTokensDelta { readonly resultId?: string; edits: SemanticTokensEdit[]; }",
    );

    let Signature::Property(result_id) = &members(&stmt)[0] else {
        panic!("expected a property");
    };
    assert_eq!(result_id.name, Identifier::new("resultId"));
    assert!(result_id.question_token);

    let Signature::Property(edits) = &members(&stmt)[1] else {
        panic!("expected a property");
    };
    assert!(!edits.question_token);
}

#[test]
fn test_readonly_as_property_name() {
    let stmt = parse_single("interface Options { readonly: boolean; readonly?: boolean; }");

    for member in members(&stmt) {
        let Signature::Property(prop) = member else {
            panic!("expected a property");
        };
        assert_eq!(prop.name, Identifier::new("readonly"));
    }
}

#[test]
fn test_keyword_property_names() {
    let stmt = parse_single("interface FileEvent { type: FileChangeType; enum: E; }");
    assert_eq!(
        members(&stmt),
        [
            property("type", reference("FileChangeType")),
            property("enum", reference("E")),
        ]
    );
}

#[test]
fn test_namespace_of_constants() {
    let stmt = parse_single(
        "export namespace ErrorCodes {
            export const ParseError: integer = -32700;
            export const serverErrorStart: integer = jsonrpcReservedErrorRangeStart;
        }",
    );

    let Stmt::Module(module) = &stmt else {
        panic!("expected a namespace, got {stmt:?}");
    };
    assert_eq!(module.name, Identifier::new("ErrorCodes"));
    assert_eq!(module.body.statements.len(), 2);

    let Stmt::Variable(second) = &module.body.statements[1] else {
        panic!("expected a constant");
    };
    assert_eq!(
        second.declaration_list.declarations,
        vec![VariableDeclaration {
            name: Identifier::new("serverErrorStart"),
            ty: Some(reference("integer")),
            initializer: Some(Expr::Reference(TypeReference {
                type_name: EntityName::Identifier(Identifier::new(
                    "jsonrpcReservedErrorRangeStart"
                ))
            })),
        }]
    );
}

#[test]
fn test_constant_declaration_list() {
    let stmt = parse_single("const a = 1, b: string = 'x', c: T;");

    let Stmt::Variable(var) = &stmt else {
        panic!("expected a constant, got {stmt:?}");
    };
    let declarations = &var.declaration_list.declarations;
    assert_eq!(declarations.len(), 3);
    assert_eq!(declarations[0].ty, None);
    assert_eq!(declarations[2].initializer, None);
}

#[test]
fn test_array_literal_initializer() {
    let stmt = parse_single(r"export const EOL: string[] = ['\n', '\r\n', '\r'];");

    let Stmt::Variable(var) = &stmt else {
        panic!("expected a constant, got {stmt:?}");
    };
    let decl = &var.declaration_list.declarations[0];
    assert_eq!(decl.name, Identifier::new("EOL"));
    assert_eq!(
        decl.initializer,
        Some(Expr::ArrayLiteral(ArrayLiteralExpression {
            elements: [r"\n", r"\r\n", r"\r"]
                .into_iter()
                .map(|text| Expr::StringLiteral(StringLiteral {
                    text: String::from(text)
                }))
                .collect()
        }))
    );
}

#[test]
fn test_constant_requires_semicolon() {
    let err = parse_err("const a = 1");
    assert_eq!(
        err.get_impl(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: String::from(";")
        }
    );
}

#[test]
fn test_leading_comment_attaches_to_declaration() {
    let file = parse_ok(
        "/**
          * Defines an integer number in the range of -2^31 to 2^31 - 1.
          */

         export type integer = number;",
    );

    let Stmt::TypeAlias(decl) = &file.statements[0] else {
        panic!("expected a type alias");
    };
    assert_eq!(
        decl.leading_comment.as_deref(),
        Some("Defines an integer number in the range of -2^31 to 2^31 - 1.")
    );
}

#[test]
fn test_only_the_nearest_comment_is_kept() {
    let file = parse_ok(
        "// first
         type A = string;
         // second
         type B = string;
         type C = string;",
    );

    let comments: Vec<Option<&str>> = file
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::TypeAlias(decl) => decl.leading_comment.as_deref(),
            other => panic!("expected a type alias, got {other:?}"),
        })
        .collect();
    assert_eq!(comments, [Some("first"), Some("second"), None]);
}

#[test]
fn test_trailing_comment_attaches_to_property() {
    let stmt = parse_single(
        "interface HoverParams {
            textDocument: string; // The text document's URI in string form
            position: { line: uinteger; character: uinteger; };
        }",
    );

    let Signature::Property(text_document) = &members(&stmt)[0] else {
        panic!("expected a property");
    };
    assert_eq!(
        text_document.trailing_comment.as_deref(),
        Some("The text document's URI in string form")
    );
    assert_eq!(text_document.leading_comment, None);

    let Signature::Property(position) = &members(&stmt)[1] else {
        panic!("expected a property");
    };
    assert_eq!(position.trailing_comment, None);
    let Type::TypeLiteral(literal) = &position.ty else {
        panic!("expected a type literal");
    };
    for member in &literal.members {
        let Signature::Property(prop) = member else {
            panic!("expected a property");
        };
        assert_eq!(prop.leading_comment, None);
        assert_eq!(prop.trailing_comment, None);
    }
}

#[test]
fn test_comment_never_takes_both_roles() {
    let stmt = parse_single(
        "interface A {
            a: string; // after a
            b: string;
        }",
    );

    let [Signature::Property(a), Signature::Property(b)] = members(&stmt) else {
        panic!("expected two properties");
    };
    assert_eq!(a.trailing_comment.as_deref(), Some("after a"));
    assert_eq!(b.leading_comment, None);
    assert_eq!(b.trailing_comment, None);
}

#[test]
fn test_member_comments() {
    let stmt = parse_single(
        "/**
          * Registration options.
          */
         export interface Options {
             /**
              * The progress token provided by the client or server.
              */
             token: ProgressToken;

             /**
              * Signature for further properties.
              */
             [key: string]: boolean | integer | string;
         }",
    );

    let Stmt::Interface(decl) = &stmt else {
        panic!("expected an interface");
    };
    assert_eq!(decl.leading_comment.as_deref(), Some("Registration options."));

    let Signature::Property(token) = &decl.members[0] else {
        panic!("expected a property");
    };
    assert_eq!(
        token.leading_comment.as_deref(),
        Some("The progress token provided by the client or server.")
    );

    let Signature::Index(index) = &decl.members[1] else {
        panic!("expected an index signature");
    };
    assert_eq!(
        index.leading_comment.as_deref(),
        Some("Signature for further properties.")
    );
}

#[test]
fn test_enum_member_comments() {
    let stmt = parse_single(
        "export enum SemanticTokenTypes {
            namespace = 'namespace',
            /**
             * Represents a generic type.
             */
            type = 'type',
            class = 'class',
        }",
    );

    let Stmt::Enum(decl) = &stmt else {
        panic!("expected an enum");
    };
    let comments: Vec<Option<&str>> = decl
        .members
        .iter()
        .map(|member| member.leading_comment.as_deref())
        .collect();
    assert_eq!(comments, [None, Some("Represents a generic type."), None]);
}

#[test]
fn test_dangling_comment_before_brace_is_dropped() {
    let file = parse_ok(
        "interface A {
            a: string;
            // nothing follows
        }
        type B = A;",
    );

    let Stmt::TypeAlias(decl) = &file.statements[1] else {
        panic!("expected a type alias");
    };
    assert_eq!(decl.leading_comment, None);
}

#[test]
fn test_stray_semicolons_are_skipped() {
    let file = parse_ok(";type A = B;; namespace N { ; const x = 1;; }");
    assert_eq!(file.statements.len(), 2);
}

#[test]
fn test_repeated_export_modifiers() {
    let stmt = parse_single("export export type A = B;");
    assert!(matches!(stmt, Stmt::TypeAlias(_)));
}

#[test]
fn test_empty_source() {
    assert_eq!(parse_ok(""), SourceFile::default());
    assert_eq!(parse_ok("  // only a comment\n"), SourceFile::default());
}

#[test]
fn test_unknown_keyword() {
    let err = parse_err("type A = B;\nclass C {}");

    assert_eq!(err.class(), ErrorClass::Syntax);
    assert_eq!(
        err.get_impl(),
        &ErrorImpl::UnexpectedKeyword {
            keyword: String::from("class")
        }
    );
    assert_eq!(err.get_position(), &Position(12));
}

#[test]
fn test_expected_token() {
    let err = parse_err("type X number;");

    assert_eq!(
        err.get_impl(),
        &ErrorImpl::ExpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Identifier,
            token: String::from("number"),
        }
    );
    assert_eq!(err.get_position(), &Position(7));
}

#[test]
fn test_statement_must_start_with_identifier() {
    let err = parse_err("{}");
    assert_eq!(
        err.get_impl(),
        &ErrorImpl::ExpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::OpenCurly,
            token: String::from("{"),
        }
    );
}

#[test]
fn test_unexpected_end_of_input() {
    let err = parse_err("interface A {\n  a: string;\n");

    assert_eq!(err.class(), ErrorClass::Syntax);
    assert!(matches!(
        err.get_impl(),
        ErrorImpl::UnexpectedEndOfInput { .. }
    ));
}

#[test]
fn test_unexpected_token_in_type_position() {
    let err = parse_err("type A = ;");
    assert_eq!(
        err.get_impl(),
        &ErrorImpl::UnexpectedToken {
            kind: TokenKind::Semicolon,
            token: String::from(";"),
        }
    );
}

#[test]
fn test_index_signature_takes_one_parameter() {
    let err = parse_err("interface A { [a: string, b: string]: T; }");
    assert!(matches!(
        err.get_impl(),
        ErrorImpl::ExpectedToken {
            expected: TokenKind::CloseBracket,
            found: TokenKind::Comma,
            ..
        }
    ));
}

#[test]
fn test_illegal_character_stops_parse() {
    let err = parse_err("type A = B;\ntype C = #;");

    assert_eq!(err.class(), ErrorClass::Lex);
    assert_eq!(
        err.get_impl(),
        &ErrorImpl::UnrecognisedCharacter {
            character: String::from("#")
        }
    );
    assert_eq!(err.get_position(), &Position(21));
}

#[test]
fn test_unterminated_block_comment() {
    let err = parse_err("type A = B;\n/** never closed");
    assert_eq!(err.get_impl(), &ErrorImpl::UnterminatedBlockComment);
}

#[test]
fn test_parser_used_directly() {
    let file = Parser::new(b"type A = B;").parse_source_file();
    assert_eq!(file, parse(b"type A = B;"));
}

#[test]
fn test_parse_is_deterministic() {
    let source = "export interface A<T> extends B { a?: T | C.D[]; [k: string]: [E, 1]; }";
    assert_eq!(parse_ok(source), parse_ok(source));
}
