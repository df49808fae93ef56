use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Identifiers that introduce (or modify) a statement.
    ///
    /// Keywords are contextual: they are lexed as identifiers and only mean
    /// something at the start of a statement.
    pub static ref STATEMENT_KEYWORDS: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("export", Keyword::Export);
        map.insert("const", Keyword::Const);
        map.insert("type", Keyword::Type);
        map.insert("enum", Keyword::Enum);
        map.insert("interface", Keyword::Interface);
        map.insert("namespace", Keyword::Namespace);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Export,
    Const,
    Type,
    Enum,
    Interface,
    Namespace,
}

impl Keyword {
    pub fn lookup(text: &str) -> Option<Keyword> {
        STATEMENT_KEYWORDS.get(text).copied()
    }
}

#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Illegal,
    EOF,

    LeadingComment,  // comment on its own line
    TrailingComment, // comment after code on the same line

    Identifier,
    Number,
    String,

    Pipe,       // |
    Assignment, // =
    Dash,       // -

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Less,
    Greater,
    Comma,
    Dot,
    Colon,
    Semicolon,
    Question,
}

impl TokenKind {
    /// Every kind, ordered by `index()`.
    pub const ALL: [TokenKind; 23] = [
        TokenKind::Illegal,
        TokenKind::EOF,
        TokenKind::LeadingComment,
        TokenKind::TrailingComment,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Pipe,
        TokenKind::Assignment,
        TokenKind::Dash,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Question,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<TokenKind> {
        Self::ALL.get(index).copied()
    }

    /// Stable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::EOF => "EOF",
            TokenKind::LeadingComment => "LeadingComment",
            TokenKind::TrailingComment => "TrailingComment",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Pipe => "|",
            TokenKind::Assignment => "=",
            TokenKind::Dash => "-",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Question => "?",
        }
    }

    /// Whether tokens of this kind carry source text.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::LeadingComment
                | TokenKind::TrailingComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LeadingComment | TokenKind::TrailingComment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_literal() {
            write!(f, "{} ({:?})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
