use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{errors::errors::ErrorImpl, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Builds a token from the `len` bytes at the lexer's offset.
pub type RegexHandler = fn(&mut Lexer, usize) -> Token;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Anchored, tried in order. Whitespace is handled before the table.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: pattern(r"^[a-zA-Z][a-zA-Z0-9_]*"), handler: identifier_handler },
        RegexPattern { regex: pattern(r"^[0-9]+"), handler: number_handler },
        RegexPattern { regex: pattern(r"^'(?-u:[^'])*'"), handler: string_handler },
        RegexPattern { regex: pattern(r"^'"), handler: unterminated_handler },
        RegexPattern { regex: pattern(r"^//(?-u:[^\n])*"), handler: line_comment_handler },
        RegexPattern { regex: pattern(r"^/\*(?s-u:.)*?\*/"), handler: block_comment_handler },
        RegexPattern { regex: pattern(r"^/\*"), handler: unterminated_handler },
        RegexPattern { regex: pattern(r"^\|"), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|") },
        RegexPattern { regex: pattern(r"^="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: pattern(r"^-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: pattern(r"^\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: pattern(r"^\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: pattern(r"^\["), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: pattern(r"^\]"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: pattern(r"^\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: pattern(r"^\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: pattern(r"^<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: pattern(r"^>"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: pattern(r"^,"), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: pattern(r"^\."), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: pattern(r"^:"), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: pattern(r"^;"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: pattern(r"^\?"), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
    ];
}

fn pattern(source: &str) -> Regex {
    // Patterns are literals above; failure here is a typo in the table.
    Regex::new(source).unwrap_or_else(|err| panic!("invalid lexer pattern {source:?}: {err}"))
}

/// Pull-based scanner with a single token of lookahead.
///
/// Comments are returned as tokens. A comment is a
/// [`TokenKind::TrailingComment`] when code precedes it on the same line,
/// otherwise a [`TokenKind::LeadingComment`].
pub struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    /// Set once code is seen on the current line, cleared by a newline.
    will_be_trailing: bool,
    lookahead: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            will_be_trailing: false,
            lookahead: None,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> &Token {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.next_token(),
        };
        self.lookahead.insert(token)
    }

    /// Consumes and returns the next token.
    pub fn pop(&mut self) -> Token {
        self.lookahead.take().unwrap_or_else(|| self.next_token())
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn mark_code(&mut self) {
        self.will_be_trailing = true;
    }

    pub fn at(&self) -> u8 {
        self.source[self.pos]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32)
    }

    fn text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.source[start..end]).into_owned()
    }

    fn comment_kind(&self) -> TokenKind {
        if self.will_be_trailing {
            TokenKind::TrailingComment
        } else {
            TokenKind::LeadingComment
        }
    }

    fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            match self.at() {
                b' ' | b'\t' | b'\r' => self.advance_n(1),
                b'\n' => {
                    self.advance_n(1);
                    self.will_be_trailing = false;
                }
                _ => return self.match_patterns(),
            }
        }

        MK_TOKEN!(TokenKind::EOF, String::new(), self.pos, self.pos)
    }

    fn match_patterns(&mut self) -> Token {
        let source = self.source;
        let remainder = &source[self.pos..];

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remainder) {
                return (pattern.handler)(self, matched.end());
            }
        }

        // Nothing matched: report the whole (possibly multi-byte) character.
        self.mark_code();
        let start = self.pos;
        self.advance_n(utf8_width(self.at()));
        MK_TOKEN!(TokenKind::Illegal, self.text(start, self.pos), start, self.pos)
    }
}

fn utf8_width(first: u8) -> usize {
    match first {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

fn lexeme(lexer: &mut Lexer, kind: TokenKind, len: usize) -> Token {
    lexer.mark_code();
    let start = lexer.pos;
    lexer.advance_n(len);
    MK_TOKEN!(kind, lexer.text(start, lexer.pos), start, lexer.pos)
}

fn identifier_handler(lexer: &mut Lexer, len: usize) -> Token {
    lexeme(lexer, TokenKind::Identifier, len)
}

fn number_handler(lexer: &mut Lexer, len: usize) -> Token {
    lexeme(lexer, TokenKind::Number, len)
}

// Escapes are not processed: `'\n'` is the two characters `\` and `n`.
fn string_handler(lexer: &mut Lexer, len: usize) -> Token {
    lexer.mark_code();
    let start = lexer.pos;
    let value = lexer.text(start + 1, start + len - 1);
    lexer.advance_n(len);
    MK_TOKEN!(TokenKind::String, value, start, lexer.pos)
}

// An opening `'` or `/*` with no terminator swallows the rest of the input.
fn unterminated_handler(lexer: &mut Lexer, _len: usize) -> Token {
    let start = lexer.pos;
    lexer.advance_n(lexer.source.len() - start);
    MK_TOKEN!(TokenKind::Illegal, lexer.text(start, lexer.pos), start, lexer.pos)
}

fn line_comment_handler(lexer: &mut Lexer, len: usize) -> Token {
    let start = lexer.pos;
    let body = lexer.text(start + 2, start + len);
    let value = body.trim_start_matches(' ').trim_end_matches('\r').to_string();
    lexer.advance_n(len);
    MK_TOKEN!(lexer.comment_kind(), value, start, lexer.pos)
}

fn block_comment_handler(lexer: &mut Lexer, len: usize) -> Token {
    let start = lexer.pos;
    let value = reflow_block_comment(&lexer.text(start + 2, start + len - 2));
    lexer.advance_n(len);
    MK_TOKEN!(lexer.comment_kind(), value, start, lexer.pos)
}

/// Turns the inside of a `/* ... */` comment into plain text.
///
/// Stars hugging the delimiters are dropped, every line after the first loses
/// its leading run of spaces, tabs and `*`, and the result is trimmed.
pub fn reflow_block_comment(inner: &str) -> String {
    let inner = inner.trim_start_matches('*').trim_end_matches('*');
    let mut lines = inner.split('\n');

    let mut result = String::from(lines.next().unwrap_or_default());
    for line in lines {
        result.push('\n');
        result.push_str(line.trim_start_matches([' ', '\t', '*']));
    }

    result.trim().to_string()
}

/// Classifies an [`TokenKind::Illegal`] token into the lexical error it represents.
pub fn illegal_reason(token: &Token) -> ErrorImpl {
    if token.value.starts_with('\'') {
        ErrorImpl::UnterminatedString {
            literal: token.value.clone(),
        }
    } else if token.value.starts_with("/*") {
        ErrorImpl::UnterminatedBlockComment
    } else {
        ErrorImpl::UnrecognisedCharacter {
            character: token.value.clone(),
        }
    }
}

/// Scans `source` to the end, returning every token including comments and
/// the final [`TokenKind::EOF`].
///
/// Illegal characters are returned as [`TokenKind::Illegal`] tokens rather
/// than stopping the scan.
pub fn tokenize(source: &[u8]) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.pop();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
