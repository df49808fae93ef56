//! Utility macros for the declaration front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for single-byte punctuation
//!
//! These macros keep the lexer's pattern table readable.

/// Creates a Token instance spanning `$start..$end`.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 10, 12);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: Span {
                start: Position($start as u32),
                end: Position($end as u32),
            },
        }
    };
}

/// Creates a default lexer handler for a single-byte punctuation token.
///
/// The generated handler marks the line as containing code (so a comment
/// after it is trailing), emits a token of `$kind` at the current offset
/// and advances the lexer past `$value`.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^\|").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: usize| {
            lexer.mark_code();
            let start = lexer.pos;
            lexer.advance_n($value.len());
            MK_TOKEN!($kind, String::from($value), start, lexer.pos)
        }
    };
}
