//! Lexical analysis for TypeScript declaration files.
//!
//! This module contains the pull-based scanner that feeds the parser. It handles:
//!
//! - Identifiers, unsigned integers and single-quoted strings
//! - Punctuation used by the declaration grammar
//! - Leading and trailing comments, with block comments reflowed
//! - Illegal input, surfaced as `Illegal` tokens

pub mod lexer;
pub mod tokens;
