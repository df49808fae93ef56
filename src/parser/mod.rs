//! Parser module for building the syntax tree.
//!
//! This module contains the recursive descent parser that turns the lexer's
//! token stream into a [`SourceFile`](crate::ast::statements::SourceFile).
//! It handles:
//!
//! - Statement parsing (constants, type aliases, enums, interfaces, namespaces)
//! - Initializer parsing (literals, negated numbers, references, array literals)
//! - Type parsing with `|` and `[]` precedence
//! - Attaching leading and trailing comments to declarations
//!
//! Statements are dispatched on their keyword through a lookup table. Types
//! use NUD (null denotation) and LED (left denotation) handlers with binding
//! powers for precedence. Parsing stops at the first error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
