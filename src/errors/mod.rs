//! Error types and error handling for the declaration front end.
//!
//! This module defines the error produced when lexing or parsing fails:
//!
//! - An error structure carrying the source position
//! - Specific variants for lexical and syntax failures
//! - Names and tips used when rendering diagnostics

pub mod errors;
