//! Implements a tokenizer and a classifying parser for command-line arguments.
//!
//! Parsing happens in two phases: argument parsers first declare their flag and option
//! names in a [`FlagRegistry`], then [`parse_tokens`] uses the registry to turn the
//! [`Token`]s produced by [`tokenize`] into [`ast::AstNode`]s.

pub mod ast;

mod error;
mod parser;
mod registry;
mod tokenizer;

pub use error::RegistrationError;
pub use parser::parse_tokens;
pub use registry::FlagRegistry;
pub use tokenizer::{Token, tokenize};
