//! Outcomes of parsing arguments.

use std::fmt::Display;

use argot_parser::ast::AstNode;

/// An error found in the input, anchored to the nodes that caused it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParsingError {
    /// The nodes the error refers to; empty when there is nothing in the input to point
    /// at, e.g. for a missing argument.
    pub nodes: Vec<AstNode>,
    /// Human-readable description of the error.
    pub message: String,
}

impl ParsingError {
    /// Returns a new error anchored to the given nodes.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The offending nodes.
    /// * `message` - Description of the error.
    pub fn new(nodes: Vec<AstNode>, message: impl Into<String>) -> Self {
        Self {
            nodes,
            message: message.into(),
        }
    }

    /// Returns a new error that isn't anchored to any node.
    pub fn unanchored(message: impl Into<String>) -> Self {
        Self::new(vec![], message)
    }
}

/// Describes a failed parse: every error found, plus whatever could still be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFailure<P = ()> {
    /// The errors, in the order the parsers reported them. Never empty.
    pub errors: Vec<ParsingError>,
    /// Best-effort value assembled from the parts that parsed successfully.
    pub partial_value: P,
}

impl<P> ParseFailure<P> {
    /// Returns a new failure.
    ///
    /// # Arguments
    ///
    /// * `errors` - The errors that caused the failure.
    /// * `partial_value` - The partial value to report alongside the errors.
    pub const fn new(errors: Vec<ParsingError>, partial_value: P) -> Self {
        Self {
            errors,
            partial_value,
        }
    }

    /// Converts the partial value, keeping the errors.
    pub fn map_partial<Q>(self, f: impl FnOnce(P) -> Q) -> ParseFailure<Q> {
        ParseFailure {
            errors: self.errors,
            partial_value: f(self.partial_value),
        }
    }
}

impl ParseFailure {
    /// Returns a failure with no partial value.
    pub const fn from_errors(errors: Vec<ParsingError>) -> Self {
        Self::new(errors, ())
    }

    /// Returns a failure consisting of a single error.
    pub fn single(error: ParsingError) -> Self {
        Self::from_errors(vec![error])
    }
}

impl<P> Display for ParseFailure<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Result of parsing: either the value, or the errors along with a partial value.
pub type ParsingResult<T, P = ()> = Result<T, ParseFailure<P>>;
