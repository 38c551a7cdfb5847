//! Entry points running a complete parse over a list of words.

use std::sync::Arc;

use argot_parser::{FlagRegistry, parse_tokens, tokenize};

use crate::ArgParser;
use crate::context::ParseContext;
use crate::env::{Environment, ProcessEnvironment};
use crate::error::Error;
use crate::results::ParsingResult;

/// Parses the given words with `parser`, reading fallback values from the process
/// environment.
///
/// The outer result fails only when the parser tree itself is invalid, e.g. when a name
/// is declared both as a flag and as an option. Problems with the words are reported in
/// the inner [`ParsingResult`].
///
/// # Arguments
///
/// * `parser` - The root parser, typically a [`crate::Command`].
/// * `words` - The command-line words, without the program name.
pub fn parse_args<A, I, S>(
    parser: &A,
    words: I,
) -> impl Future<Output = Result<ParsingResult<A::Output, A::Partial>, Error>> + Send
where
    A: ArgParser + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_args_with_environment(parser, words, Arc::new(ProcessEnvironment))
}

/// Parses the given words with `parser`, reading fallback values from `environment`.
///
/// The words are tokenized and classified before the returned future is first polled,
/// so `words` doesn't need to be [`Send`].
///
/// # Arguments
///
/// * `parser` - The root parser, typically a [`crate::Command`].
/// * `words` - The command-line words, without the program name.
/// * `environment` - The environment consulted for absent flags and options.
pub fn parse_args_with_environment<A, I, S>(
    parser: &A,
    words: I,
    environment: Arc<dyn Environment>,
) -> impl Future<Output = Result<ParsingResult<A::Output, A::Partial>, Error>> + Send
where
    A: ArgParser + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prepared = prepare_context(parser, words, environment);

    async move {
        let mut context = prepared?;
        let result = parser.parse(&mut context).await;

        if let Err(failure) = &result {
            tracing::debug!(target: "parse", "parse failed with {} errors", failure.errors.len());
        }

        Ok(result)
    }
}

/// Registers the parser tree, then tokenizes and classifies the words against it.
fn prepare_context<A, I, S>(
    parser: &A,
    words: I,
    environment: Arc<dyn Environment>,
) -> Result<ParseContext, Error>
where
    A: ArgParser + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut registry = FlagRegistry::new();
    parser.register(&mut registry)?;

    let tokens = tokenize(words);
    let nodes = parse_tokens(&tokens, &registry);

    tracing::debug!(
        target: "parse",
        "classified {} tokens into {} nodes",
        tokens.len(),
        nodes.len()
    );

    Ok(ParseContext::with_environment(nodes, environment))
}
