//! The interface implemented by every argument parser, plus adapters over it.

use argot_parser::{FlagRegistry, RegistrationError};

use crate::context::ParseContext;
use crate::help::HelpTopic;
use crate::results::ParsingResult;

/// Trait implemented by argument parsers: flags, options, positionals, commands and
/// subcommands.
///
/// Parsing happens in two phases. First, [`ArgParser::register`] is called over the whole
/// tree of parsers so the tokens can be classified; only then is [`ArgParser::parse`]
/// called with the classified nodes.
#[async_trait::async_trait]
pub trait ArgParser: Send + Sync {
    /// The type of successfully parsed values.
    type Output: Send;
    /// The type of best-effort values reported alongside errors; `()` for parsers that
    /// have nothing useful to report.
    type Partial: Send;

    /// Declares the flag and option names this parser (and any parser it contains)
    /// consumes. Must be idempotent.
    ///
    /// # Arguments
    ///
    /// * `registry` - The registry to declare names in.
    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError>;

    /// Claims and decodes nodes from the context. Must claim every node used as input
    /// before returning, whether or not decoding succeeds.
    ///
    /// # Arguments
    ///
    /// * `context` - The state of the current parse.
    async fn parse(&self, context: &mut ParseContext)
    -> ParsingResult<Self::Output, Self::Partial>;

    /// Returns the help entries for this parser.
    fn help_topics(&self) -> Vec<HelpTopic> {
        vec![]
    }

    /// Returns a short description of what this parser parses, if it has one. Commands
    /// report theirs so enclosing subcommand lists can show it.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// A type-erased argument parser.
pub type BoxedArgParser<T, P = ()> = Box<dyn ArgParser<Output = T, Partial = P>>;

#[async_trait::async_trait]
impl<A: ArgParser + ?Sized> ArgParser for Box<A> {
    type Output = A::Output;
    type Partial = A::Partial;

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        (**self).register(registry)
    }

    async fn parse(
        &self,
        context: &mut ParseContext,
    ) -> ParsingResult<Self::Output, Self::Partial> {
        (**self).parse(context).await
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        (**self).help_topics()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

/// Parser adapter converting parsed values. See [`ArgParserExt::map`].
pub struct Map<A, F> {
    inner: A,
    f: F,
}

#[async_trait::async_trait]
impl<A, F, U> ArgParser for Map<A, F>
where
    A: ArgParser,
    F: Fn(A::Output) -> U + Send + Sync,
    U: Send,
{
    type Output = U;
    type Partial = A::Partial;

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        self.inner.register(registry)
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<U, A::Partial> {
        self.inner.parse(context).await.map(&self.f)
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        self.inner.help_topics()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }
}

/// Parser adapter converting partial values. See [`ArgParserExt::map_partial`].
pub struct MapPartial<A, F> {
    inner: A,
    f: F,
}

#[async_trait::async_trait]
impl<A, F, Q> ArgParser for MapPartial<A, F>
where
    A: ArgParser,
    F: Fn(A::Partial) -> Q + Send + Sync,
    Q: Send,
{
    type Output = A::Output;
    type Partial = Q;

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        self.inner.register(registry)
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<A::Output, Q> {
        self.inner
            .parse(context)
            .await
            .map_err(|failure| failure.map_partial(&self.f))
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        self.inner.help_topics()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }
}

/// Convenience adapters available on every [`ArgParser`].
pub trait ArgParserExt: ArgParser + Sized {
    /// Converts successfully parsed values with `f`. Typically used to bring commands with
    /// different argument records under one enum for [`crate::Subcommands`].
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + Send + Sync,
    {
        Map { inner: self, f }
    }

    /// Converts partial values reported on failure with `f`.
    fn map_partial<F, Q>(self, f: F) -> MapPartial<Self, F>
    where
        F: Fn(Self::Partial) -> Q + Send + Sync,
    {
        MapPartial { inner: self, f }
    }

    /// Erases the type of the parser.
    fn boxed(self) -> BoxedArgParser<Self::Output, Self::Partial>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<A: ArgParser> ArgParserExt for A {}
