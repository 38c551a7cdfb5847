use argot_parser::{FlagRegistry, RegistrationError};

use crate::context::ParseContext;
use crate::decoder::Decoder;
use crate::decoders::parse_bool;
use crate::help::{self, HelpCategory, HelpTopic};
use crate::results::{ParseFailure, ParsingError, ParsingResult};
use crate::{ArgParser, args};

/// A boolean flag, such as `--verbose` or `-v`.
///
/// The flag's names are declared as boolean, so the word following it is never taken as
/// its value; `--flag=false` sets one explicitly. An absent flag decodes `false`, unless
/// an environment variable is configured and set. A flag provided more than once is an
/// error; see [`crate::MultiFlag`] for repeatable flags.
pub struct Flag<D> {
    decoder: D,
    long: String,
    short: Option<char>,
    env: Option<String>,
    description: Option<String>,
}

impl<D: Decoder<bool>> Flag<D> {
    /// Returns a new flag.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name of the flag, without dashes.
    /// * `decoder` - Converts the flag's boolean value into the output type.
    pub fn new(long: impl Into<String>, decoder: D) -> Self {
        Self {
            decoder,
            long: long.into(),
            short: None,
            env: None,
            description: None,
        }
    }

    /// Sets the single-character name of the flag.
    #[must_use]
    pub const fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the environment variable consulted when the flag is absent.
    #[must_use]
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Sets the description shown in help.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait::async_trait]
impl<D: Decoder<bool>> ArgParser for Flag<D> {
    type Output = D::Output;
    type Partial = ();

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        registry.declare_flag(&self.long, self.short)
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<D::Output> {
        let nodes = context.claim_options(&self.long, self.short);

        if nodes.len() > 1 {
            let message = args::too_many_times(nodes.len());
            return Err(ParseFailure::single(ParsingError::new(nodes, message)));
        }

        let (raw, prefix) = if let Some(node) = nodes.first() {
            (node.value().unwrap_or("true").to_owned(), String::new())
        } else if let Some((name, value)) = args::env_fallback(context, self.env.as_deref()) {
            (value, std::format!("env[{name}]: "))
        } else {
            return self
                .decoder
                .decode(false)
                .await
                .map_err(|e| ParseFailure::single(ParsingError::unanchored(e.message)));
        };

        let value = parse_bool(&raw).map_err(|e| {
            ParseFailure::single(ParsingError::new(nodes.clone(), prefix.clone() + &e.message))
        })?;

        self.decoder
            .decode(value)
            .await
            .map_err(|e| ParseFailure::single(ParsingError::new(nodes, prefix + &e.message)))
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        let mut defaults = vec![];
        if let Some(env) = &self.env {
            defaults.push(std::format!("env: {env}"));
        }

        vec![HelpTopic {
            category: HelpCategory::Flags,
            usage: help::named_usage(&self.long, self.short, None),
            description: help::describe(
                self.description.as_deref(),
                self.decoder.description(),
            ),
            defaults,
        }]
    }
}
