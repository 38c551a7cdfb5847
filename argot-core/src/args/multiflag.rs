use argot_parser::{FlagRegistry, RegistrationError};

use crate::ArgParser;
use crate::context::ParseContext;
use crate::decoder::Decoder;
use crate::decoders::parse_bool;
use crate::help::{self, HelpCategory, HelpTopic};
use crate::results::{ParseFailure, ParsingError, ParsingResult};

/// A flag that may be repeated, such as `-vvv`.
///
/// Every occurrence is decoded as a boolean; the resulting list is then handed to the
/// decoder, e.g. [`crate::decoders::count`]. An error in the final decoding is reported
/// against all occurrences.
pub struct MultiFlag<D> {
    decoder: D,
    long: String,
    short: Option<char>,
    description: Option<String>,
}

impl<D: Decoder<Vec<bool>>> MultiFlag<D> {
    /// Returns a new repeatable flag.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name of the flag, without dashes.
    /// * `decoder` - Converts the list of occurrences into the output type.
    pub fn new(long: impl Into<String>, decoder: D) -> Self {
        Self {
            decoder,
            long: long.into(),
            short: None,
            description: None,
        }
    }

    /// Sets the single-character name of the flag.
    #[must_use]
    pub const fn short(mut self, short: char) -> Self {
        self.short = Some(short);
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
impl<D: Decoder<Vec<bool>>> ArgParser for MultiFlag<D> {
    type Output = D::Output;
    type Partial = ();

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        registry.declare_flag(&self.long, self.short)
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<D::Output> {
        let nodes = context.claim_options(&self.long, self.short);

        let mut values = vec![];
        let mut errors = vec![];
        for node in &nodes {
            match parse_bool(node.value().unwrap_or("true")) {
                Ok(value) => values.push(value),
                Err(e) => errors.push(ParsingError::new(vec![node.clone()], e.message)),
            }
        }

        if !errors.is_empty() {
            return Err(ParseFailure::from_errors(errors));
        }

        self.decoder
            .decode(values)
            .await
            .map_err(|e| ParseFailure::single(ParsingError::new(nodes, e.message)))
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        vec![HelpTopic {
            category: HelpCategory::Flags,
            usage: help::named_usage(&self.long, self.short, None),
            description: help::describe(
                self.description.as_deref(),
                self.decoder.description(),
            ),
            defaults: vec![],
        }]
    }
}
