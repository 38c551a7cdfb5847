use argot_parser::{FlagRegistry, RegistrationError};

use crate::ArgParser;
use crate::context::ParseContext;
use crate::decoder::Decoder;
use crate::help::{self, HelpCategory, HelpTopic};
use crate::results::{ParseFailure, ParsingError, ParsingResult};

/// An option that may be repeated, such as `-n 1 -n 2 --number=3`.
///
/// The raw values of all occurrences, in command-line order, are handed to the decoder,
/// e.g. [`crate::decoders::each`]. An error in decoding is reported against all
/// occurrences.
pub struct MultiOption<D> {
    decoder: D,
    long: String,
    short: Option<char>,
    value_name: Option<String>,
    description: Option<String>,
}

impl<D: Decoder<Vec<String>>> MultiOption<D> {
    /// Returns a new repeatable option.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name of the option, without dashes.
    /// * `decoder` - Converts the list of raw values into the output type.
    pub fn new(long: impl Into<String>, decoder: D) -> Self {
        Self {
            decoder,
            long: long.into(),
            short: None,
            value_name: None,
            description: None,
        }
    }

    /// Sets the single-character name of the option.
    #[must_use]
    pub const fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the placeholder for the value shown in help.
    #[must_use]
    pub fn value_name(mut self, value_name: impl Into<String>) -> Self {
        self.value_name = Some(value_name.into());
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
impl<D: Decoder<Vec<String>>> ArgParser for MultiOption<D> {
    type Output = D::Output;
    type Partial = ();

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        registry.declare_option(&self.long, self.short)
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<D::Output> {
        let nodes = context.claim_options(&self.long, self.short);

        let mut values = vec![];
        let mut errors = vec![];
        for node in &nodes {
            match node.value() {
                Some(value) => values.push(value.to_owned()),
                None => errors.push(ParsingError::new(
                    vec![node.clone()],
                    std::format!("No value provided for --{}", self.long),
                )),
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
            category: HelpCategory::Options,
            usage: help::named_usage(
                &self.long,
                self.short,
                Some(self.value_name.as_deref().unwrap_or("value")),
            ),
            description: help::describe(
                self.description.as_deref(),
                self.decoder.description(),
            ),
            defaults: vec![],
        }]
    }
}
