use argot_parser::{FlagRegistry, RegistrationError};

use crate::ArgParser;
use crate::context::ParseContext;
use crate::decoder::Decoder;
use crate::help::{self, HelpCategory, HelpTopic};
use crate::results::{ParseFailure, ParsingError, ParsingResult};

/// A single positional argument. Takes the first positional not yet claimed by another
/// argument, so positionals are filled in the order they're declared.
pub struct Positional<D> {
    decoder: D,
    display_name: String,
    description: Option<String>,
}

impl<D: Decoder<String>> Positional<D> {
    /// Returns a new, required positional argument.
    ///
    /// # Arguments
    ///
    /// * `display_name` - Name of the argument used in help and error messages.
    /// * `decoder` - Converts the raw word into the output type.
    pub fn new(display_name: impl Into<String>, decoder: D) -> Self {
        Self {
            decoder,
            display_name: display_name.into(),
            description: None,
        }
    }

    /// Sets the description shown in help.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait::async_trait]
impl<D: Decoder<String>> ArgParser for Positional<D> {
    type Output = D::Output;
    type Partial = ();

    fn register(&self, _registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        Ok(())
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<D::Output> {
        let Some(node) = context.claim_next_positional() else {
            let message = std::format!("No value provided for {}", self.display_name);
            return Err(ParseFailure::single(ParsingError::unanchored(message)));
        };

        let raw = node.raw().to_owned();
        self.decoder
            .decode(raw)
            .await
            .map_err(|e| ParseFailure::single(ParsingError::new(vec![node], e.message)))
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        vec![HelpTopic {
            category: HelpCategory::Arguments,
            usage: std::format!("<{}>", self.display_name),
            description: help::describe(
                self.description.as_deref(),
                self.decoder.description(),
            ),
            defaults: vec![],
        }]
    }
}
