use argot_parser::{FlagRegistry, RegistrationError};

use crate::ArgParser;
use crate::context::ParseContext;
use crate::decoder::Decoder;
use crate::help::{self, HelpCategory, HelpTopic};
use crate::results::{ParseFailure, ParsingError, ParsingResult};

/// All remaining positional arguments, decoded one by one. Every word that fails to decode
/// is reported; an empty list is not an error.
pub struct RestPositionals<D> {
    decoder: D,
    display_name: String,
    description: Option<String>,
}

impl<D: Decoder<String>> RestPositionals<D> {
    /// Returns a new parser for the remaining positional arguments.
    ///
    /// # Arguments
    ///
    /// * `display_name` - Name of the arguments used in help.
    /// * `decoder` - Converts each raw word into the output type.
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
impl<D: Decoder<String>> ArgParser for RestPositionals<D> {
    type Output = Vec<D::Output>;
    type Partial = ();

    fn register(&self, _registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        Ok(())
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<Vec<D::Output>> {
        let nodes = context.claim_rest_positionals();

        let mut values = Vec::with_capacity(nodes.len());
        let mut errors = vec![];
        for node in nodes {
            match self.decoder.decode(node.raw().to_owned()).await {
                Ok(value) => values.push(value),
                Err(e) => errors.push(ParsingError::new(vec![node], e.message)),
            }
        }

        if errors.is_empty() {
            Ok(values)
        } else {
            Err(ParseFailure::from_errors(errors))
        }
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        vec![HelpTopic {
            category: HelpCategory::Arguments,
            usage: std::format!("[...{}]", self.display_name),
            description: help::describe(
                self.description.as_deref(),
                self.decoder.description(),
            ),
            defaults: vec![],
        }]
    }
}
