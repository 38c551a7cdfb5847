use std::sync::Arc;

use argot_parser::{FlagRegistry, RegistrationError};

use crate::context::ParseContext;
use crate::decoder::Decoder;
use crate::help::{self, HelpCategory, HelpTopic};
use crate::results::{ParseFailure, ParsingError, ParsingResult};
use crate::{ArgParser, args};

type DefaultFn<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// An option taking a single value, such as `--name value`, `--name=value`, `-n value`,
/// `-n=value` or `-nvalue`.
///
/// When the option is absent, the configured environment variable is consulted, then the
/// default value; if neither is available the option is reported as missing.
pub struct OptionArg<D: Decoder<String>> {
    decoder: D,
    long: String,
    short: Option<char>,
    env: Option<String>,
    default_value: Option<DefaultFn<D::Output>>,
    default_description: Option<String>,
    value_name: Option<String>,
    description: Option<String>,
}

impl<D: Decoder<String>> OptionArg<D> {
    /// Returns a new, required option.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name of the option, without dashes.
    /// * `decoder` - Converts the option's raw value into the output type.
    pub fn new(long: impl Into<String>, decoder: D) -> Self {
        Self {
            decoder,
            long: long.into(),
            short: None,
            env: None,
            default_value: None,
            default_description: None,
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

    /// Sets the environment variable consulted when the option is absent.
    #[must_use]
    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Sets the value used when the option is absent and no environment variable applies.
    #[must_use]
    pub fn default_value(mut self, value: D::Output) -> Self
    where
        D::Output: Clone + Sync,
    {
        self.default_value = Some(Arc::new(move || value.clone()));
        self
    }

    /// Sets a function computing the value used when the option is absent and no
    /// environment variable applies.
    #[must_use]
    pub fn default_value_fn(mut self, f: impl Fn() -> D::Output + Send + Sync + 'static) -> Self {
        self.default_value = Some(Arc::new(f));
        self
    }

    /// Sets how the default value is shown in help.
    #[must_use]
    pub fn default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = Some(description.into());
        self
    }

    /// Sets the placeholder for the value shown in help, e.g. `--name <value_name>`.
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
impl<D: Decoder<String>> ArgParser for OptionArg<D> {
    type Output = D::Output;
    type Partial = ();

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        registry.declare_option(&self.long, self.short)
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<D::Output> {
        let nodes = context.claim_options(&self.long, self.short);

        if nodes.len() > 1 {
            let message = args::too_many_times(nodes.len());
            return Err(ParseFailure::single(ParsingError::new(nodes, message)));
        }

        let (raw, prefix) = if let Some(node) = nodes.first() {
            let Some(value) = node.value() else {
                let message = std::format!("No value provided for --{}", self.long);
                return Err(ParseFailure::single(ParsingError::new(nodes, message)));
            };
            (value.to_owned(), String::new())
        } else if let Some((name, value)) = args::env_fallback(context, self.env.as_deref()) {
            (value, std::format!("env[{name}]: "))
        } else if let Some(default_value) = &self.default_value {
            return Ok(default_value());
        } else {
            let message = std::format!("Missing required argument --{}", self.long);
            return Err(ParseFailure::single(ParsingError::unanchored(message)));
        };

        self.decoder
            .decode(raw)
            .await
            .map_err(|e| ParseFailure::single(ParsingError::new(nodes, prefix + &e.message)))
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        let mut defaults = vec![];
        if let Some(env) = &self.env {
            defaults.push(std::format!("env: {env}"));
        }
        if let Some(default_description) = &self.default_description {
            defaults.push(std::format!("default: {default_description}"));
        } else if self.default_value.is_some() {
            defaults.push("optional".to_owned());
        }

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
            defaults,
        }]
    }
}
