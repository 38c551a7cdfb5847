//! Dispatch on the first positional argument.

use argot_parser::{FlagRegistry, RegistrationError};
use indexmap::IndexMap;
use itertools::Itertools;

use crate::argparser::{ArgParser, BoxedArgParser};
use crate::context::ParseContext;
use crate::help::{self, HelpCategory, HelpTopic};
use crate::results::{ParseFailure, ParsingError, ParsingResult};

/// A successfully parsed subcommand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subcommand<T> {
    /// Name of the selected subcommand.
    pub command: String,
    /// Parsed arguments of the selected subcommand.
    pub args: T,
}

/// What could be parsed of a subcommand before failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcommandPartial<P> {
    /// Name of the selected subcommand; `None` when no valid name was given.
    pub command: Option<String>,
    /// Partial arguments of the selected subcommand.
    pub args: Option<P>,
}

impl<P> Default for SubcommandPartial<P> {
    fn default() -> Self {
        Self {
            command: None,
            args: None,
        }
    }
}

/// A set of named subcommands, selected by the first positional argument not yet claimed.
///
/// All subcommands must produce the same output and partial types; commands with
/// different argument records are brought under a common enum with
/// [`crate::ArgParserExt::map`] and [`crate::ArgParserExt::map_partial`].
///
/// The names of every subcommand are declared during registration, whichever is
/// eventually selected; a name declared as a flag in one subcommand and as an option in
/// another is a registration error.
pub struct Subcommands<T, P = ()> {
    name: String,
    description: Option<String>,
    commands: IndexMap<String, BoxedArgParser<T, P>>,
}

impl<T: Send + 'static, P: Send + 'static> Subcommands<T, P> {
    /// Returns a new, empty set of subcommands.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the set, used in help.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            commands: IndexMap::new(),
        }
    }

    /// Adds a subcommand. Subcommands are listed in the order they're added; adding a
    /// name twice replaces the earlier parser.
    ///
    /// # Arguments
    ///
    /// * `name` - Name selecting the subcommand on the command line.
    /// * `parser` - Parser for the subcommand's arguments.
    #[must_use]
    pub fn command(
        mut self,
        name: impl Into<String>,
        parser: impl ArgParser<Output = T, Partial = P> + 'static,
    ) -> Self {
        self.commands.insert(name.into(), Box::new(parser));
        self
    }

    /// Sets the description shown in help.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the name of the set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over the names of the subcommands, in the order they were added.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}

#[async_trait::async_trait]
impl<T: Send + 'static, P: Send + 'static> ArgParser for Subcommands<T, P> {
    type Output = Subcommand<T>;
    type Partial = SubcommandPartial<P>;

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        for parser in self.commands.values() {
            parser.register(registry)?;
        }
        Ok(())
    }

    async fn parse(
        &self,
        context: &mut ParseContext,
    ) -> ParsingResult<Subcommand<T>, SubcommandPartial<P>> {
        let selector = context.claim_next_positional();

        let Some((name, parser)) = selector
            .as_ref()
            .and_then(|node| self.commands.get_key_value(node.raw()))
        else {
            let message = std::format!(
                "Not a valid subcommand name. Must be one of: {}",
                self.commands.keys().join(", ")
            );
            let error = ParsingError::new(selector.into_iter().collect(), message);
            return Err(ParseFailure::new(vec![error], SubcommandPartial::default()));
        };

        tracing::debug!(target: "commands", "selected subcommand '{name}' of '{}'", self.name);

        match parser.parse(context).await {
            Ok(args) => Ok(Subcommand {
                command: name.clone(),
                args,
            }),
            Err(failure) => Err(failure.map_partial(|partial| SubcommandPartial {
                command: Some(name.clone()),
                args: Some(partial),
            })),
        }
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        self.commands
            .iter()
            .map(|(name, parser)| HelpTopic {
                category: HelpCategory::Subcommands,
                usage: name.clone(),
                description: help::describe(parser.description(), None),
                defaults: vec![],
            })
            .collect()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
