//! Composable, async argument parsers for command-line programs.
//!
//! A command line is parsed by a tree of [`ArgParser`]s: [`Flag`]s, [`OptionArg`]s,
//! positionals, [`Command`]s grouping them into records (see [`command_args`]), and
//! [`Subcommands`] dispatching between commands. Raw values are turned into typed ones by
//! [`decoder::Decoder`]s. Parsing never stops at the first problem: every error found is
//! reported, along with whatever could be parsed.
//!
//! Use [`parse_args`] to run a parser over a list of words.

mod argparser;
mod args;
mod command;
mod context;
pub mod decoder;
pub mod decoders;
mod driver;
pub mod env;
mod error;
pub mod help;
mod results;
mod subcommands;

pub use argparser::{ArgParser, ArgParserExt, BoxedArgParser, Map, MapPartial};
pub use args::{Flag, MultiFlag, MultiOption, OptionArg, Positional, RestPositionals};
pub use command::{Command, CommandBuilder};
pub use context::ParseContext;
pub use driver::{parse_args, parse_args_with_environment};
pub use error::Error;
pub use help::{HelpCategory, HelpTopic};
pub use results::{ParseFailure, ParsingError, ParsingResult};
pub use subcommands::{Subcommand, SubcommandPartial, Subcommands};

pub use argot_parser::{FlagRegistry, RegistrationError, ast};

#[doc(hidden)]
pub mod __private {
    pub use async_trait::async_trait;
}
