//! Commands: named argument records.

use argot_parser::{FlagRegistry, RegistrationError};

use crate::ArgParser;
use crate::context::ParseContext;
use crate::help::HelpTopic;
use crate::results::{ParseFailure, ParsingError, ParsingResult};

/// A command: a record of arguments plus the metadata shown in help.
///
/// The arguments parser is usually the `Parsers` struct generated by
/// [`crate::command_args`]. Every field is parsed, in declaration order, even after one of
/// them fails, so that all errors are reported at once along with a partial record.
#[derive(bon::Builder)]
pub struct Command<A> {
    /// Name of the command.
    #[builder(into)]
    name: String,
    /// Description shown in help.
    #[builder(into)]
    description: Option<String>,
    /// Parser for the arguments of the command.
    args: A,
    /// Whether input left unclaimed by the arguments is an error.
    #[builder(default)]
    fail_on_unknown_arguments: bool,
}

impl<A> Command<A> {
    /// Returns the name of the command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parser for the arguments of the command.
    pub const fn args(&self) -> &A {
        &self.args
    }

    /// Returns whether unclaimed input is reported as an error.
    pub const fn fails_on_unknown_arguments(&self) -> bool {
        self.fail_on_unknown_arguments
    }
}

#[async_trait::async_trait]
impl<A> ArgParser for Command<A>
where
    A: ArgParser,
    A::Partial: From<A::Output>,
{
    type Output = A::Output;
    type Partial = A::Partial;

    fn register(&self, registry: &mut FlagRegistry) -> Result<(), RegistrationError> {
        self.args.register(registry)
    }

    async fn parse(&self, context: &mut ParseContext) -> ParsingResult<A::Output, A::Partial> {
        tracing::debug!(target: "commands", "parsing arguments of command '{}'", self.name);

        let value = self.args.parse(context).await?;

        if self.fail_on_unknown_arguments {
            let unknown = context.unvisited_nodes();
            if !unknown.is_empty() {
                tracing::debug!(
                    target: "commands",
                    "command '{}' left {} unknown arguments",
                    self.name,
                    unknown.len()
                );

                return Err(ParseFailure::new(
                    vec![ParsingError::new(unknown, "Unknown arguments")],
                    value.into(),
                ));
            }
        }

        Ok(value)
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        self.args.help_topics()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Defines the argument record of a command.
///
/// Expands to a module containing:
///
/// - `Args`, the record of parsed values, one public field per declared field;
/// - `Partial`, the same record with every field optional, reported on failure with the
///   fields that did parse;
/// - `Parsers`, a record of boxed argument parsers, one per field, that implements
///   [`crate::ArgParser`] and parses the fields in declaration order.
///
/// Attributes written before `mod` (typically derives) are applied to both `Args` and
/// `Partial`; `Partial` always implements `Default`.
///
/// # Example
///
/// ```
/// use argot_core::{ArgParserExt, Command, OptionArg, Positional, decoders};
///
/// argot_core::command_args! {
///     #[derive(Debug, PartialEq)]
///     pub mod greet {
///         greeting: String,
///         name: String,
///     }
/// }
///
/// let command = Command::builder()
///     .name("greet")
///     .args(greet::Parsers {
///         greeting: OptionArg::new("greeting", decoders::string()).short('g').boxed(),
///         name: Positional::new("name", decoders::string()).boxed(),
///     })
///     .build();
/// # let _ = command;
/// ```
#[macro_export]
macro_rules! command_args {
    (
        $(#[$meta:meta])*
        $vis:vis mod $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $vis mod $name {
            #[allow(unused_imports)]
            use super::*;

            /// Parsed arguments.
            $(#[$meta])*
            pub struct Args {
                $(
                    $(#[$field_meta])*
                    pub $field: $ty,
                )*
            }

            /// Arguments that parsed successfully, reported alongside errors.
            $(#[$meta])*
            pub struct Partial {
                $(
                    $(#[$field_meta])*
                    pub $field: ::core::option::Option<$ty>,
                )*
            }

            impl ::core::default::Default for Partial {
                fn default() -> Self {
                    Self {
                        $( $field: ::core::option::Option::None, )*
                    }
                }
            }

            impl ::core::convert::From<Args> for Partial {
                fn from(args: Args) -> Self {
                    Self {
                        $( $field: ::core::option::Option::Some(args.$field), )*
                    }
                }
            }

            /// Parsers for each argument.
            pub struct Parsers {
                $( pub $field: $crate::BoxedArgParser<$ty>, )*
            }

            #[$crate::__private::async_trait]
            impl $crate::ArgParser for Parsers {
                type Output = Args;
                type Partial = Partial;

                fn register(
                    &self,
                    registry: &mut $crate::FlagRegistry,
                ) -> ::core::result::Result<(), $crate::RegistrationError> {
                    $( $crate::ArgParser::register(&self.$field, registry)?; )*
                    ::core::result::Result::Ok(())
                }

                async fn parse(
                    &self,
                    context: &mut $crate::ParseContext,
                ) -> $crate::ParsingResult<Args, Partial> {
                    #[allow(unused_mut)]
                    let mut errors: ::std::vec::Vec<$crate::ParsingError> =
                        ::std::vec::Vec::new();

                    $(
                        let $field = match $crate::ArgParser::parse(&self.$field, context).await {
                            ::core::result::Result::Ok(value) => {
                                ::core::option::Option::Some(value)
                            }
                            ::core::result::Result::Err(failure) => {
                                errors.extend(failure.errors);
                                ::core::option::Option::None
                            }
                        };
                    )*

                    match ($($field,)*) {
                        ($(::core::option::Option::Some($field),)*) if errors.is_empty() => {
                            ::core::result::Result::Ok(Args { $($field,)* })
                        }
                        ($($field,)*) => ::core::result::Result::Err(
                            $crate::ParseFailure::new(errors, Partial { $($field,)* }),
                        ),
                    }
                }

                fn help_topics(&self) -> ::std::vec::Vec<$crate::HelpTopic> {
                    #[allow(unused_mut)]
                    let mut topics = ::std::vec::Vec::new();
                    $( topics.extend($crate::ArgParser::help_topics(&self.$field)); )*
                    topics
                }
            }
        }
    };
}
