//! Argument combinators: flags, options and positionals.

mod flag;
mod multiflag;
mod multioption;
mod option;
mod positional;
mod rest_positionals;

pub use flag::Flag;
pub use multiflag::MultiFlag;
pub use multioption::MultiOption;
pub use option::OptionArg;
pub use positional::Positional;
pub use rest_positionals::RestPositionals;

use crate::context::ParseContext;

pub(crate) fn too_many_times(count: usize) -> String {
    std::format!("Too many times provided. Expected 1, got: {count}")
}

/// Looks up the fallback environment variable of an absent argument, returning its name
/// and value when set.
pub(crate) fn env_fallback(context: &ParseContext, env: Option<&str>) -> Option<(String, String)> {
    let name = env?;
    let value = context.environment().var(name)?;

    tracing::debug!(target: "parse", "using environment variable {name} as fallback");
    Some((name.to_owned(), value))
}
