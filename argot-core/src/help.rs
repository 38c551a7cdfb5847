//! Structured help data reported by argument parsers. Rendering it is left to callers.

use std::fmt::Display;

/// Kind of help entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HelpCategory {
    /// A positional argument.
    Arguments,
    /// A boolean flag.
    Flags,
    /// An option taking a value.
    Options,
    /// A subcommand.
    Subcommands,
}

impl Display for HelpCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arguments => write!(f, "arguments"),
            Self::Flags => write!(f, "flags"),
            Self::Options => write!(f, "options"),
            Self::Subcommands => write!(f, "subcommands"),
        }
    }
}

/// One help entry, e.g. one flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpTopic {
    /// The kind of entry.
    pub category: HelpCategory,
    /// How the entry is written on the command line, e.g. `--name <value>, -n`.
    pub usage: String,
    /// Description of the entry.
    pub description: String,
    /// Fallbacks used when the entry is absent, e.g. `env: NAME`.
    pub defaults: Vec<String>,
}

/// Formats the usage of a flag or option: `--long, -s`.
pub(crate) fn named_usage(long: &str, short: Option<char>, value_name: Option<&str>) -> String {
    let mut usage = std::format!("--{long}");
    if let Some(value_name) = value_name {
        usage.push_str(" <");
        usage.push_str(value_name);
        usage.push('>');
    }
    if let Some(short) = short {
        usage.push_str(", -");
        usage.push(short);
    }
    usage
}

/// Picks the description for an entry: the configured one, then the decoder's, then a
/// placeholder.
pub(crate) fn describe(configured: Option<&str>, decoder: Option<&str>) -> String {
    configured
        .or(decoder)
        .unwrap_or("self explanatory")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn usage_formats() {
        assert_eq!(named_usage("verbose", Some('v'), None), "--verbose, -v");
        assert_eq!(named_usage("name", None, Some("value")), "--name <value>");
        assert_eq!(
            named_usage("greeting", Some('g'), Some("str")),
            "--greeting <str>, -g"
        );
    }

    #[test]
    fn description_fallbacks() {
        assert_eq!(describe(Some("mine"), Some("decoder")), "mine");
        assert_eq!(describe(None, Some("decoder")), "decoder");
        assert_eq!(describe(None, None), "self explanatory");
    }
}
