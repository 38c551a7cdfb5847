//! Name registry consulted by the parser to resolve value-attachment ambiguity.

use std::collections::BTreeSet;

use crate::error::RegistrationError;

/// Pooled set of long and short names declared by the argument parsers of a command tree.
///
/// Whether `-n 4` is an option with a value or a flag followed by a positional argument
/// cannot be decided from syntax alone. Every argument parser therefore declares its names
/// here before any input is parsed; the registry is then handed to [`crate::parse_tokens`]
/// and no longer changes.
///
/// Names that were never declared follow a fixed default policy. Unknown long names take
/// a value (so `--foo bar` attaches `bar` to `foo`). Unknown short names are boolean
/// flags inside a cluster, but the last name of a cluster takes the next word (so
/// `-xyz bar` is `-x`, `-y` and `-z bar`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagRegistry {
    long_flags: BTreeSet<String>,
    short_flags: BTreeSet<char>,
    long_options: BTreeSet<String>,
    short_options: BTreeSet<char>,
}

impl FlagRegistry {
    /// Returns a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a boolean flag. Declaring the same flag more than once is allowed.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name of the flag, without leading dashes.
    /// * `short` - The optional single-character name of the flag.
    pub fn declare_flag(
        &mut self,
        long: &str,
        short: Option<char>,
    ) -> Result<(), RegistrationError> {
        if self.long_options.contains(long) {
            return Err(RegistrationError::ConflictingLongName(long.to_owned()));
        }
        if let Some(short) = short {
            if self.short_options.contains(&short) {
                return Err(RegistrationError::ConflictingShortName(short));
            }
        }

        tracing::debug!(target: "parse", "declaring flag --{long} {short:?}");

        self.long_flags.insert(long.to_owned());
        self.short_flags.extend(short);

        Ok(())
    }

    /// Declares an option that takes a value. Declaring the same option more than once is
    /// allowed.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name of the option, without leading dashes.
    /// * `short` - The optional single-character name of the option.
    pub fn declare_option(
        &mut self,
        long: &str,
        short: Option<char>,
    ) -> Result<(), RegistrationError> {
        if self.long_flags.contains(long) {
            return Err(RegistrationError::ConflictingLongName(long.to_owned()));
        }
        if let Some(short) = short {
            if self.short_flags.contains(&short) {
                return Err(RegistrationError::ConflictingShortName(short));
            }
        }

        tracing::debug!(target: "parse", "declaring option --{long} {short:?}");

        self.long_options.insert(long.to_owned());
        self.short_options.extend(short);

        Ok(())
    }

    /// Returns whether the given long name was declared as a boolean flag.
    pub fn is_long_flag(&self, name: &str) -> bool {
        self.long_flags.contains(name)
    }

    /// Returns whether the given short name was declared as a boolean flag.
    pub fn is_short_flag(&self, name: char) -> bool {
        self.short_flags.contains(&name)
    }

    /// Returns whether the given long name was declared as an option taking a value.
    pub fn is_long_option(&self, name: &str) -> bool {
        self.long_options.contains(name)
    }

    /// Returns whether the given short name was declared as an option taking a value.
    pub fn is_short_option(&self, name: char) -> bool {
        self.short_options.contains(&name)
    }

    /// Returns whether a long name with no inline value should take the next word as its
    /// value. Only declared flags don't.
    pub fn long_takes_value(&self, name: &str) -> bool {
        !self.is_long_flag(name)
    }

    /// Returns whether a short name should take the rest of its cluster, or the next word,
    /// as its value. Only declared options do; see the type docs for names ending a
    /// cluster.
    pub fn short_takes_value(&self, name: char) -> bool {
        self.is_short_option(name)
    }

    /// Iterates over the declared boolean long names, in sorted order.
    pub fn long_flags(&self) -> impl Iterator<Item = &str> {
        self.long_flags.iter().map(String::as_str)
    }

    /// Iterates over the declared boolean short names, in sorted order.
    pub fn short_flags(&self) -> impl Iterator<Item = char> + '_ {
        self.short_flags.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn declarations_are_idempotent() -> Result<()> {
        let mut registry = FlagRegistry::new();
        registry.declare_flag("verbose", Some('v'))?;
        registry.declare_flag("verbose", Some('v'))?;
        registry.declare_option("name", Some('n'))?;
        registry.declare_option("name", Some('n'))?;

        assert_eq!(registry.long_flags().collect::<Vec<_>>(), ["verbose"]);
        assert_eq!(registry.short_flags().collect::<Vec<_>>(), ['v']);
        assert!(registry.is_long_option("name"));
        assert!(registry.is_short_option('n'));
        Ok(())
    }

    #[test]
    fn conflicting_long_name_is_rejected() -> Result<()> {
        let mut registry = FlagRegistry::new();
        registry.declare_flag("quiet", None)?;

        assert_eq!(
            registry.declare_option("quiet", None),
            Err(RegistrationError::ConflictingLongName("quiet".into()))
        );
        Ok(())
    }

    #[test]
    fn conflicting_short_name_is_rejected() -> Result<()> {
        let mut registry = FlagRegistry::new();
        registry.declare_option("number", Some('n'))?;

        assert_eq!(
            registry.declare_flag("dry-run", Some('n')),
            Err(RegistrationError::ConflictingShortName('n'))
        );
        assert!(!registry.is_long_flag("dry-run"));
        Ok(())
    }

    #[test]
    fn unknown_names_follow_default_policy() {
        let registry = FlagRegistry::new();

        // Unknown long names take a value; unknown short names only at the end of a
        // cluster, which the parser decides.
        assert!(registry.long_takes_value("anything"));
        assert!(!registry.short_takes_value('x'));
        assert!(!registry.is_short_flag('x'));
    }
}
