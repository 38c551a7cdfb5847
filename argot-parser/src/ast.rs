//! Defines the nodes produced by classifying command-line tokens.

use std::fmt::Display;

/// Represents one classified unit of a command line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstNode {
    /// A word that is not a flag or an option.
    Positional(PositionalArgument),
    /// A `--name` or `--name=value` option.
    LongOption(LongOption),
    /// A single letter from a `-abc` cluster.
    ShortOption(ShortOption),
}

/// A word that is not a flag or an option.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionalArgument {
    /// The word as supplied.
    pub raw: String,
    /// Character offset of the word in the command line.
    pub index: usize,
}

/// A long option.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongOption {
    /// The option token as supplied, e.g. `--name=value`.
    pub raw: String,
    /// Character offset of the option in the command line.
    pub index: usize,
    /// The option name, without dashes.
    pub key: String,
    /// The attached value, from an inline `=` or from the following word.
    pub value: Option<String>,
}

/// A short option.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortOption {
    /// Normalized text of the option: `-k`, followed by any text attached inline to it.
    pub raw: String,
    /// Character offset of the option in the command line. The first letter of a cluster
    /// points at its dash; later letters point at themselves.
    pub index: usize,
    /// The option letter.
    pub key: char,
    /// The attached value: rest of the cluster, text after `=`, or the following word.
    pub value: Option<String>,
}

impl AstNode {
    /// Returns the raw text of the node.
    pub fn raw(&self) -> &str {
        match self {
            Self::Positional(node) => &node.raw,
            Self::LongOption(node) => &node.raw,
            Self::ShortOption(node) => &node.raw,
        }
    }

    /// Returns the character offset of the node in the command line.
    pub const fn index(&self) -> usize {
        match self {
            Self::Positional(node) => node.index,
            Self::LongOption(node) => node.index,
            Self::ShortOption(node) => node.index,
        }
    }

    /// Returns whether the node is a positional argument.
    pub const fn is_positional(&self) -> bool {
        matches!(self, Self::Positional(_))
    }

    /// Returns the value attached to an option node, if any. Positional nodes never have
    /// one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Positional(_) => None,
            Self::LongOption(node) => node.value.as_deref(),
            Self::ShortOption(node) => node.value.as_deref(),
        }
    }

    /// Returns whether the node is an option with the given long or short name.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name to match against.
    /// * `short` - The short name to match against, if the option has one.
    pub fn is_option_named(&self, long: &str, short: Option<char>) -> bool {
        match self {
            Self::Positional(_) => false,
            Self::LongOption(node) => node.key == long,
            Self::ShortOption(node) => Some(node.key) == short,
        }
    }
}

impl Display for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}
