/// Represents an inconsistency detected while declaring names in a [`crate::FlagRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A long name was declared both as a boolean flag and as a value-taking option.
    #[error("--{0} is declared both as a flag and as an option taking a value")]
    ConflictingLongName(String),

    /// A short name was declared both as a boolean flag and as a value-taking option.
    #[error("-{0} is declared both as a flag and as an option taking a value")]
    ConflictingShortName(char),
}
