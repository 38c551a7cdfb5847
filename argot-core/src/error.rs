/// Monolithic error type for problems with how arguments were declared.
///
/// Problems with the *input* are never reported this way; they are carried by
/// [`crate::ParseFailure`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The argument parsers of a command tree declared inconsistent names.
    #[error("invalid argument declarations: {0}")]
    Registration(#[from] argot_parser::RegistrationError),
}
