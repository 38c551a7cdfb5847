/// Represents a single command-line word, tagged with its position in the command line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The text of the word, exactly as it was supplied.
    pub raw: String,
    /// The 0-based character offset of the word within the command line reconstructed by
    /// joining all words with a single space.
    pub index: usize,
}

impl Token {
    /// Returns the string value of the token.
    pub fn to_str(&self) -> &str {
        &self.raw
    }

    /// Returns the length of the token in characters.
    pub fn length(&self) -> usize {
        self.raw.chars().count()
    }
}

/// Breaks already-split command-line words into tokens, computing the offset of each one.
///
/// Tokenization never fails and does not classify the words; that requires knowledge of
/// the declared flags and is left to [`crate::parse_tokens`].
///
/// # Arguments
///
/// * `words` - The words to tokenize, e.g. the process arguments minus the program name.
pub fn tokenize<I, S>(words: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = vec![];
    let mut index = 0;

    for word in words {
        let raw = word.as_ref().to_owned();
        let length = raw.chars().count();

        tracing::debug!(target: "tokenize", "TOKEN {}: {raw:?} @ {index}", tokens.len());

        tokens.push(Token { raw, index });

        // Account for the single space separating this word from the next one.
        index += length + 1;
    }

    tracing::debug!(target: "tokenize", "  => {} token(s)", tokens.len());

    tokens
}
