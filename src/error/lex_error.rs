use thiserror::Error;

/// A recoverable problem found while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Illegal character '{character}' on line {line}")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the character was found.
        line:      usize,
    },
}

impl LexError {
    /// Returns the line on which the diagnostic was raised.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IllegalCharacter { line, .. } => *line,
        }
    }
}
