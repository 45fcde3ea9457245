use thiserror::Error;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    #[error("Syntax error on line {line}: unexpected {token}")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input while a construct was still open.
    #[error("Syntax error on line {line}: unexpected end of input")]
    UnexpectedEndOfInput {
        /// The line of the last token seen before the input ran out.
        line: usize,
    },
    /// A specific token was required but something else was found.
    #[error("Syntax error on line {line}: expected {expected}, found {found}")]
    ExpectedToken {
        /// Description of the required token.
        expected: &'static str,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Brackets, control statements or operator chains nest deeper than the
    /// interpreter supports.
    #[error("Syntax error on line {line}: nesting too deep")]
    TooDeep {
        /// The source line where the limit was exceeded.
        line: usize,
    },
}

impl ParseError {
    /// Returns the line the error points at.
    ///
    /// ## Example
    /// ```
    /// use rlite::error::ParseError;
    ///
    /// let err = ParseError::UnexpectedEndOfInput { line: 3 };
    /// assert_eq!(err.line(), 3);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedToken { line, .. }
            | Self::TooDeep { line } => *line,
        }
    }

    /// Fills in the line of an end-of-input error raised without position
    /// information (line `0`), using the line of the last token.
    #[must_use]
    pub fn at_end_of_input(self, last_line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { line: 0 } => Self::UnexpectedEndOfInput { line: last_line },
            other => other,
        }
    }
}
