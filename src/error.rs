#[derive(Debug)]
/// Represents all errors that can occur while parsing an expression.
pub enum ParseError {
    /// A specific character was required by the grammar but not found.
    ExpectedChar {
        /// The character that was expected.
        expected: char,
    },
    /// No grammar alternative matches the character encountered.
    UnexpectedChar {
        /// The character that was actually found.
        found: char,
    },
    /// Found extra input after parsing should have completed.
    ExpectedEnd {
        /// The position in the input where the trailing content starts.
        position: usize,
    },
    /// Reached the end of input where the grammar required more.
    UnexpectedEndOfInput {
        /// The position in the input where scanning ran out.
        position: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The position in the input where the literal starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedChar { expected } => {
                write!(f, "Syntax error: Expected '{expected}' but none found.")
            },

            Self::UnexpectedChar { found } => {
                write!(f, "Syntax error: Unexpected character '{found}'.")
            },

            Self::ExpectedEnd { position } => write!(
                f,
                "Syntax error at position {position}: Extra input after expression."
            ),

            Self::UnexpectedEndOfInput { position } => write!(
                f,
                "Syntax error at position {position}: Unexpected end of input."
            ),

            Self::LiteralTooLarge { position } => {
                write!(f, "Syntax error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
