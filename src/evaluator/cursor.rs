use crate::error::ParseError;

/// A forward-only scanning cursor over the characters of one expression.
///
/// The cursor is created with the full input text, lives for exactly one
/// evaluation, and is never shared between evaluations. Its position starts
/// at the first significant character and is monotonically non-decreasing;
/// no operation moves it backwards. Whitespace skipping is always on in this
/// design, so the position either points at a significant character or the
/// cursor is at end.
pub struct Cursor {
    /// The input buffer, fixed for the lifetime of one evaluation.
    chars: Vec<char>,
    /// The scan position; always within `0..=chars.len()`.
    position: usize,
    /// Whether whitespace is transparently skipped. Always on.
    skip_whitespace: bool,
}

impl Cursor {
    /// Creates a cursor over `source`, positioned on the first significant
    /// character (or at end if there is none).
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut cursor = Self {
            chars: source.chars().collect(),
            position: 0,
            skip_whitespace: true,
        };
        cursor.skip_insignificant();
        cursor
    }

    /// Returns the current scan position, for error reporting.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` if no significant character remains.
    ///
    /// The position being at the end of the buffer counts, but so does any
    /// run of trailing whitespace: the scan looks forward through the rest
    /// of the buffer and treats "only whitespace left" as end of input.
    #[must_use]
    pub fn at_end(&self) -> bool {
        if self.skip_whitespace {
            self.chars[self.position..].iter().all(|c| c.is_whitespace())
        } else {
            self.position >= self.chars.len()
        }
    }

    /// Returns the character at the current position without consuming it,
    /// or `None` at end of input. Never reads past the end of the buffer.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        if self.at_end() {
            None
        } else {
            Some(self.chars[self.position])
        }
    }

    /// Returns the character at the current position without consuming it.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedEndOfInput`] if no significant
    /// character remains.
    pub fn current(&self) -> Result<char, ParseError> {
        self.peek()
            .ok_or(ParseError::UnexpectedEndOfInput { position: self.position })
    }

    /// Moves the position forward by one step, then keeps moving while it
    /// points at whitespace. The net effect is landing on the next
    /// significant character, or at end.
    pub fn advance(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
        self.skip_insignificant();
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// Peeking and consuming are atomic: either the character matches and
    /// the cursor advances past it, or nothing changes.
    ///
    /// # Parameters
    /// - `expected`: The character to match against the current position.
    ///
    /// # Returns
    /// `true` if the character matched and was consumed, `false` otherwise.
    pub fn maybe_expect(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current character, which must equal `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedChar`] if the current character does
    /// not match or the input has ended.
    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.maybe_expect(expected) {
            Ok(())
        } else {
            Err(ParseError::ExpectedChar { expected })
        }
    }

    /// Requires that no significant input remains.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedEnd`] carrying the position of the
    /// trailing content if any remains.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(ParseError::ExpectedEnd { position: self.position })
        }
    }

    fn skip_insignificant(&mut self) {
        while self.skip_whitespace
            && self.position < self.chars.len()
            && self.chars[self.position].is_whitespace()
        {
            self.position += 1;
        }
    }
}
