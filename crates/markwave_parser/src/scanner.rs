//! Cursor over a source string.

/// Explicit scanner state: the source and a byte position into it.
///
/// The position always sits on a `char` boundary.
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    source: &'s str,
    position: usize,
}

impl<'s> Scanner<'s> {
    /// Creates a scanner at the start of `source`.
    pub const fn new(source: &'s str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Current byte offset.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back to a position obtained from [`Scanner::position`].
    #[inline]
    pub fn reset(&mut self, position: usize) {
        debug_assert!(self.source.is_char_boundary(position));
        self.position = position;
    }

    /// The unconsumed suffix.
    #[inline]
    pub fn rest(&self) -> &'s str {
        &self.source[self.position..]
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes `literal` if the unconsumed suffix starts with it.
    pub fn match_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    /// Byte offset of the next `c`, relative to the cursor.
    #[inline]
    pub fn find(&self, c: char) -> Option<usize> {
        self.rest().find(c)
    }

    /// Consumes `len` bytes and returns them.
    pub fn take(&mut self, len: usize) -> &'s str {
        let taken = &self.rest()[..len];
        self.position += len;
        taken
    }

    /// Consumes everything that is left.
    pub fn take_rest(&mut self) -> &'s str {
        let taken = self.rest();
        self.position = self.source.len();
        taken
    }
}
