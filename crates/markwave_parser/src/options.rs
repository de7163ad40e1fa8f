//! Parser options.

use crate::ParseError;

/// Default cap on nested modifier arguments.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// The three characters that drive the markup grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    command_prefix: char,
    open: char,
    close: char,
}

impl Delimiters {
    /// Creates a validated delimiter set.
    ///
    /// The characters must be pairwise distinct and none may be alphanumeric
    /// or whitespace, since identifiers and ordinary text are made of those.
    pub fn new(command_prefix: char, open: char, close: char) -> Result<Self, ParseError> {
        let roles = [
            ("command prefix", command_prefix),
            ("open", open),
            ("close", close),
        ];

        for (role, delimiter) in roles {
            if delimiter.is_alphanumeric() {
                return Err(ParseError::invalid(
                    role,
                    delimiter,
                    "alphanumeric characters collide with identifiers",
                ));
            }
            if delimiter.is_whitespace() {
                return Err(ParseError::invalid(
                    role,
                    delimiter,
                    "whitespace is not allowed",
                ));
            }
        }

        for (i, (first, a)) in roles.iter().enumerate() {
            for (second, b) in &roles[i + 1..] {
                if a == b {
                    return Err(ParseError::duplicate(*a, *first, *second));
                }
            }
        }

        Ok(Self {
            command_prefix,
            open,
            close,
        })
    }

    /// The character introducing escapes, inserters and modifiers.
    #[inline]
    pub const fn command_prefix(&self) -> char {
        self.command_prefix
    }

    /// The character opening a modifier argument.
    #[inline]
    pub const fn open(&self) -> char {
        self.open
    }

    /// The character closing a modifier argument.
    #[inline]
    pub const fn close(&self) -> char {
        self.close
    }

    /// Returns true if `c` is one of the three delimiters.
    #[inline]
    pub fn is_delimiter(&self, c: char) -> bool {
        c == self.command_prefix || c == self.open || c == self.close
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            command_prefix: '\\',
            open: '{',
            close: '}',
        }
    }
}

/// Options for [`MarkupParser`](crate::MarkupParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Delimiter characters.
    pub delimiters: Delimiters,

    /// Maximum nesting of modifier arguments. A modifier beyond this depth
    /// is treated as literal text.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Creates options with the given delimiters and the default depth cap.
    pub fn new(delimiters: Delimiters) -> Self {
        Self {
            delimiters,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(Delimiters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_delimiters() {
        let delimiters = Delimiters::default();

        assert_eq!(delimiters.command_prefix(), '\\');
        assert_eq!(delimiters.open(), '{');
        assert_eq!(delimiters.close(), '}');
        assert_eq!(Delimiters::new('\\', '{', '}'), Ok(delimiters));
    }

    #[test]
    fn test_custom_delimiters() {
        let delimiters = Delimiters::new('@', '[', ']').unwrap();

        assert!(delimiters.is_delimiter('@'));
        assert!(delimiters.is_delimiter(']'));
        assert!(!delimiters.is_delimiter('\\'));
    }

    #[rstest]
    #[case::prefix_is_open('{', '{', '}', "Delimiter '{' is used for both command prefix and open")]
    #[case::open_is_close('\\', '|', '|', "Delimiter '|' is used for both open and close")]
    #[case::alphanumeric('x', '{', '}', "Invalid command prefix delimiter 'x'")]
    #[case::whitespace('\\', ' ', '}', "Invalid open delimiter ' '")]
    fn test_invalid_delimiters(
        #[case] prefix: char,
        #[case] open: char,
        #[case] close: char,
        #[case] expected_error_part: &str,
    ) {
        let err = Delimiters::new(prefix, open, close).unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::default().with_max_depth(3);

        assert_eq!(options.max_depth, 3);
        assert_eq!(options.delimiters, Delimiters::default());
        assert_eq!(ParseOptions::default().max_depth, DEFAULT_MAX_DEPTH);
    }
}
