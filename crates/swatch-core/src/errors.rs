//! Error types for the swatch engine.

use thiserror::Error;

/// Top-level error type for the swatch engine.
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// What a gradient expression was missing when parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Missing (")]
    MissingOpenParen,

    #[error("Missing )")]
    MissingCloseParen,

    #[error("Missing comma before color stops")]
    MissingComma,

    #[error("Expected color definition")]
    ExpectedColor,

    #[error("One extra comma")]
    ExtraComma,

    #[error("Missing positioning value")]
    MissingPosition,

    #[error("Invalid input not EOF")]
    TrailingInput,

    #[error("{function}() expects {expected} channels, found {found}")]
    ChannelCount {
        function: &'static str,
        expected: usize,
        found: usize,
    },
}

/// A gradient expression failed to parse. Parsing never recovers, so the
/// whole input must be treated as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{remaining}: {kind}")]
pub struct ParseError {
    pub kind: SyntaxError,
    /// The complete text handed to the parser
    pub input: String,
    /// Unconsumed input at the point of failure
    pub remaining: String,
}

impl ParseError {
    pub fn new(kind: SyntaxError, input: &str, remaining: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
            remaining: remaining.to_string(),
        }
    }

    /// Byte offset into `input` where parsing stopped.
    pub fn offset(&self) -> usize {
        self.input.len().saturating_sub(self.remaining.len())
    }
}

/// Errors from the rgb/rgba to hex codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format: {value}")]
    InputShape { value: String },

    #[error("Color channel out of range: {value}")]
    ChannelOverflow { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_and_offset() {
        let err = ParseError::new(
            SyntaxError::MissingCloseParen,
            "linear-gradient(red red)",
            "red)",
        );
        assert_eq!(err.to_string(), "red): Missing )");
        assert_eq!(err.offset(), 20);
    }

    #[test]
    fn test_channel_count_message() {
        let kind = SyntaxError::ChannelCount {
            function: "rgba",
            expected: 4,
            found: 3,
        };
        assert_eq!(kind.to_string(), "rgba() expects 4 channels, found 3");
    }

    #[test]
    fn test_swatch_error_wraps_sources() {
        let err: SwatchError = ColorError::InputShape {
            value: "#fff".to_string(),
        }
        .into();
        assert!(matches!(err, SwatchError::Color(_)));
        assert_eq!(err.to_string(), "Invalid color format: #fff");
    }
}
