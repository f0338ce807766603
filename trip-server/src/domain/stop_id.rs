//! Bus stop identifiers and stop-sequence parsing.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// An opaque bus stop identifier.
///
/// Stop ids come from the stop table as free text (usually numeric). The
/// only validation is that the trimmed id is non-empty and has no interior
/// separator characters, so that it can appear in a route's stop sequence.
///
/// # Examples
///
/// ```
/// use trip_server::domain::StopId;
///
/// let id = StopId::parse(" 112 ").unwrap();
/// assert_eq!(id.as_str(), "112");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("12,13").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop id, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStopId {
                reason: "stop id cannot be empty",
            });
        }

        if trimmed.chars().any(is_sequence_separator) {
            return Err(InvalidStopId {
                reason: "stop id cannot contain separators",
            });
        }

        Ok(StopId(trimmed.to_string()))
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_sequence_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '|') || c.is_whitespace()
}

fn is_sequence_wrapper(c: char) -> bool {
    matches!(c, '[' | ']' | '(' | ')' | '"' | '\'')
}

/// Parse a route's stop-sequence text into an ordered list of stop ids.
///
/// Accepts the delimited forms seen in route tables: `"1,2,3"`,
/// `"1, 2, 3"`, `"[1, 2, 3]"`, `"'1';'2'"`, `"1 2 3"`. Empty pieces are
/// skipped, so trailing delimiters are harmless.
///
/// # Examples
///
/// ```
/// use trip_server::domain::parse_stop_sequence;
///
/// let ids = parse_stop_sequence("[12, 112, 5]");
/// let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
/// assert_eq!(ids, vec!["12", "112", "5"]);
/// ```
pub fn parse_stop_sequence(text: &str) -> Vec<StopId> {
    text.split(is_sequence_separator)
        .map(|piece| piece.trim_matches(is_sequence_wrapper))
        .filter_map(|piece| StopId::parse(piece).ok())
        .collect()
}
