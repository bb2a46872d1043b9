//! Filter vocabulary shared by the query translator and the match engine
//!
//! `RawFilters` is what rule matching and query-string parsing produce: signed
//! numbers and a free-form character string. `RawFilters::validate` enforces
//! the filter invariants and yields a `FilterSet`, whose fields can no longer
//! be negative, contradictory or malformed.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Errors produced while building a filter set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unable to parse natural language query - no recognizable filters found")]
    NoMatch,

    #[error(
        "Conflicting filters: min_length ({min_length}) cannot be greater than max_length ({max_length})"
    )]
    ConflictingBounds { min_length: i64, max_length: i64 },

    #[error("Invalid filter: {field} cannot be negative (got {value})")]
    NegativeValue { field: &'static str, value: i64 },

    #[error("Invalid filter: contains_character must be a single letter (got {value:?})")]
    InvalidCharacter { value: String },
}

impl FilterError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::NoMatch => "NO_MATCH",
            Self::ConflictingBounds { .. } => "CONFLICTING_BOUNDS",
            Self::NegativeValue { .. } => "NEGATIVE_VALUE",
            Self::InvalidCharacter { .. } => "INVALID_CHARACTER",
        }
    }

    /// True when the input was understood but the resulting filters are invalid
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ConflictingBounds { .. } | Self::NegativeValue { .. } | Self::InvalidCharacter { .. }
        )
    }
}

/// Unvalidated filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RawFilters {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub word_count: Option<i64>,
    pub contains_character: Option<String>,
}

impl RawFilters {
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Check the filter invariants and convert into a `FilterSet`.
    ///
    /// Checks run in a fixed order: length bounds, negative values, character.
    pub fn validate(self) -> Result<FilterSet, FilterError> {
        if let (Some(min_length), Some(max_length)) = (self.min_length, self.max_length)
            && min_length > max_length
        {
            return Err(FilterError::ConflictingBounds {
                min_length,
                max_length,
            });
        }

        let min_length = non_negative("min_length", self.min_length)?;
        let max_length = non_negative("max_length", self.max_length)?;
        let word_count = non_negative("word_count", self.word_count)?;

        let contains_character = match self.contains_character {
            Some(value) => Some(single_letter(value)?),
            None => None,
        };

        Ok(FilterSet {
            is_palindrome: self.is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character,
        })
    }
}

fn non_negative(field: &'static str, value: Option<i64>) -> Result<Option<usize>, FilterError> {
    match value {
        Some(v) if v < 0 => Err(FilterError::NegativeValue { field, value: v }),
        // Saturates on targets where usize is narrower than i64
        Some(v) => Ok(Some(usize::try_from(v).unwrap_or(usize::MAX))),
        None => Ok(None),
    }
}

fn single_letter(value: String) -> Result<char, FilterError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        _ => Err(FilterError::InvalidCharacter { value }),
    }
}

/// Validated filters. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub contains_character: Option<char>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_is_ok() {
        let filters = RawFilters::default().validate().unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_validate_conflicting_bounds() {
        let raw = RawFilters {
            min_length: Some(10),
            max_length: Some(5),
            ..Default::default()
        };
        assert_eq!(
            raw.validate(),
            Err(FilterError::ConflictingBounds {
                min_length: 10,
                max_length: 5
            })
        );
    }

    #[test]
    fn test_validate_equal_bounds_allowed() {
        let raw = RawFilters {
            min_length: Some(7),
            max_length: Some(7),
            ..Default::default()
        };
        let filters = raw.validate().unwrap();
        assert_eq!(filters.min_length, Some(7));
        assert_eq!(filters.max_length, Some(7));
    }

    #[test]
    fn test_validate_negative_values() {
        let raw = RawFilters {
            max_length: Some(-1),
            ..Default::default()
        };
        assert_eq!(
            raw.validate(),
            Err(FilterError::NegativeValue {
                field: "max_length",
                value: -1
            })
        );

        let raw = RawFilters {
            word_count: Some(-3),
            ..Default::default()
        };
        assert!(matches!(
            raw.validate(),
            Err(FilterError::NegativeValue {
                field: "word_count",
                ..
            })
        ));
    }

    #[test]
    fn test_conflict_reported_before_negative() {
        let raw = RawFilters {
            min_length: Some(0),
            max_length: Some(-1),
            ..Default::default()
        };
        assert!(matches!(
            raw.validate(),
            Err(FilterError::ConflictingBounds { .. })
        ));
    }

    #[test]
    fn test_validate_character() {
        for bad in ["ab", "", "1", " "] {
            let raw = RawFilters {
                contains_character: Some(bad.to_string()),
                ..Default::default()
            };
            assert_eq!(
                raw.validate(),
                Err(FilterError::InvalidCharacter {
                    value: bad.to_string()
                }),
                "expected {:?} to be rejected",
                bad
            );
        }

        let raw = RawFilters {
            contains_character: Some("Z".to_string()),
            ..Default::default()
        };
        assert_eq!(raw.validate().unwrap().contains_character, Some('Z'));
    }

    #[test]
    fn test_error_classification() {
        assert!(!FilterError::NoMatch.is_validation());
        assert!(!FilterError::InvalidQuery("empty".into()).is_validation());
        assert!(
            FilterError::InvalidCharacter {
                value: "ab".into()
            }
            .is_validation()
        );
        assert_eq!(FilterError::NoMatch.code(), "NO_MATCH");
    }

    #[test]
    fn test_filter_set_serializes_present_fields_only() {
        let filters = FilterSet {
            word_count: Some(1),
            contains_character: Some('z'),
            ..Default::default()
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json, serde_json::json!({"word_count": 1, "contains_character": "z"}));
    }
}
