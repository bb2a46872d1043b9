//! Stored string records and their derived properties

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::analyzer::analyze;

/// Properties computed once when a string is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values)
    pub length: usize,
    /// Palindrome over ASCII alphanumerics, ignoring case
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    #[schema(value_type = Object)]
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// A stored string together with its precomputed properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedString {
    /// SHA-256 of `value`, hex encoded
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl AnalyzedString {
    /// Analyze `value` and stamp the record with the current time
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_timestamp(value, Utc::now())
    }

    pub fn with_timestamp(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at,
        }
    }
}
