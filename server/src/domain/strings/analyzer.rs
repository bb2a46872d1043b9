//! Per-string property computation

use std::collections::{BTreeMap, HashSet};

use super::types::StringProperties;
use crate::utils::hash::sha256_hex;

/// Compute all derived properties of `value`
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: count_unique_characters(value),
        word_count: count_words(value),
        sha256_hash: sha256_hex(value),
        character_frequency_map: character_frequency_map(value),
    }
}

/// Palindrome check over ASCII letters and digits, case-insensitive.
///
/// Strings with no alphanumerics (including the empty string) are palindromes.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

pub fn count_unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

/// Words are maximal runs of non-whitespace
pub fn count_words(value: &str) -> usize {
    value.split_whitespace().count()
}

pub fn character_frequency_map(value: &str) -> BTreeMap<char, usize> {
    let mut map = BTreeMap::new();
    for c in value.chars() {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}
