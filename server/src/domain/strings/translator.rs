//! Natural-language query translation
//!
//! Turns free text such as "palindromic strings longer than 5 characters" into
//! a validated [`FilterSet`]. This is deterministic pattern matching, not NLP.
//!
//! ## Rule groups
//!
//! Groups run in this order; a later group may overwrite a field set earlier.
//!
//! | Group | Sets | Selection |
//! |-------|------|-----------|
//! | Palindrome polarity | `is_palindrome` | positive pass, then negative pass (negative wins) |
//! | Word count | `word_count` | first matching rule |
//! | Length | `min_length` / `max_length` | first matching rule, with offset |
//! | Character | `contains_character` | first matching rule across explicit, vowel, bare-letter steps |
//!
//! All patterns are written against the lower-cased query.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use super::filters::{FilterError, FilterSet, RawFilters};

/// Successful translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ParseResult {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// A substring pass over the query that assigns a palindrome polarity
struct PolarityPass {
    keywords: &'static [&'static str],
    value: bool,
}

/// Applied in order; the negative pass runs last so negation wins when both
/// phrasings occur ("not palindrome" also contains "palindrome").
const PALINDROME_PASSES: [PolarityPass; 2] = [
    PolarityPass {
        keywords: &[
            "palindrome",
            "palindromic",
            "reads the same",
            "same forwards and backwards",
        ],
        value: true,
    },
    PolarityPass {
        keywords: &["not palindrome", "non-palindrome", "non palindrome"],
        value: false,
    },
];

/// Where a rule takes its value from
enum Capture<T> {
    Fixed(T),
    FromMatch,
}

/// Inclusive/exclusive length bound produced by a length rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
    Exact,
}

struct LengthRule {
    bound: Bound,
    /// Added to the captured number: +1 for "longer than", -1 for "shorter than"
    offset: i64,
}

struct Rule<V> {
    pattern: Regex,
    value: V,
}

impl<V> Rule<V> {
    fn new(pattern: &str, value: V) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid regex"),
            value,
        }
    }
}

static WORD_COUNT_RULES: LazyLock<Vec<Rule<Capture<i64>>>> = LazyLock::new(|| {
    vec![
        Rule::new(r"single word", Capture::Fixed(1)),
        Rule::new(r"one word", Capture::Fixed(1)),
        Rule::new(r"([0-9]+)\s*word", Capture::FromMatch),
        Rule::new(r"word count (?:of |is )?([0-9]+)", Capture::FromMatch),
        Rule::new(r"exactly ([0-9]+) word", Capture::FromMatch),
    ]
});

static LENGTH_RULES: LazyLock<Vec<Rule<LengthRule>>> = LazyLock::new(|| {
    let rule = |pattern, bound, offset| Rule::new(pattern, LengthRule { bound, offset });
    vec![
        rule(r"longer than ([0-9]+)", Bound::Min, 1),
        rule(r"more than ([0-9]+) character", Bound::Min, 1),
        rule(r"at least ([0-9]+) character", Bound::Min, 0),
        rule(r"minimum (?:of )?([0-9]+) character", Bound::Min, 0),
        rule(r"min(?:imum)? length (?:of )?([0-9]+)", Bound::Min, 0),
        rule(r"shorter than ([0-9]+)", Bound::Max, -1),
        rule(r"less than ([0-9]+) character", Bound::Max, -1),
        rule(r"at most ([0-9]+) character", Bound::Max, 0),
        rule(r"maximum (?:of )?([0-9]+) character", Bound::Max, 0),
        rule(r"max(?:imum)? length (?:of )?([0-9]+)", Bound::Max, 0),
        rule(r"length (?:of )?([0-9]+)", Bound::Exact, 0),
    ]
});

/// Character rules in cascade order: explicit phrasing, vowel shorthand, bare
/// letter mention. A generic "vowel" with no letter after it matches nothing.
static CHARACTER_RULES: LazyLock<Vec<Rule<Capture<char>>>> = LazyLock::new(|| {
    vec![
        // explicit
        Rule::new(
            r"contain(?:ing|s)?\s+(?:the\s+)?(?:letter|character)\s+([a-z])",
            Capture::FromMatch,
        ),
        Rule::new(
            r"with\s+(?:the\s+)?(?:letter|character)\s+([a-z])",
            Capture::FromMatch,
        ),
        Rule::new(
            r"has\s+(?:the\s+)?(?:letter|character)\s+([a-z])",
            Capture::FromMatch,
        ),
        Rule::new(
            r"include(?:s)?\s+(?:the\s+)?(?:letter|character)\s+([a-z])",
            Capture::FromMatch,
        ),
        // vowel shorthand
        Rule::new(r"first vowel", Capture::Fixed('a')),
        Rule::new(r"vowel a", Capture::Fixed('a')),
        Rule::new(r"contains?\s+a\b", Capture::Fixed('a')),
        Rule::new(r"vowel\s+([aeiou])", Capture::FromMatch),
        // bare letter
        Rule::new(r"letter\s+([a-z])\b", Capture::FromMatch),
    ]
});

/// First rule whose pattern matches, with its first capture group (or the
/// whole match when the pattern has none)
fn first_match<'r, 'q, V>(rules: &'r [Rule<V>], query: &'q str) -> Option<(&'r V, &'q str)> {
    rules.iter().find_map(|rule| {
        rule.pattern.captures(query).and_then(|caps| {
            caps.get(1)
                .or_else(|| caps.get(0))
                .map(|m| (&rule.value, m.as_str()))
        })
    })
}

fn parse_number(digits: &str) -> Result<i64, FilterError> {
    digits
        .parse()
        .map_err(|_| FilterError::InvalidQuery(format!("number out of range: {}", digits)))
}

fn apply_palindrome(query: &str, filters: &mut RawFilters) {
    for pass in &PALINDROME_PASSES {
        if pass.keywords.iter().any(|k| query.contains(k)) {
            filters.is_palindrome = Some(pass.value);
        }
    }
}

fn apply_word_count(query: &str, filters: &mut RawFilters) -> Result<(), FilterError> {
    match first_match(&WORD_COUNT_RULES, query) {
        Some((Capture::Fixed(n), _)) => filters.word_count = Some(*n),
        Some((Capture::FromMatch, digits)) => filters.word_count = Some(parse_number(digits)?),
        None => {}
    }
    Ok(())
}

fn apply_length(query: &str, filters: &mut RawFilters) -> Result<(), FilterError> {
    let Some((rule, digits)) = first_match(&LENGTH_RULES, query) else {
        return Ok(());
    };

    let length = parse_number(digits)?
        .checked_add(rule.offset)
        .ok_or_else(|| FilterError::InvalidQuery(format!("number out of range: {}", digits)))?;

    match rule.bound {
        Bound::Min => filters.min_length = Some(length),
        Bound::Max => filters.max_length = Some(length),
        Bound::Exact => {
            filters.min_length = Some(length);
            filters.max_length = Some(length);
        }
    }
    Ok(())
}

fn apply_character(query: &str, filters: &mut RawFilters) {
    let character = match first_match(&CHARACTER_RULES, query) {
        Some((Capture::Fixed(c), _)) => c.to_string(),
        Some((Capture::FromMatch, letter)) => letter.to_string(),
        None => return,
    };
    filters.contains_character = Some(character);
}

/// Run every rule group over `query` without validating the result
pub fn parse_query(query: &str) -> Result<RawFilters, FilterError> {
    let lower = query.trim().to_lowercase();
    if lower.is_empty() {
        return Err(FilterError::InvalidQuery(
            "query must be a non-empty string".to_string(),
        ));
    }

    let mut filters = RawFilters::default();
    apply_palindrome(&lower, &mut filters);
    apply_word_count(&lower, &mut filters)?;
    apply_length(&lower, &mut filters)?;
    apply_character(&lower, &mut filters);

    tracing::trace!(query = %query, filters = ?filters, "Parsed natural language query");
    Ok(filters)
}

/// Translate a natural-language query into a validated filter set.
///
/// Fails with `NoMatch` when nothing in the text was recognized, and with a
/// validation error when the recognized filters contradict each other.
pub fn translate(query: &str) -> Result<ParseResult, FilterError> {
    let raw = parse_query(query)?;
    if raw.is_empty() {
        tracing::debug!(query = %query, "No recognizable filters in query");
        return Err(FilterError::NoMatch);
    }

    let parsed_filters = raw.validate()?;
    Ok(ParseResult {
        original: query.to_string(),
        parsed_filters,
    })
}
