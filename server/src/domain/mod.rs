//! Domain logic
//!
//! - `strings` - string analysis, query translation and filter matching

pub mod strings;

pub use strings::{
    AnalyzedString, FilterError, FilterSet, ParseResult, RawFilters, StringProperties,
};
