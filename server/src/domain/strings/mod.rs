//! String analysis and retrieval
//!
//! - `analyzer` - derived property computation for stored strings
//! - `filters` - filter vocabulary and validation
//! - `translator` - natural-language query to filter translation
//! - `matcher` - filter matching over analyzed strings

pub mod analyzer;
pub mod filters;
pub mod matcher;
pub mod translator;
pub mod types;

pub use analyzer::analyze;
pub use filters::{FilterError, FilterSet, RawFilters};
pub use matcher::select;
pub use translator::{ParseResult, translate};
pub use types::{AnalyzedString, StringProperties};
