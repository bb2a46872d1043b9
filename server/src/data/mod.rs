//! Data storage layer
//!
//! - `strings` - the analyzed string collection and its persistence backends

pub mod strings;

pub use strings::{StoreError, StringStore};
