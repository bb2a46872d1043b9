//! Filter matching over analyzed strings

use super::filters::FilterSet;
use super::types::AnalyzedString;

impl FilterSet {
    /// True when every present field agrees with the record's properties
    pub fn matches(&self, item: &AnalyzedString) -> bool {
        let props = &item.properties;

        if let Some(is_palindrome) = self.is_palindrome
            && props.is_palindrome != is_palindrome
        {
            return false;
        }
        if let Some(min_length) = self.min_length
            && props.length < min_length
        {
            return false;
        }
        if let Some(max_length) = self.max_length
            && props.length > max_length
        {
            return false;
        }
        if let Some(word_count) = self.word_count
            && props.word_count != word_count
        {
            return false;
        }
        if let Some(c) = self.contains_character {
            let needle: String = c.to_lowercase().collect();
            if !item.value.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// Select the items matching `filters`, keeping their relative order
pub fn select<'a, I>(filters: &FilterSet, items: I) -> Vec<&'a AnalyzedString>
where
    I: IntoIterator<Item = &'a AnalyzedString>,
{
    items
        .into_iter()
        .filter(|item| filters.matches(item))
        .collect()
}
