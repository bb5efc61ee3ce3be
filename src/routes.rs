//! Route Helpers
//!
//! Item id parsing, query-string flags and href builders for the
//! `/:collection/:id?` routes.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Positive item number taken from the route
pub type ItemId = u32;

/// Characters escaped when a collection name is put back into a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Parse the `id` route segment. Anything that is not a positive number means
/// "show the index".
pub fn parse_item_id(raw: &str) -> Option<ItemId> {
    raw.trim().parse::<ItemId>().ok().filter(|id| *id > 0)
}

/// Value of a single query parameter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    /// Key present without `=`, e.g. `?edit`
    Flag,
    /// Percent-decoded value after `=`
    Text(String),
}

impl QueryValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            QueryValue::Flag => true,
            QueryValue::Text(text) => !text.is_empty(),
        }
    }
}

/// Parsed location search string
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    entries: BTreeMap<String, QueryValue>,
}

impl SearchParams {
    pub fn parse(search: &str) -> Self {
        let mut entries = BTreeMap::new();

        for pair in search.trim_start_matches('?').split('&') {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (
                    key,
                    QueryValue::Text(percent_decode_str(value).decode_utf8_lossy().into_owned()),
                ),
                None => (pair, QueryValue::Flag),
            };
            if key.is_empty() {
                continue;
            }
            // Later occurrences win
            entries.insert(key.to_string(), value);
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.get(key)
    }

    /// Absent keys and empty values are false
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(QueryValue::is_truthy)
    }
}

// ========================
// Href Builders
// ========================

pub fn index_href(collection: &str) -> String {
    format!("/{}", utf8_percent_encode(collection, SEGMENT))
}

pub fn item_href(collection: &str, id: ItemId) -> String {
    format!("{}/{}", index_href(collection), id)
}

/// Link to the previous item, or back to the index from the first one
pub fn prev_href(collection: &str, id: Option<ItemId>) -> String {
    match id.and_then(|id| id.checked_sub(1)).filter(|prev| *prev > 0) {
        Some(prev) => item_href(collection, prev),
        None => index_href(collection),
    }
}

pub fn next_href(collection: &str, id: Option<ItemId>) -> String {
    match id.and_then(|id| id.checked_add(1)) {
        Some(next) => item_href(collection, next),
        None => index_href(collection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("5"), Some(5));
        assert_eq!(parse_item_id(" 12 "), Some(12));
        assert_eq!(parse_item_id("0"), None);
        assert_eq!(parse_item_id("-3"), None);
        assert_eq!(parse_item_id("abc"), None);
        assert_eq!(parse_item_id(""), None);
        assert_eq!(parse_item_id("2.5"), None);
    }

    #[test]
    fn test_search_flags_and_values() {
        let search = SearchParams::parse("?edit&name=K.%20R.&empty=");
        assert_eq!(search.get("edit"), Some(&QueryValue::Flag));
        assert_eq!(search.get("name"), Some(&QueryValue::Text("K. R.".to_string())));
        assert_eq!(search.get("empty"), Some(&QueryValue::Text(String::new())));

        assert!(search.is_truthy("edit"));
        assert!(search.is_truthy("name"));
        assert!(!search.is_truthy("empty"));
        assert!(!search.is_truthy("missing"));
    }

    #[test]
    fn test_search_edge_cases() {
        assert_eq!(SearchParams::parse(""), SearchParams::default());
        assert_eq!(SearchParams::parse("?"), SearchParams::default());
        assert_eq!(SearchParams::parse("&&=x"), SearchParams::default());

        let search = SearchParams::parse("edit=0&edit=");
        assert!(!search.is_truthy("edit"), "last occurrence wins");

        // Any non-empty value is on, including "0" and "false".
        assert!(SearchParams::parse("edit=0").is_truthy("edit"));
        assert!(SearchParams::parse("edit=false").is_truthy("edit"));
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(index_href("foo"), "/foo");
        assert_eq!(item_href("foo", 3), "/foo/3");
        assert_eq!(item_href("my works", 3), "/my%20works/3");

        assert_eq!(prev_href("foo", Some(3)), "/foo/2");
        assert_eq!(prev_href("foo", Some(1)), "/foo");
        assert_eq!(prev_href("foo", None), "/foo");

        assert_eq!(next_href("foo", Some(3)), "/foo/4");
        assert_eq!(next_href("foo", None), "/foo");
    }
}
