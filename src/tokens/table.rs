//! Named token scales.

use indexmap::IndexMap;
use serde::Serialize;

use super::value::TokenValue;

/// An insertion-ordered mapping from token name to [`TokenValue`].
///
/// Tables are authored with the fluent [`add`](TokenTable::add) builder and
/// never mutated after composition. Keys are unique within a table by
/// construction; inserting a key twice keeps the last-declared value per
/// normal mapping semantics - the table does not deduplicate or validate.
///
/// # Example
///
/// ```rust
/// use underlay::TokenTable;
///
/// let radii = TokenTable::new()
///     .add("card", "10px")
///     .add("control", "6px")
///     .add("pill", "999px");
///
/// assert_eq!(radii.len(), 3);
/// assert_eq!(radii.get("card").and_then(|v| v.as_str()), Some("10px"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TokenTable {
    entries: IndexMap<String, TokenValue>,
}

impl TokenTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated table for chaining.
    ///
    /// A repeated key replaces the earlier value (last write wins).
    pub fn add<V: Into<TokenValue>>(mut self, name: impl Into<String>, value: V) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Looks up a token by name.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.entries.get(name)
    }

    /// Returns true if the table defines `name`.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns an iterator over token names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Returns an iterator over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of tokens in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges another table into this one, returning the result.
    ///
    /// Entries from `other` are appended; on key collision the value from
    /// `other` wins (the later-loaded module overrides the earlier one).
    /// For tables with disjoint keys the merge is order-independent up to
    /// structural equality.
    pub fn merge(mut self, other: TokenTable) -> TokenTable {
        self.entries.extend(other.entries);
        self
    }
}
