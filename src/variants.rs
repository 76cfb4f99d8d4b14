//! Variant-extension rules.

use indexmap::IndexMap;
use serde::Serialize;

/// Extra state modifiers enabled per CSS property, beyond the build
/// tool's default variant set.
///
/// Order within a modifier set is irrelevant to the build tool and
/// duplicates are harmless (if wasteful); the rules are passed through
/// verbatim, without deduplication.
///
/// # Example
///
/// ```rust
/// use underlay::VariantRules;
///
/// let rules = VariantRules::new()
///     .enable("cursor", &["disabled"])
///     .enable("backgroundColor", &["active"]);
///
/// assert_eq!(rules.modifiers("cursor"), Some(&["disabled".to_string()][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct VariantRules {
    rules: IndexMap<String, Vec<String>>,
}

impl VariantRules {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables extra modifiers for a property, returning the updated
    /// rules for chaining. Repeated calls for the same property append.
    pub fn enable(mut self, property: impl Into<String>, modifiers: &[&str]) -> Self {
        let entry = self.rules.entry(property.into()).or_default();
        entry.extend(modifiers.iter().map(|m| m.to_string()));
        self
    }

    /// Returns the modifiers enabled for a property, if any.
    pub fn modifiers(&self, property: &str) -> Option<&[String]> {
        self.rules.get(property).map(|m| m.as_slice())
    }

    /// Returns an iterator over the property names with extensions.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|k| k.as_str())
    }

    /// Returns the number of extended properties.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no extensions are declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The variant extensions this configuration ships.
pub fn extensions() -> VariantRules {
    VariantRules::new()
        .enable("cursor", &["disabled"])
        .enable("opacity", &["disabled"])
        .enable("backgroundColor", &["active"])
        .enable("textColor", &["active"])
}
