//! Class names exempt from purging.

use serde::Serialize;

/// An ordered list of literal class names the build tool must keep even
/// when its usage scan finds no reference to them.
///
/// These cover classes assembled at runtime (string concatenation, CMS
/// content) that static analysis cannot see. Set semantics: duplicates
/// are harmless, order carries no meaning beyond stable output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Safelist {
    classes: Vec<String>,
}

impl Safelist {
    /// Creates an empty safelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class name, returning the updated safelist for chaining.
    pub fn keep(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Returns true if the safelist contains `class`.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns an iterator over the class names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_str())
    }

    /// Returns the number of safelisted classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if nothing is safelisted.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The classes this configuration exempts from purging.
///
/// Grid column counts and status backgrounds are built from data at
/// runtime, so the scanner never sees their literal names.
pub fn entries() -> Safelist {
    Safelist::new()
        .keep("grid-cols-1")
        .keep("grid-cols-2")
        .keep("grid-cols-3")
        .keep("grid-cols-4")
        .keep("text-left")
        .keep("text-center")
        .keep("text-right")
        .keep("bg-success")
        .keep("bg-warning")
        .keep("bg-danger")
        .keep("cursor-not-allowed")
}
