//! Component-emitting plugins.
//!
//! A [`Plugin`] receives a [`ComponentSet`] - the `addComponents`-style
//! capability - and registers component rules into it. Plugins here are
//! static and deterministic: they read no input and cannot fail. The
//! composed record carries each plugin's *emitted* rules, which is the
//! part the build tool consumes.

mod container;

use indexmap::IndexMap;
use serde::Serialize;

pub use container::ContainerPlugin;

/// One entry in a component rule body: either a CSS declaration value or
/// a nested block (an at-rule such as a media query).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CssEntry {
    /// A declaration value, e.g. `"20px"` under the key `padding`.
    Declaration(String),
    /// A nested block, e.g. declarations under `@media (min-width: 600px)`.
    Block(IndexMap<String, String>),
}

impl CssEntry {
    /// Creates a declaration entry.
    pub fn decl(value: impl Into<String>) -> Self {
        CssEntry::Declaration(value.into())
    }

    /// Creates a nested block from `(property, value)` pairs.
    pub fn block<'a>(declarations: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        CssEntry::Block(
            declarations
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

/// The capability handed to plugins for registering component rules,
/// keyed by selector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ComponentSet {
    components: IndexMap<String, IndexMap<String, CssEntry>>,
}

impl ComponentSet {
    /// Creates an empty component set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component rule under `selector`.
    ///
    /// Registering the same selector twice replaces the earlier body.
    pub fn add_components(
        &mut self,
        selector: impl Into<String>,
        body: IndexMap<String, CssEntry>,
    ) {
        self.components.insert(selector.into(), body);
    }

    /// Returns the rule body registered for `selector`, if any.
    pub fn rule(&self, selector: &str) -> Option<&IndexMap<String, CssEntry>> {
        self.components.get(selector)
    }

    /// Returns the number of registered selectors.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// A registered configuration plugin.
pub trait Plugin {
    /// The plugin name carried into the composed record.
    fn name(&self) -> &'static str;

    /// Registers the plugin's component rules.
    fn register(&self, components: &mut ComponentSet);
}

/// A plugin's emitted rules as they appear in the composed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginOutput {
    /// Plugin name.
    pub name: String,
    /// The component rules the plugin registered.
    pub components: ComponentSet,
}

/// Runs a plugin and captures its output.
pub fn emit(plugin: &dyn Plugin) -> PluginOutput {
    let mut components = ComponentSet::new();
    plugin.register(&mut components);
    PluginOutput {
        name: plugin.name().to_string(),
        components,
    }
}

/// The plugins this configuration registers, in registration order.
pub fn outputs() -> Vec<PluginOutput> {
    vec![emit(&ContainerPlugin)]
}
