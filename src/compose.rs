//! Configuration composition.
//!
//! [`compose`] is the crate's one piece of logic: a pure, synchronous
//! merge of the independently authored token modules into the single
//! record the external build tool reads once at startup. There is no
//! state beyond the composed record and no failure path; a malformed
//! token value is the build tool's schema validation to reject.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::plugin::{self, PluginOutput};
use crate::safelist::{self, Safelist};
use crate::tokens::{border, color, shadow, spacing, typography, TokenTable};
use crate::variants::{self, VariantRules};

/// The glob the build tool scans for class usage. Opaque to this crate.
pub const CONTENT_GLOB: &str = "./src/**/*.{html,js,vue,ts}";

/// Values that extend the build tool's base theme rather than replace it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extend {
    pub colors: TokenTable,
    pub spacing: TokenTable,
    pub min_width: TokenTable,
    pub max_width: TokenTable,
}

impl Extend {
    /// Merges another extension fragment into this one, returning the
    /// result. Per-table semantics follow [`TokenTable::merge`]: last
    /// write wins on key collision, order-independent when keys are
    /// disjoint (which they are by construction here).
    pub fn merge(self, other: Extend) -> Extend {
        Extend {
            colors: self.colors.merge(other.colors),
            spacing: self.spacing.merge(other.spacing),
            min_width: self.min_width.merge(other.min_width),
            max_width: self.max_width.merge(other.max_width),
        }
    }
}

/// The theme section: tables that replace their base-theme counterparts,
/// plus the nested [`Extend`] bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSection {
    pub font_family: TokenTable,
    pub font_size: TokenTable,
    pub border_radius: TokenTable,
    pub border_width: TokenTable,
    pub box_shadow: TokenTable,
    pub extend: Extend,
}

/// The variants section, carrying only extensions to the default set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantsSection {
    pub extend: VariantRules,
}

/// Core-plugin switches. The container core plugin is off because the
/// [`crate::plugin::ContainerPlugin`] rule replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorePlugins {
    pub container: bool,
}

/// The composed configuration record.
///
/// Immutable once built; the build tool reads it exactly once per build.
/// Every field is populated verbatim from its source module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedConfig {
    pub content: Vec<String>,
    pub safelist: Safelist,
    pub theme: ThemeSection,
    pub variants: VariantsSection,
    pub core_plugins: CorePlugins,
    pub plugins: Vec<PluginOutput>,
}

impl ComposedConfig {
    /// Returns the process-wide composed record, built on first access.
    pub fn shared() -> &'static ComposedConfig {
        static SHARED: Lazy<ComposedConfig> = Lazy::new(compose);
        &SHARED
    }
}

/// The extension-bag contributions of each token module. Their keys are
/// disjoint, so the fold in [`compose`] is order-independent.
fn extension_fragments() -> Vec<Extend> {
    vec![
        Extend {
            colors: color::palette(),
            ..Extend::default()
        },
        Extend {
            spacing: spacing::scale(),
            min_width: spacing::min_width(),
            max_width: spacing::max_width(),
            ..Extend::default()
        },
    ]
}

/// Composes the configuration record from the static token modules.
///
/// Pure and deterministic: given the same token tables it returns a
/// structurally equal record on every call, and it cannot fail.
///
/// # Example
///
/// ```rust
/// use underlay::compose;
///
/// let config = compose();
/// assert_eq!(config, compose());
/// assert!(config.safelist.contains("grid-cols-1"));
/// ```
pub fn compose() -> ComposedConfig {
    let extend = extension_fragments()
        .into_iter()
        .fold(Extend::default(), Extend::merge);

    ComposedConfig {
        content: vec![CONTENT_GLOB.to_string()],
        safelist: safelist::entries(),
        theme: ThemeSection {
            font_family: typography::font_family(),
            font_size: typography::font_size(),
            border_radius: border::border_radius(),
            border_width: border::border_width(),
            box_shadow: shadow::box_shadow(),
            extend,
        },
        variants: VariantsSection {
            extend: variants::extensions(),
        },
        core_plugins: CorePlugins { container: false },
        plugins: plugin::outputs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_is_idempotent() {
        assert_eq!(compose(), compose());
    }

    #[test]
    fn test_shared_returns_same_record() {
        let a = ComposedConfig::shared();
        let b = ComposedConfig::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, compose());
    }

    #[test]
    fn test_extension_fold_is_order_independent() {
        let forward = extension_fragments()
            .into_iter()
            .fold(Extend::default(), Extend::merge);
        let reverse = extension_fragments()
            .into_iter()
            .rev()
            .fold(Extend::default(), Extend::merge);

        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_compose_keeps_every_source_key() {
        let config = compose();

        for key in typography::font_size().keys() {
            assert!(config.theme.font_size.has(key));
        }
        for key in shadow::box_shadow().keys() {
            assert!(config.theme.box_shadow.has(key));
        }
        for key in color::palette().keys() {
            assert!(config.theme.extend.colors.has(key));
        }
        for key in spacing::scale().keys() {
            assert!(config.theme.extend.spacing.has(key));
        }
    }

    #[test]
    fn test_content_glob_passed_through() {
        let config = compose();
        assert_eq!(config.content, vec![CONTENT_GLOB.to_string()]);
    }

    #[test]
    fn test_container_core_plugin_disabled() {
        assert!(!compose().core_plugins.container);
    }
}
