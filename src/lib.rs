//! Design-token tables and deterministic config composition for
//! utility-CSS builds.
//!
//! `underlay` declares a project's design tokens - palette, type scale,
//! spacing, radii, stroke widths, shadows - together with the variant
//! extensions, purge safelist, and component plugins that accompany
//! them, and composes everything into the single configuration record
//! an external build tool reads once at startup.
//!
//! The interesting part is deliberately small: [`compose`] is a pure,
//! synchronous structural merge of independently authored token modules.
//! It validates nothing, transforms nothing, and cannot fail; every
//! token value passes through verbatim.
//!
//! # Example
//!
//! ```rust
//! use underlay::ComposedConfig;
//!
//! let config = ComposedConfig::shared();
//! assert_eq!(
//!     config.theme.font_size.get("body").and_then(|v| v.as_pair()),
//!     Some(("14px", "24px")),
//! );
//!
//! let json = config.to_json_pretty().unwrap();
//! assert!(json.contains("searchbox"));
//! ```

mod compose;
mod export;
pub mod plugin;
pub mod safelist;
pub mod tokens;
pub mod variants;

pub use compose::{
    compose, ComposedConfig, CorePlugins, Extend, ThemeSection, VariantsSection, CONTENT_GLOB,
};
pub use export::ExportError;
pub use plugin::{ComponentSet, ContainerPlugin, CssEntry, Plugin, PluginOutput};
pub use safelist::Safelist;
pub use tokens::{TokenTable, TokenValue};
pub use variants::VariantRules;
