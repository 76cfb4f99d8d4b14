//! The responsive `.container` component.

use indexmap::IndexMap;

use super::{ComponentSet, CssEntry, Plugin};

/// A layout breakpoint and the container padding that applies from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Breakpoint {
    /// Viewport min-width in pixels; also the container max-width.
    screen: u32,
    /// Horizontal padding from this breakpoint up.
    padding: &'static str,
}

/// Padding below the widest breakpoints.
const BASE_PADDING: &str = "20px";

/// The container caps at the viewport step and widens its gutters on
/// large screens.
const BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint { screen: 600, padding: BASE_PADDING },
    Breakpoint { screen: 700, padding: BASE_PADDING },
    Breakpoint { screen: 1280, padding: "56px" },
    Breakpoint { screen: 1344, padding: "56px" },
];

/// Emits the `.container` rule with its four breakpoint overrides.
///
/// The build tool's own `container` core plugin is disabled in the
/// composed record, so this rule is the only source of the class.
pub struct ContainerPlugin;

impl Plugin for ContainerPlugin {
    fn name(&self) -> &'static str {
        "container"
    }

    fn register(&self, components: &mut ComponentSet) {
        let mut body = IndexMap::new();
        body.insert("width".to_string(), CssEntry::decl("100%"));
        body.insert("marginLeft".to_string(), CssEntry::decl("auto"));
        body.insert("marginRight".to_string(), CssEntry::decl("auto"));
        body.insert("paddingLeft".to_string(), CssEntry::decl(BASE_PADDING));
        body.insert("paddingRight".to_string(), CssEntry::decl(BASE_PADDING));

        for bp in BREAKPOINTS {
            let mut block = vec![("maxWidth", format!("{}px", bp.screen))];
            if bp.padding != BASE_PADDING {
                block.push(("paddingLeft", bp.padding.to_string()));
                block.push(("paddingRight", bp.padding.to_string()));
            }
            body.insert(
                format!("@media (min-width: {}px)", bp.screen),
                CssEntry::block(block),
            );
        }

        components.add_components(".container", body);
    }
}
