//! Color palette tokens.

use super::table::TokenTable;

/// The named palette, added to the theme's extension bag so the build
/// tool's default palette stays available alongside it.
pub fn palette() -> TokenTable {
    TokenTable::new()
        .add("ink", "#1f2430")
        .add("paper", "#ffffff")
        .add("mist", "#eef1f6")
        .add("slate", "#5b6472")
        .add("brand", "#2f6fed")
        .add("brand-dark", "#1d4fc4")
        .add("brand-wash", "#e8effd")
        .add("success", "#2e9e5b")
        .add("warning", "#d9822b")
        .add("danger", "#d64545")
}
