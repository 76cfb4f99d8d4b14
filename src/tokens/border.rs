//! Border tokens: corner radii and stroke widths.

use super::table::TokenTable;

/// Corner radii.
pub fn border_radius() -> TokenTable {
    TokenTable::new()
        .add("none", "0")
        .add("control", "6px")
        .add("card", "10px")
        .add("pill", "999px")
}

/// Stroke widths.
pub fn border_width() -> TokenTable {
    TokenTable::new()
        .add("hairline", "0.5px")
        .add("default", "1px")
        .add("3", "3px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_tokens() {
        let radii = border_radius();
        assert_eq!(radii.get("card").and_then(|v| v.as_str()), Some("10px"));
        assert_eq!(radii.get("pill").and_then(|v| v.as_str()), Some("999px"));
    }

    #[test]
    fn test_width_tokens() {
        let widths = border_width();
        assert_eq!(widths.get("hairline").and_then(|v| v.as_str()), Some("0.5px"));
    }
}
