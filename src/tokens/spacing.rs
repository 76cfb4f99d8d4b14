//! Spacing and width-bound tokens.
//!
//! These tables extend the build tool's default scales rather than
//! replacing them, so they only carry the gaps the defaults leave.

use super::table::TokenTable;

/// Extra steps for the spacing scale.
pub fn scale() -> TokenTable {
    TokenTable::new()
        .add("4.5", "18px")
        .add("13", "52px")
        .add("15", "60px")
        .add("18", "72px")
        .add("25", "100px")
        .add("50", "200px")
}

/// Minimum-width bounds.
pub fn min_width() -> TokenTable {
    TokenTable::new()
        .add("sidebar", "280px")
        .add("modal", "460px")
}

/// Maximum-width bounds.
pub fn max_width() -> TokenTable {
    TokenTable::new()
        .add("prose", "680px")
        .add("page", "1344px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_uses_pixel_values() {
        let spacing = scale();
        assert_eq!(spacing.get("4.5").and_then(|v| v.as_str()), Some("18px"));
        assert_eq!(spacing.get("50").and_then(|v| v.as_str()), Some("200px"));
    }

    #[test]
    fn test_width_bounds() {
        assert_eq!(min_width().get("modal").and_then(|v| v.as_str()), Some("460px"));
        assert_eq!(max_width().get("page").and_then(|v| v.as_str()), Some("1344px"));
    }
}
