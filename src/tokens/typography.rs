//! Typography tokens: font stacks and the type scale.

use super::table::TokenTable;

/// Font family stacks.
pub fn font_family() -> TokenTable {
    TokenTable::new()
        .add("sans", "Inter, ui-sans-serif, system-ui, sans-serif")
        .add("serif", "Lora, ui-serif, Georgia, serif")
        .add("mono", "JetBrains Mono, ui-monospace, SFMono-Regular, monospace")
}

/// The type scale.
///
/// Most sizes carry an explicit line height as a `[size, line_height]`
/// pair; `display` is line-height-agnostic and stays bare.
pub fn font_size() -> TokenTable {
    TokenTable::new()
        .add("caption", ["12px", "16px"])
        .add("body", ["14px", "24px"])
        .add("body-large", ["16px", "28px"])
        .add("title", ["20px", "28px"])
        .add("headline", ["28px", "36px"])
        .add("display", "44px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_size_is_14_over_24() {
        let sizes = font_size();
        assert_eq!(sizes.get("body").and_then(|v| v.as_pair()), Some(("14px", "24px")));
    }

    #[test]
    fn test_display_size_is_bare() {
        let sizes = font_size();
        assert_eq!(sizes.get("display").and_then(|v| v.as_str()), Some("44px"));
    }

    #[test]
    fn test_font_family_covers_three_stacks() {
        let families = font_family();
        assert!(families.has("sans"));
        assert!(families.has("serif"));
        assert!(families.has("mono"));
    }
}
