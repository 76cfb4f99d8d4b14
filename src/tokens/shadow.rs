//! Box-shadow tokens.

use super::table::TokenTable;

/// Elevation shadows.
///
/// The `searchbox` entry carries the non-standard `0.5x` / `18x` unit
/// suffixes exactly as they appear in the design source; it is kept
/// verbatim because the intended units are unknown.
pub fn box_shadow() -> TokenTable {
    TokenTable::new()
        .add("card", "0px 0.5px 18px rgba(0, 0, 0, 0.08)")
        .add("searchbox", "0px 0.5x 18x rgba(0, 0, 0, 0.08)")
        .add("overlay", "0px 8px 32px rgba(0, 0, 0, 0.16)")
}
