//! Property tests for the merge algebra behind composition.

use std::collections::BTreeMap;

use proptest::prelude::*;
use underlay::TokenTable;

fn table_from(entries: &BTreeMap<String, String>, prefix: &str) -> TokenTable {
    entries.iter().fold(TokenTable::new(), |table, (k, v)| {
        table.add(format!("{prefix}{k}"), v.as_str())
    })
}

fn entries_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{1,8}", "[1-9][0-9]{0,2}px", 0..16)
}

proptest! {
    #[test]
    fn merge_of_disjoint_tables_is_order_independent(
        left in entries_strategy(),
        right in entries_strategy(),
    ) {
        // Prefixes force disjoint key sets, matching how the token
        // modules are authored.
        let a = table_from(&left, "a-");
        let b = table_from(&right, "b-");

        prop_assert_eq!(a.clone().merge(b.clone()), b.merge(a));
    }

    #[test]
    fn merge_keeps_every_input_key(
        left in entries_strategy(),
        right in entries_strategy(),
    ) {
        let a = table_from(&left, "a-");
        let b = table_from(&right, "b-");
        let merged = a.clone().merge(b.clone());

        for key in a.keys().chain(b.keys()) {
            prop_assert!(merged.has(key));
        }
        prop_assert_eq!(merged.len(), a.len() + b.len());
    }

    #[test]
    fn merge_collision_keeps_later_value(
        entries in entries_strategy(),
        override_value in "[1-9][0-9]{0,2}px",
    ) {
        prop_assume!(!entries.is_empty());

        let base = table_from(&entries, "");
        let key = base.keys().next().unwrap().to_string();
        let overriding = TokenTable::new().add(key.clone(), override_value.as_str());

        let merged = base.merge(overriding);
        prop_assert_eq!(
            merged.get(&key).and_then(|v| v.as_str()),
            Some(override_value.as_str())
        );
    }

    #[test]
    fn merge_with_empty_table_is_identity(entries in entries_strategy()) {
        let table = table_from(&entries, "");

        prop_assert_eq!(table.clone().merge(TokenTable::new()), table.clone());
        prop_assert_eq!(TokenTable::new().merge(table.clone()), table);
    }
}

#[test]
fn compose_is_idempotent_across_calls() {
    assert_eq!(underlay::compose(), underlay::compose());
}
