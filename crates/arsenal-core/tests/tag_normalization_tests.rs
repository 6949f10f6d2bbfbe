use arsenal_core::rules::{normalize_tags, split_tags};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[a-z ,]{0,40}") {
        let once = normalize_tags(&raw);
        prop_assert_eq!(normalize_tags(&once), once);
    }

    #[test]
    fn normalized_tags_have_no_padding_or_empties(raw in "[a-z ,]{0,40}") {
        let normalized = normalize_tags(&raw);
        for tag in normalized.split(',').filter(|_| !normalized.is_empty()) {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag);
        }
    }

    #[test]
    fn split_matches_normalized_pieces(raw in "[a-z ,]{0,40}") {
        let normalized = normalize_tags(&raw);
        prop_assert_eq!(split_tags(&normalized).join(","), normalized);
    }
}

#[test]
fn test_typical_form_input() {
    assert_eq!(normalize_tags("sql, sqlite ,  migrations"), "sql,sqlite,migrations");
    assert_eq!(split_tags("sql,sqlite"), vec!["sql", "sqlite"]);
}
