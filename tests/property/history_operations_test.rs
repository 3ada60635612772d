//! Property-based tests for the pure history list operations.

use proptest::prelude::*;

use qr_baghdad::managers::history_manager::{
    clear_entries, record_entry, remove_entry, ClearOutcome, RecordOutcome, RemoveOutcome,
    HISTORY_LIMIT,
};
use qr_baghdad::types::history::HistoryItem;

fn item(id: i64, text: &str) -> HistoryItem {
    HistoryItem {
        id,
        text: text.to_string(),
        timestamp: "28/08/2026 10:00:00".to_string(),
    }
}

/// Folds a sequence of texts through `record_entry` with synthetic ids.
fn record_all(texts: &[String]) -> Vec<HistoryItem> {
    let mut items: Vec<HistoryItem> = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        let (next, _) = record_entry(&items, item(i as i64, text));
        items = next;
    }
    items
}

proptest! {
    /// The list never exceeds the cap, whatever gets recorded.
    #[test]
    fn prop_list_never_exceeds_limit(texts in prop::collection::vec("[a-z]{1,8}", 0..120)) {
        let items = record_all(&texts);
        prop_assert!(items.len() <= HISTORY_LIMIT);
    }

    /// No two items ever share a text.
    #[test]
    fn prop_texts_are_unique(texts in prop::collection::vec("[a-z]{1,4}", 0..80)) {
        let items = record_all(&texts);
        let mut seen = std::collections::HashSet::new();
        for it in &items {
            prop_assert!(seen.insert(it.text.clone()), "duplicate text: {}", it.text);
        }
    }

    /// A fresh text always lands at the head of the list.
    #[test]
    fn prop_new_entry_goes_first(
        texts in prop::collection::vec("[a-z]{1,6}", 0..60),
        fresh in "[A-Z]{3,6}",
    ) {
        let items = record_all(&texts);
        let (next, outcome) = record_entry(&items, item(9_999_999, &fresh));
        prop_assert_eq!(outcome, RecordOutcome::Added);
        prop_assert_eq!(next[0].text.as_str(), fresh.as_str());
    }

    /// Re-recording an existing text changes nothing, including order.
    #[test]
    fn prop_duplicate_preserves_list(
        texts in prop::collection::vec("[a-z]{1,4}", 1..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let items = record_all(&texts);
        prop_assume!(!items.is_empty());
        let existing = items[pick.index(items.len())].text.clone();

        let (next, outcome) = record_entry(&items, item(9_999_999, &existing));
        prop_assert_eq!(outcome, RecordOutcome::Duplicate);
        prop_assert_eq!(next, items);
    }

    /// Removing an id shrinks the list by exactly one and keeps the rest in
    /// order; removing it again is a no-op.
    #[test]
    fn prop_remove_then_remove_again(
        texts in prop::collection::vec("[a-z]{1,4}", 1..60),
        pick in any::<prop::sample::Index>(),
    ) {
        let items = record_all(&texts);
        prop_assume!(!items.is_empty());
        let id = items[pick.index(items.len())].id;

        let (next, outcome) = remove_entry(&items, id);
        prop_assert_eq!(outcome, RemoveOutcome::Removed);
        prop_assert_eq!(next.len(), items.len() - 1);
        let expected: Vec<_> = items.iter().filter(|i| i.id != id).cloned().collect();
        prop_assert_eq!(&next, &expected);

        let (again, outcome) = remove_entry(&next, id);
        prop_assert_eq!(outcome, RemoveOutcome::NotFound);
        prop_assert_eq!(again, next);
    }

    /// Clearing is gated on both non-emptiness and confirmation.
    #[test]
    fn prop_clear_requires_confirmation(
        texts in prop::collection::vec("[a-z]{1,4}", 0..40),
        confirmed in any::<bool>(),
    ) {
        let items = record_all(&texts);
        let (next, outcome) = clear_entries(&items, confirmed);
        if items.is_empty() {
            prop_assert_eq!(outcome, ClearOutcome::AlreadyEmpty);
            prop_assert!(next.is_empty());
        } else if confirmed {
            prop_assert_eq!(outcome, ClearOutcome::Cleared);
            prop_assert!(next.is_empty());
        } else {
            prop_assert_eq!(outcome, ClearOutcome::NotConfirmed);
            prop_assert_eq!(next, items);
        }
    }
}
