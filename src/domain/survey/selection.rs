//! Multi-select answer containers.
//!
//! - [`MultiSelect`] is an insertion-ordered set of options (q2, q6).
//! - [`OpenSelect`] adds the "other" sentinel and user-typed custom entries
//!   (q4, q5, q8). Fixed options, the sentinel and custom text are distinct
//!   variants of [`Choice`], so the substitution rule is explicit.

use serde::{Serialize, Serializer};

use super::vocabulary::{Vocabulary, OTHER_LABEL};

/// Insertion-ordered selection without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultiSelect<T> {
    items: Vec<T>,
}

impl<T> Default for MultiSelect<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> MultiSelect<T> {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `value` if present, otherwise appends it.
    ///
    /// Returns whether `value` is selected afterwards.
    pub fn toggle(&mut self, value: T) -> bool {
        if let Some(pos) = self.items.iter().position(|item| *item == value) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(value);
            true
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn remove(&mut self, value: &T) {
        self.items.retain(|item| item != value);
    }

    fn insert(&mut self, value: T) {
        if !self.items.contains(&value) {
            self.items.push(value);
        }
    }
}

/// One entry of an open multi-select answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    /// An option from the question's vocabulary.
    Fixed(T),
    /// The "other" sentinel; the user has not committed their text yet.
    Other,
    /// Free text that replaced the sentinel.
    Custom(String),
}

impl<T: Vocabulary> Choice<T> {
    /// Wire label of this entry.
    pub fn label(&self) -> &str {
        match self {
            Choice::Fixed(option) => option.label(),
            Choice::Other => OTHER_LABEL,
            Choice::Custom(text) => text,
        }
    }
}

impl<T: Vocabulary> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Multi-select with an "other" sentinel that is swapped for free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent, bound = "T: Vocabulary")]
pub struct OpenSelect<T> {
    picks: MultiSelect<Choice<T>>,
}

impl<T> Default for OpenSelect<T> {
    fn default() -> Self {
        Self {
            picks: MultiSelect::default(),
        }
    }
}

impl<T: Vocabulary> OpenSelect<T> {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a vocabulary option. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, option: T) -> bool {
        self.picks.toggle(Choice::Fixed(option))
    }

    /// Toggles the "other" sentinel. Returns whether it is selected afterwards.
    pub fn toggle_other(&mut self) -> bool {
        self.picks.toggle(Choice::Other)
    }

    /// Whether the sentinel is waiting for free text.
    pub fn is_other_pending(&self) -> bool {
        self.picks.contains(&Choice::Other)
    }

    /// Commits the text typed for the sentinel (the input lost focus).
    ///
    /// With the sentinel active and non-blank text, the sentinel is removed
    /// and the trimmed text appended. Text equal to a vocabulary label becomes
    /// that option, and text already selected is not appended twice. Blank
    /// text, the sentinel's own label, or no active sentinel leaves the
    /// selection unchanged.
    ///
    /// Returns whether the sentinel was replaced.
    pub fn commit_other_text(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        // The sentinel's own label is not an answer.
        if trimmed.is_empty() || trimmed == OTHER_LABEL || !self.is_other_pending() {
            return false;
        }

        self.picks.remove(&Choice::Other);
        let entry = match T::from_label(trimmed) {
            Some(option) => Choice::Fixed(option),
            None => Choice::Custom(trimmed.to_string()),
        };
        self.picks.insert(entry);
        true
    }

    pub fn contains(&self, option: T) -> bool {
        self.picks.contains(&Choice::Fixed(option))
    }

    /// Entries in selection order.
    pub fn picks(&self) -> &[Choice<T>] {
        self.picks.as_slice()
    }

    /// Free-text entries in selection order.
    pub fn custom_texts(&self) -> impl Iterator<Item = &str> {
        self.picks.iter().filter_map(|pick| match pick {
            Choice::Custom(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::vocabulary::{CultivationMethod, FarmRole, FarmingSector};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn as_set<T: Clone + Eq + std::hash::Hash>(items: &[T]) -> HashSet<T> {
        items.iter().cloned().collect()
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut sel = MultiSelect::new();
        assert!(sel.toggle(FarmingSector::Orchard));
        assert!(sel.toggle(FarmingSector::RicePaddy));
        assert_eq!(
            sel.as_slice(),
            &[FarmingSector::Orchard, FarmingSector::RicePaddy]
        );

        assert!(!sel.toggle(FarmingSector::Orchard));
        assert_eq!(sel.as_slice(), &[FarmingSector::RicePaddy]);
    }

    #[test]
    fn multi_select_serializes_as_label_array() {
        let mut sel = MultiSelect::new();
        sel.toggle(FarmingSector::Fisheries);
        sel.toggle(FarmingSector::ForestryHerbs);

        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json, serde_json::json!(["수산(양식 포함)", "산림·약초"]));
    }

    #[test]
    fn commit_replaces_sentinel_with_trimmed_text() {
        let mut roles = OpenSelect::new();
        roles.toggle(FarmRole::Cultivation);
        roles.toggle_other();

        assert!(roles.commit_other_text("  X  "));

        assert!(!roles.is_other_pending());
        assert_eq!(roles.custom_texts().collect::<Vec<_>>(), vec!["X"]);
        assert_eq!(
            roles.picks(),
            &[Choice::Fixed(FarmRole::Cultivation), Choice::Custom("X".into())]
        );
    }

    #[test]
    fn commit_with_blank_text_keeps_sentinel() {
        let mut roles = OpenSelect::<FarmRole>::new();
        roles.toggle_other();

        assert!(!roles.commit_other_text(""));
        assert!(!roles.commit_other_text("   "));
        assert!(roles.is_other_pending());
    }

    #[test]
    fn commit_with_sentinel_label_keeps_sentinel() {
        let mut roles = OpenSelect::<FarmRole>::new();
        roles.toggle_other();

        assert!(!roles.commit_other_text(&format!(" {} ", OTHER_LABEL)));
        assert!(roles.is_other_pending());
        assert_eq!(roles.picks(), &[Choice::Other]);
        assert_eq!(roles.custom_texts().count(), 0);
    }

    #[test]
    fn open_select_of_vocabulary_serializes() {
        let mut methods = OpenSelect::new();
        methods.toggle(CultivationMethod::Hydroponics);

        let json = serde_json::to_value(&methods).unwrap();
        assert_eq!(json, serde_json::json!(["수경재배(양액재배)"]));
    }

    #[test]
    fn commit_without_sentinel_is_ignored() {
        let mut roles = OpenSelect::<FarmRole>::new();
        assert!(!roles.commit_other_text("X"));
        assert!(roles.is_empty());
    }

    #[test]
    fn commit_does_not_duplicate_existing_text() {
        let mut roles = OpenSelect::<FarmRole>::new();
        roles.toggle_other();
        roles.commit_other_text("양봉");
        roles.toggle_other();
        roles.commit_other_text("양봉");

        assert_eq!(roles.len(), 1);
        assert!(!roles.is_other_pending());
    }

    #[test]
    fn commit_matching_a_label_selects_the_option() {
        let mut roles = OpenSelect::new();
        roles.toggle_other();
        roles.commit_other_text("가공/선별");

        assert!(roles.contains(FarmRole::ProcessingSorting));
        assert_eq!(roles.custom_texts().count(), 0);
    }

    #[test]
    fn open_select_serializes_sentinel_and_custom_text() {
        let mut roles = OpenSelect::new();
        roles.toggle(FarmRole::BarnManagement);
        roles.toggle_other();
        let pending = serde_json::to_value(&roles).unwrap();
        assert_eq!(pending, serde_json::json!(["축사 관리", "기타(직접 입력)"]));

        roles.commit_other_text("양봉");
        let committed = serde_json::to_value(&roles).unwrap();
        assert_eq!(committed, serde_json::json!(["축사 관리", "양봉"]));
    }

    fn sector() -> impl Strategy<Value = FarmingSector> {
        proptest::sample::select(FarmingSector::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_membership(
            initial in proptest::collection::vec(sector(), 0..7),
            value in sector(),
        ) {
            let mut sel = MultiSelect::new();
            for option in initial {
                if !sel.contains(&option) {
                    sel.toggle(option);
                }
            }
            let before = as_set(sel.as_slice());

            sel.toggle(value);
            sel.toggle(value);

            prop_assert_eq!(as_set(sel.as_slice()), before);
        }

        #[test]
        fn toggling_never_duplicates(values in proptest::collection::vec(sector(), 0..30)) {
            let mut sel = MultiSelect::new();
            for value in values {
                sel.toggle(value);
            }
            prop_assert_eq!(as_set(sel.as_slice()).len(), sel.len());
        }
    }
}
