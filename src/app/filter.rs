//! Search filtering as a projection from visible rows to underlying rows.
//!
//! The filter never touches the store. It keeps the current term and the
//! ordered list of underlying rows that match it; visible row `n` is
//! `visible[n]`.

use super::store::ObjectListStore;
use crate::domain::ObjectDescriber;

/// Visible-row to underlying-row mapping for the current search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterIndex {
    term: String,
    visible: Vec<usize>,
}

impl FilterIndex {
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Sets the term and recomputes the projection.
    pub fn set_term<T, D>(&mut self, term: &str, store: &ObjectListStore<T>, describer: &D)
    where
        T: ?Sized,
        D: ObjectDescriber<T>,
    {
        term.clone_into(&mut self.term);
        self.refresh(store, describer);
    }

    /// Recomputes the projection for the current term, e.g. after the store
    /// was replaced.
    pub fn refresh<T, D>(&mut self, store: &ObjectListStore<T>, describer: &D)
    where
        T: ?Sized,
        D: ObjectDescriber<T>,
    {
        self.visible = project(&self.term, store, describer);
    }

    #[must_use]
    pub fn visible_rows(&self) -> &[usize] {
        &self.visible
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Maps a visible row back to its underlying row.
    #[must_use]
    pub fn to_underlying(&self, visible_row: usize) -> Option<usize> {
        self.visible.get(visible_row).copied()
    }

    /// Position of an underlying row among the visible rows, if it matches.
    #[must_use]
    pub fn to_visible(&self, underlying_row: usize) -> Option<usize> {
        self.visible.binary_search(&underlying_row).ok()
    }
}

/// Underlying rows whose name contains `term` as a case-insensitive literal.
///
/// Dropped objects have no name and only match the empty term.
#[must_use]
pub fn project<T, D>(term: &str, store: &ObjectListStore<T>, describer: &D) -> Vec<usize>
where
    T: ?Sized,
    D: ObjectDescriber<T>,
{
    if term.is_empty() {
        return (0..store.row_count()).collect();
    }

    let needle = term.to_lowercase();
    store
        .entries()
        .filter(|(_, handle)| {
            handle
                .resolve()
                .is_some_and(|obj| describer.object_name(&obj).to_lowercase().contains(&needle))
        })
        .map(|(row, _)| row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Names;

    impl ObjectDescriber<String> for Names {
        fn object_id(&self, _obj: &String) -> String {
            String::new()
        }

        fn object_name(&self, obj: &String) -> String {
            obj.clone()
        }
    }

    fn store_of(names: &[&str]) -> (Vec<Rc<String>>, ObjectListStore<String>) {
        let objs: Vec<Rc<String>> = names.iter().map(|n| Rc::new((*n).to_string())).collect();
        let mut store = ObjectListStore::default();
        store.replace(&objs);
        (objs, store)
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let (_objs, store) = store_of(&["Alpha", "beta", "GAMMA", "alphabet"]);
        assert_eq!(project("AL", &store, &Names), vec![0, 3]);
        assert_eq!(project("mm", &store, &Names), vec![2]);
        assert_eq!(project("", &store, &Names), vec![0, 1, 2, 3]);
    }

    #[test]
    fn pattern_characters_are_literal() {
        let (_objs, store) = store_of(&["a.c", "abc", "x*y", "xyy", "[1]"]);
        assert_eq!(project(".", &store, &Names), vec![0]);
        assert_eq!(project("*", &store, &Names), vec![2]);
        assert_eq!(project("[1]", &store, &Names), vec![4]);
    }

    #[test]
    fn dropped_objects_only_match_empty_term() {
        let (mut objs, store) = store_of(&["Alpha", "Apex"]);
        objs.remove(0);

        assert_eq!(project("a", &store, &Names), vec![1]);
        assert_eq!(project("", &store, &Names), vec![0, 1]);
    }

    #[test]
    fn index_maps_both_directions() {
        let (_objs, store) = store_of(&["one", "two", "three"]);
        let mut index = FilterIndex::default();
        index.set_term("t", &store, &Names);

        assert_eq!(index.visible_rows(), &[1, 2]);
        assert_eq!(index.to_underlying(0), Some(1));
        assert_eq!(index.to_underlying(2), None);
        assert_eq!(index.to_visible(2), Some(1));
        assert_eq!(index.to_visible(0), None);
    }
}
