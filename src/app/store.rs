//! Ordered backing sequence of the list.
//!
//! [`ObjectListStore`] is the source of truth for identity and order. It is
//! only ever replaced wholesale; reordering is the owner's job. Rows are
//! underlying rows: positions in the full, unfiltered sequence.

use crate::domain::ObjectHandle;
use std::rc::Rc;

/// Ordered sequence of non-owning object references.
#[derive(Debug)]
pub struct ObjectListStore<T: ?Sized> {
    entries: Vec<ObjectHandle<T>>,
}

impl<T: ?Sized> Default for ObjectListStore<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: ?Sized> ObjectListStore<T> {
    /// Replaces the entire backing sequence.
    pub fn replace(&mut self, objs: &[Rc<T>]) {
        self.entries = objs.iter().map(ObjectHandle::new).collect();
    }

    /// Number of underlying rows, including rows whose object has been dropped.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn handle(&self, row: usize) -> Option<&ObjectHandle<T>> {
        self.entries.get(row)
    }

    /// Object at an underlying row, or `None` when out of range or dropped.
    #[must_use]
    pub fn get_object(&self, row: usize) -> Option<Rc<T>> {
        self.entries.get(row).and_then(ObjectHandle::resolve)
    }

    /// Underlying row of `obj` by identity.
    #[must_use]
    pub fn index_of(&self, obj: &Rc<T>) -> Option<usize> {
        self.entries.iter().position(|entry| entry.refers_to(obj))
    }

    /// Iterates `(underlying row, handle)` pairs in row order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &ObjectHandle<T>)> {
        self.entries.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_use_identity_and_bounds() {
        let a = Rc::new("a".to_string());
        let b = Rc::new("b".to_string());
        let stranger = Rc::new("a".to_string());

        let mut store = ObjectListStore::default();
        store.replace(&[Rc::clone(&a), Rc::clone(&b)]);

        assert_eq!(store.row_count(), 2);
        assert_eq!(store.index_of(&b), Some(1));
        assert_eq!(store.index_of(&stranger), None);
        assert!(Rc::ptr_eq(&store.get_object(0).unwrap(), &a));
        assert!(store.get_object(2).is_none());
    }

    #[test]
    fn dropped_objects_keep_their_row() {
        let a = Rc::new(1);
        let b = Rc::new(2);
        let mut store = ObjectListStore::default();
        store.replace(&[Rc::clone(&a), Rc::clone(&b)]);

        drop(a);

        assert_eq!(store.row_count(), 2);
        assert!(store.get_object(0).is_none());
        assert_eq!(store.get_object(1).as_deref(), Some(&2));
    }

    #[test]
    fn replace_discards_previous_rows() {
        let a = Rc::new(1);
        let mut store = ObjectListStore::default();
        store.replace(&[Rc::clone(&a)]);
        store.replace(&[]);

        assert!(store.is_empty());
        assert_eq!(store.index_of(&a), None);
    }
}
