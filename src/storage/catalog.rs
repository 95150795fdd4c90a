//! JSON-backed object catalog acting as the owner of listed objects.
//!
//! The catalog holds the only strong references (`Rc`) to its objects. Lists
//! observe them through weak handles, so [`JsonCatalog::remove`] is enough to
//! make a row's object disappear from under a list.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "objects": [
//!     { "id": 1, "name": "Alpha" },
//!     { "id": 2, "name": "beta", "saved_at": 1700000000 }
//!   ]
//! }
//! ```

use super::models::{CatalogFile, CatalogRecord, CATALOG_VERSION};
use crate::app::{ListOwner, MoveDirection};
use crate::domain::{ListId, ObjectDescriber, ObjectListError, Result, WindowId};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

/// A catalog object shared between the catalog and its lists.
///
/// Interior mutability lets the property sheet write through a shared `Rc`.
#[derive(Debug)]
pub struct CatalogObject {
    id: u32,
    name: RefCell<String>,
    saved_at: Cell<Option<i64>>,
}

impl CatalogObject {
    #[must_use]
    pub fn new(record: CatalogRecord) -> Self {
        Self {
            id: record.id,
            name: RefCell::new(record.name),
            saved_at: Cell::new(record.saved_at),
        }
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn set_name(&self, name: &str) {
        name.clone_into(&mut self.name.borrow_mut());
    }

    #[must_use]
    pub fn saved_at(&self) -> Option<i64> {
        self.saved_at.get()
    }

    /// Records that properties were saved at `timestamp`.
    pub fn mark_saved(&self, timestamp: i64) {
        self.saved_at.set(Some(timestamp));
    }
}

/// Describes catalog objects to a list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogDescriber;

impl ObjectDescriber<CatalogObject> for CatalogDescriber {
    fn object_id(&self, obj: &CatalogObject) -> String {
        obj.id().to_string()
    }

    fn object_name(&self, obj: &CatalogObject) -> String {
        obj.name()
    }
}

/// Owner of catalog objects, loaded from JSON.
///
/// Implements [`ListOwner`]: move requests reorder the catalog and mark it
/// dirty, so the caller knows to hand the new order back to the list.
#[derive(Debug, Default)]
pub struct JsonCatalog {
    objects: Vec<Rc<CatalogObject>>,
    dirty: bool,
    closed_selectors: Vec<(WindowId, ListId)>,
    selection_changes: usize,
}

impl JsonCatalog {
    /// Builds a catalog from records, keeping their order.
    #[must_use]
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        Self {
            objects: records
                .into_iter()
                .map(|record| Rc::new(CatalogObject::new(record)))
                .collect(),
            ..Self::default()
        }
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or an unsupported format version.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        if file.version != CATALOG_VERSION {
            return Err(ObjectListError::Catalog(format!(
                "unsupported catalog version {} (expected {CATALOG_VERSION})",
                file.version
            )));
        }
        Ok(Self::from_records(file.objects))
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog");

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;

        tracing::debug!(object_count = catalog.objects.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Objects in catalog order.
    #[must_use]
    pub fn objects(&self) -> &[Rc<CatalogObject>] {
        &self.objects
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<Rc<CatalogObject>> {
        self.objects.iter().find(|obj| obj.id() == id).cloned()
    }

    /// Drops the first object with `id`. Returns false if there is none.
    ///
    /// The object is destroyed unless someone else still holds an `Rc` to it.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(pos) = self.objects.iter().position(|obj| obj.id() == id) else {
            return false;
        };
        self.objects.remove(pos);
        self.dirty = true;
        tracing::debug!(id, "object removed from catalog");
        true
    }

    /// Swaps `obj` with its neighbour in `direction`. Returns false at the
    /// edges or if `obj` is not in the catalog.
    pub fn move_object(&mut self, obj: &Rc<CatalogObject>, direction: MoveDirection) -> bool {
        let Some(pos) = self.objects.iter().position(|o| Rc::ptr_eq(o, obj)) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up => pos.checked_sub(1),
            MoveDirection::Down => Some(pos + 1).filter(|t| *t < self.objects.len()),
        };
        let Some(target) = target else {
            return false;
        };

        self.objects.swap(pos, target);
        self.dirty = true;
        tracing::debug!(id = obj.id(), from = pos, to = target, "object moved");
        true
    }

    /// Returns whether the order changed since the last call, and resets it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Selector close requests received so far.
    #[must_use]
    pub fn closed_selectors(&self) -> &[(WindowId, ListId)] {
        &self.closed_selectors
    }

    #[must_use]
    pub const fn selection_changes(&self) -> usize {
        self.selection_changes
    }
}

impl ListOwner<CatalogObject> for JsonCatalog {
    fn close_selectors(&mut self, window: WindowId, list: ListId) {
        self.closed_selectors.push((window, list));
    }

    fn selection_changed(&mut self, list: ListId) {
        self.selection_changes += 1;
        tracing::trace!(%list, count = self.selection_changes, "selection changed");
    }

    fn object_moved(&mut self, obj: Rc<CatalogObject>, direction: MoveDirection) {
        if !self.move_object(&obj, direction) {
            tracing::debug!(id = obj.id(), ?direction, "move request could not be applied");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> JsonCatalog {
        JsonCatalog::from_records(vec![
            CatalogRecord::new(1, "A"),
            CatalogRecord::new(2, "B"),
            CatalogRecord::new(3, "C"),
        ])
    }

    fn ids(catalog: &JsonCatalog) -> Vec<u32> {
        catalog.objects().iter().map(|o| o.id()).collect()
    }

    #[test]
    fn parses_json_and_defaults_version() {
        let catalog = JsonCatalog::from_json(r#"{"objects":[{"id":5,"name":"Gate","saved_at":10}]}"#).unwrap();
        let obj = catalog.find(5).unwrap();
        assert_eq!(obj.name(), "Gate");
        assert_eq!(obj.saved_at(), Some(10));
    }

    #[test]
    fn rejects_other_versions_and_bad_json() {
        assert!(matches!(
            JsonCatalog::from_json(r#"{"version":2,"objects":[]}"#),
            Err(ObjectListError::Catalog(_))
        ));
        assert!(matches!(JsonCatalog::from_json("{"), Err(ObjectListError::Json(_))));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"version":1,"objects":[{"id":1,"name":"A"}]}"#).unwrap();

        let catalog = JsonCatalog::load(&path).unwrap();
        assert_eq!(ids(&catalog), vec![1]);
        assert!(JsonCatalog::load(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn moves_respect_edges() {
        let mut catalog = catalog();
        let a = catalog.find(1).unwrap();
        let c = catalog.find(3).unwrap();

        assert!(!catalog.move_object(&a, MoveDirection::Up));
        assert!(!catalog.move_object(&c, MoveDirection::Down));
        assert!(!catalog.take_dirty());

        assert!(catalog.move_object(&a, MoveDirection::Down));
        assert_eq!(ids(&catalog), vec![2, 1, 3]);
        assert!(catalog.take_dirty());
        assert!(!catalog.take_dirty());
    }

    #[test]
    fn remove_destroys_unshared_objects() {
        let mut catalog = catalog();
        let weak = Rc::downgrade(&catalog.find(2).unwrap());

        assert!(catalog.remove(2));
        assert!(weak.upgrade().is_none());
        assert!(!catalog.remove(2));
    }

    #[test]
    fn describer_uses_current_name() {
        let catalog = catalog();
        let b = catalog.find(2).unwrap();
        b.set_name("Bee");

        assert_eq!(CatalogDescriber.object_name(&b), "Bee");
        assert_eq!(CatalogDescriber.display_text(&b), "2 (Bee)");
    }
}
