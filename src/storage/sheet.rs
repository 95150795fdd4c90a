//! Minimal property editor for catalog objects.
//!
//! The sheet has a single editable field, the name. Loading copies the
//! object's name into the field; saving writes the field back and stamps the
//! save time.

use super::catalog::CatalogObject;
use crate::app::PropertyEditor;
use crate::domain::ObjectHandle;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct PropertySheet {
    loaded: Option<ObjectHandle<CatalogObject>>,
    name_field: String,
    save_count: usize,
}

impl PropertySheet {
    /// Object currently shown, if it is still alive.
    #[must_use]
    pub fn loaded(&self) -> Option<Rc<CatalogObject>> {
        self.loaded.as_ref().and_then(ObjectHandle::resolve)
    }

    #[must_use]
    pub fn name_field(&self) -> &str {
        &self.name_field
    }

    /// Edits the name field. Nothing is written until the list saves.
    pub fn edit_name(&mut self, name: &str) {
        name.clone_into(&mut self.name_field);
    }

    /// Number of saves that changed an object.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.save_count
    }
}

impl PropertyEditor<CatalogObject> for PropertySheet {
    fn load_properties(&mut self, obj: Option<Rc<CatalogObject>>) {
        self.name_field = obj.as_ref().map(|o| o.name()).unwrap_or_default();
        self.loaded = obj.as_ref().map(ObjectHandle::new);
    }

    fn save_properties(&mut self, obj: &Rc<CatalogObject>) {
        let is_loaded = self.loaded.as_ref().is_some_and(|h| h.refers_to(obj));
        if !is_loaded {
            tracing::debug!(id = obj.id(), "save for an object that is not loaded, ignoring");
            return;
        }
        if obj.name() == self.name_field {
            return;
        }

        obj.set_name(&self.name_field);
        obj.mark_saved(chrono::Utc::now().timestamp());
        self.save_count += 1;
        tracing::debug!(id = obj.id(), "properties saved");
    }
}
