//! Serialized catalog record types.
//!
//! These are the on-disk shapes read by [`JsonCatalog`](super::JsonCatalog),
//! kept separate from the shared in-memory [`CatalogObject`](super::CatalogObject).

use serde::{Deserialize, Serialize};

/// Version of the catalog file format understood by this crate.
pub const CATALOG_VERSION: u32 = 1;

/// Top-level structure of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Format version, checked on load.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Objects in list order.
    #[serde(default)]
    pub objects: Vec<CatalogRecord>,
}

const fn default_version() -> u32 {
    CATALOG_VERSION
}

/// One object as stored in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Numeric identifier.
    pub id: u32,

    pub name: String,

    /// Unix timestamp of the last property save, if any.
    #[serde(default)]
    pub saved_at: Option<i64>,
}

impl CatalogRecord {
    /// Creates a record that has never been saved.
    ///
    /// # Examples
    ///
    /// ```
    /// use objlist::storage::CatalogRecord;
    ///
    /// let record = CatalogRecord::new(7, "Gatekeeper");
    /// assert_eq!(record.id, 7);
    /// assert!(record.saved_at.is_none());
    /// ```
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            saved_at: None,
        }
    }
}
