//! Demo owner and property editor for listed objects.
//!
//! The list controller does not store anything itself. This module provides
//! a concrete owner for it: a catalog of objects loaded from JSON, and a
//! one-field property sheet that edits them.
//!
//! # Modules
//!
//! - `catalog`: JSON catalog owning the objects, their describer, reordering
//! - `sheet`: Property editor with save-on-deselect semantics
//! - `models`: Serialized record types

pub mod catalog;
pub mod models;
pub mod sheet;

pub use catalog::{CatalogDescriber, CatalogObject, JsonCatalog};
pub use models::{CatalogFile, CatalogRecord, CATALOG_VERSION};
pub use sheet::PropertySheet;
