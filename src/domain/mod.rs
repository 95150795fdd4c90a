//! Domain layer for the object list.
//!
//! Contains the types that describe externally owned objects and the errors
//! of the ambient layers, independent of any UI toolkit.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`object`]: Weak object handles, list/window identities, the describer capability
//!
//! # Examples
//!
//! ```
//! use objlist::domain::{ObjectHandle, parse_object_id};
//! use std::rc::Rc;
//!
//! let obj = Rc::new(("17".to_string(), "Gate".to_string()));
//! let handle = ObjectHandle::new(&obj);
//! let id = handle.resolve().map(|o| parse_object_id(&o.0));
//! assert_eq!(id, Some(17));
//! ```

pub mod error;
pub mod object;

pub use error::{ObjectListError, Result};
pub use object::{parse_object_id, ListId, ObjectDescriber, ObjectHandle, WindowId};
