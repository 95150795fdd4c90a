//! Weak object handles and the describer capability.
//!
//! Domain objects are owned elsewhere (typically by whatever loaded them from
//! disk) and shared as `Rc<T>`. The list never keeps them alive: both list
//! membership and the active selection are [`ObjectHandle`]s wrapping a
//! `std::rc::Weak`, and every use goes through [`ObjectHandle::resolve`].
//!
//! How an object is identified and named is supplied per concrete list type
//! through [`ObjectDescriber`].

use std::fmt;
use std::rc::{Rc, Weak};

/// Identity of a list instance, passed back to the owner in notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(pub u32);

/// Identity of the main window a list reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list#{}", self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Non-owning reference to an externally owned domain object.
///
/// Identity is pointer identity of the shared allocation, so two handles to
/// the same `Rc` compare equal even after the object has been dropped.
///
/// # Example
///
/// ```
/// use objlist::ObjectHandle;
/// use std::rc::Rc;
///
/// let obj = Rc::new(String::from("Alpha"));
/// let handle = ObjectHandle::new(&obj);
/// assert_eq!(handle.resolve().as_deref().map(String::as_str), Some("Alpha"));
///
/// drop(obj);
/// assert!(handle.resolve().is_none());
/// ```
pub struct ObjectHandle<T: ?Sized> {
    inner: Weak<T>,
}

impl<T: ?Sized> ObjectHandle<T> {
    /// Creates a handle that observes `obj` without keeping it alive.
    #[must_use]
    pub fn new(obj: &Rc<T>) -> Self {
        Self {
            inner: Rc::downgrade(obj),
        }
    }

    /// Upgrades to a strong reference if the owner still holds the object.
    #[must_use]
    pub fn resolve(&self) -> Option<Rc<T>> {
        self.inner.upgrade()
    }

    /// Returns true while the owner still holds the object.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Returns true if this handle was created from `obj`'s allocation.
    #[must_use]
    pub fn refers_to(&self, obj: &Rc<T>) -> bool {
        Weak::ptr_eq(&self.inner, &Rc::downgrade(obj))
    }
}

impl<T: ?Sized> Clone for ObjectHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> PartialEq for ObjectHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Eq for ObjectHandle<T> {}

impl<T: ?Sized> fmt::Debug for ObjectHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHandle")
            .field("alive", &self.is_alive())
            .finish_non_exhaustive()
    }
}

/// Capability describing objects of one concrete list type.
///
/// `object_id` and `object_name` have no sensible generic answer and must be
/// supplied by every list type. `display_text` is the rendered row text and
/// defaults to `"<id> (<name>)"`, falling back to the bare id for unnamed
/// objects.
pub trait ObjectDescriber<T: ?Sized> {
    /// Identifier of `obj`, expected to parse as an unsigned integer.
    fn object_id(&self, obj: &T) -> String;

    /// Name used for search filtering.
    fn object_name(&self, obj: &T) -> String;

    fn display_text(&self, obj: &T) -> String {
        let id = self.object_id(obj);
        let name = self.object_name(obj);
        if name.is_empty() {
            id
        } else {
            format!("{id} ({name})")
        }
    }
}

/// Parses an object identifier, yielding 0 for anything that is not a valid
/// `u32`.
///
/// # Example
///
/// ```
/// use objlist::domain::parse_object_id;
///
/// assert_eq!(parse_object_id("42"), 42);
/// assert_eq!(parse_object_id(" 7 "), 7);
/// assert_eq!(parse_object_id("npc-7"), 0);
/// assert_eq!(parse_object_id("-1"), 0);
/// ```
#[must_use]
pub fn parse_object_id(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
