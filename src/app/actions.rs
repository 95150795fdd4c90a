//! Actions representing side effects requested by the list controller.
//!
//! Every inbound operation returns a `Vec<Action<T>>`. The order of the vector
//! is the order in which the owner must perform the effects; for a selection
//! change that is save, close selectors, load, notify.
//!
//! # Example
//!
//! ```rust
//! use objlist::{Action, ListId};
//!
//! let actions: Vec<Action<String>> = vec![
//!     Action::LoadProperties(None),
//!     Action::SelectionChanged { list: ListId(1) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use super::modes::MoveDirection;
use crate::domain::{ListId, WindowId};
use std::fmt;
use std::rc::Rc;

/// Commands the owner of a list executes after each operation.
pub enum Action<T: ?Sized> {
    /// Write the property editor's contents back into this object.
    SaveProperties(Rc<T>),

    /// Show this object's properties in the editor, or clear the editor.
    LoadProperties(Option<Rc<T>>),

    /// Ask the main window to close any selector dialogs opened for this list.
    CloseSelectors {
        /// Main window the list was attached to.
        window: WindowId,
        /// The list whose selectors should close.
        list: ListId,
    },

    /// The active selection changed. Always the last action of a transition.
    SelectionChanged {
        /// The list whose selection changed.
        list: ListId,
    },

    /// The user asked to move this object one row up or down.
    ///
    /// The owner reorders its own data and then calls `set_object_list`.
    ObjectMoved {
        /// Object to move.
        object: Rc<T>,
        /// Requested direction.
        direction: MoveDirection,
    },

    /// Scroll the view so this visible row sits in the center.
    RevealRow {
        /// Visible row to center.
        row: usize,
    },
}

impl<T: ?Sized> Clone for Action<T> {
    fn clone(&self) -> Self {
        match self {
            Self::SaveProperties(obj) => Self::SaveProperties(Rc::clone(obj)),
            Self::LoadProperties(obj) => Self::LoadProperties(obj.clone()),
            Self::CloseSelectors { window, list } => Self::CloseSelectors {
                window: *window,
                list: *list,
            },
            Self::SelectionChanged { list } => Self::SelectionChanged { list: *list },
            Self::ObjectMoved { object, direction } => Self::ObjectMoved {
                object: Rc::clone(object),
                direction: *direction,
            },
            Self::RevealRow { row } => Self::RevealRow { row: *row },
        }
    }
}

impl<T: ?Sized> PartialEq for Action<T> {
    /// Objects compare by identity, not by value.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SaveProperties(a), Self::SaveProperties(b)) => Rc::ptr_eq(a, b),
            (Self::LoadProperties(a), Self::LoadProperties(b)) => match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            (
                Self::CloseSelectors { window: wa, list: la },
                Self::CloseSelectors { window: wb, list: lb },
            ) => wa == wb && la == lb,
            (Self::SelectionChanged { list: a }, Self::SelectionChanged { list: b }) => a == b,
            (
                Self::ObjectMoved { object: oa, direction: da },
                Self::ObjectMoved { object: ob, direction: db },
            ) => Rc::ptr_eq(oa, ob) && da == db,
            (Self::RevealRow { row: a }, Self::RevealRow { row: b }) => a == b,
            _ => false,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SaveProperties(obj) => write!(f, "SaveProperties({:p})", Rc::as_ptr(obj).cast::<()>()),
            Self::LoadProperties(Some(obj)) => {
                write!(f, "LoadProperties({:p})", Rc::as_ptr(obj).cast::<()>())
            }
            Self::LoadProperties(None) => f.write_str("LoadProperties(None)"),
            Self::CloseSelectors { window, list } => f
                .debug_struct("CloseSelectors")
                .field("window", window)
                .field("list", list)
                .finish(),
            Self::SelectionChanged { list } => {
                f.debug_struct("SelectionChanged").field("list", list).finish()
            }
            Self::ObjectMoved { object, direction } => f
                .debug_struct("ObjectMoved")
                .field("object", &Rc::as_ptr(object).cast::<()>())
                .field("direction", direction)
                .finish(),
            Self::RevealRow { row } => f.debug_struct("RevealRow").field("row", row).finish(),
        }
    }
}
