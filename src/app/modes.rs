//! State machine types for selection and the move controls.
//!
//! # State Machine
//!
//! The selection controller is in one of two states:
//! - **NoSelection**: nothing is active, the property editor shows nothing
//! - **HasSelection**: one object is active and its properties are loaded
//!
//! The move controls carry two independent flags: visibility is chosen by the
//! owner, enablement follows the selection state.

use crate::domain::ObjectHandle;
use std::rc::Rc;

/// Active selection of a list.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionState<T: ?Sized> {
    /// No object is active.
    NoSelection,

    /// One object is active. The handle may stop resolving if the owner drops
    /// the object, which is read as "no active object".
    HasSelection(ObjectHandle<T>),
}

impl<T: ?Sized> SelectionState<T> {
    /// Resolves the active object, if any is still alive.
    #[must_use]
    pub fn resolve(&self) -> Option<Rc<T>> {
        match self {
            Self::NoSelection => None,
            Self::HasSelection(handle) => handle.resolve(),
        }
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::HasSelection(_))
    }
}

impl<T: ?Sized> Default for SelectionState<T> {
    fn default() -> Self {
        Self::NoSelection
    }
}

impl<T: ?Sized> Clone for SelectionState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::NoSelection => Self::NoSelection,
            Self::HasSelection(handle) => Self::HasSelection(handle.clone()),
        }
    }
}

/// Direction of a requested reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Towards underlying row 0.
    Up,
    /// Towards the last underlying row.
    Down,
}

impl MoveDirection {
    /// True for [`MoveDirection::Up`], matching the boolean flag list owners
    /// traditionally receive.
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Visibility and enablement of the move-up/move-down buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveControls {
    /// Chosen by the owner via `toggle_move_controls`. Hidden by default.
    pub visible: bool,

    /// True exactly while an object is selected.
    pub enabled: bool,
}
