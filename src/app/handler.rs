//! Event handling for a single list.
//!
//! Toolkit signals (text edited, row clicked, button pressed) and calls from
//! the owning window are all expressed as [`Event`]s. [`handle_event`]
//! applies one event to the list state and returns whether the view needs a
//! redraw together with the actions to execute, in order.
//!
//! # Event Types
//!
//! - **View input**: `Search`, `ClickRow`, `ClearSelection`, `MoveUp`, `MoveDown`
//! - **Owner calls**: `SetObjectList`, `Select`, `SaveActiveProperties`,
//!   `SetReadOnly`, `ToggleMoveControls`, `SetMainWindow`
//!
//! # Example
//!
//! ```rust
//! use objlist::{handle_event, Event, ListId, ObjectDescriber, ObjectListState};
//! use std::rc::Rc;
//!
//! struct Names;
//! impl ObjectDescriber<String> for Names {
//!     fn object_id(&self, _obj: &String) -> String { String::new() }
//!     fn object_name(&self, obj: &String) -> String { obj.clone() }
//! }
//!
//! let mut state = ObjectListState::new(ListId(1), Names);
//! let objs = vec![Rc::new("a".to_string())];
//! let (render, actions) = handle_event(&mut state, &Event::SetObjectList(objs));
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! ```

use super::actions::Action;
use super::state::ObjectListState;
use crate::domain::{ObjectDescriber, WindowId};
use std::fmt;
use std::rc::Rc;

/// Inputs to a list, from its view or from its owner.
pub enum Event<T: ?Sized> {
    /// Replace the list contents.
    SetObjectList(Vec<Rc<T>>),
    /// The search text changed.
    Search(String),
    /// A visible row was clicked.
    ClickRow(usize),
    /// The view selection was cleared.
    ClearSelection,
    /// Programmatically reveal and select an object.
    Select(Rc<T>),
    /// The move-up button was pressed.
    MoveUp,
    /// The move-down button was pressed.
    MoveDown,
    /// Flush the property editor into the active object.
    SaveActiveProperties,
    SetReadOnly(bool),
    ToggleMoveControls(bool),
    SetMainWindow(Option<WindowId>),
}

impl<T: ?Sized> Event<T> {
    /// Short name used in tracing spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetObjectList(_) => "SetObjectList",
            Self::Search(_) => "Search",
            Self::ClickRow(_) => "ClickRow",
            Self::ClearSelection => "ClearSelection",
            Self::Select(_) => "Select",
            Self::MoveUp => "MoveUp",
            Self::MoveDown => "MoveDown",
            Self::SaveActiveProperties => "SaveActiveProperties",
            Self::SetReadOnly(_) => "SetReadOnly",
            Self::ToggleMoveControls(_) => "ToggleMoveControls",
            Self::SetMainWindow(_) => "SetMainWindow",
        }
    }
}

impl<T: ?Sized> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetObjectList(objs) => write!(f, "SetObjectList(len={})", objs.len()),
            Self::Search(term) => f.debug_tuple("Search").field(term).finish(),
            Self::ClickRow(row) => f.debug_tuple("ClickRow").field(row).finish(),
            Self::SetReadOnly(flag) => f.debug_tuple("SetReadOnly").field(flag).finish(),
            Self::ToggleMoveControls(flag) => f.debug_tuple("ToggleMoveControls").field(flag).finish(),
            Self::SetMainWindow(window) => f.debug_tuple("SetMainWindow").field(window).finish(),
            other => f.write_str(other.name()),
        }
    }
}

/// Applies an event to the list and returns `(should_render, actions)`.
///
/// Actions must be executed in the returned order. `should_render` is false
/// for events that leave the view unchanged (move requests, saves, a failed
/// `Select`).
pub fn handle_event<T, D>(state: &mut ObjectListState<T, D>, event: &Event<T>) -> (bool, Vec<Action<T>>)
where
    T: ?Sized,
    D: ObjectDescriber<T>,
{
    let _span = tracing::debug_span!("handle_event", list = %state.id(), event_type = event.name()).entered();
    tracing::trace!(event = ?event, "event received");

    match event {
        Event::SetObjectList(objs) => (true, state.set_object_list(objs)),
        Event::Search(term) => (true, state.set_filter(term)),
        Event::ClickRow(row) => {
            let actions = state.click_row(*row);
            (!actions.is_empty(), actions)
        }
        Event::ClearSelection => {
            let actions = state.clear_selection();
            (!actions.is_empty(), actions)
        }
        Event::Select(obj) => state.select(obj),
        Event::MoveUp => (false, state.move_up()),
        Event::MoveDown => (false, state.move_down()),
        Event::SaveActiveProperties => (false, state.save_active_properties()),
        Event::SetReadOnly(read_only) => {
            state.set_read_only(*read_only);
            (true, vec![])
        }
        Event::ToggleMoveControls(visible) => {
            state.toggle_move_controls(*visible);
            (true, vec![])
        }
        Event::SetMainWindow(window) => {
            state.set_main_window(*window);
            (false, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ListId;

    struct Names;

    impl ObjectDescriber<String> for Names {
        fn object_id(&self, _obj: &String) -> String {
            String::new()
        }

        fn object_name(&self, obj: &String) -> String {
            obj.clone()
        }
    }

    fn state_with(names: &[&str]) -> (Vec<Rc<String>>, ObjectListState<String, Names>) {
        let objs: Vec<Rc<String>> = names.iter().map(|n| Rc::new((*n).to_string())).collect();
        let mut state = ObjectListState::new(ListId(9), Names);
        handle_event(&mut state, &Event::SetObjectList(objs.clone()));
        (objs, state)
    }

    #[test]
    fn failed_select_does_not_render() {
        let (_objs, mut state) = state_with(&["a"]);
        let stranger = Rc::new("a".to_string());

        let (render, actions) = handle_event(&mut state, &Event::Select(stranger));
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn repeated_click_does_not_render() {
        let (_objs, mut state) = state_with(&["a", "b"]);

        assert!(handle_event(&mut state, &Event::ClickRow(0)).0);
        assert!(!handle_event(&mut state, &Event::ClickRow(0)).0);
    }

    #[test]
    fn owner_settings_are_applied() {
        let (_objs, mut state) = state_with(&["a"]);

        handle_event(&mut state, &Event::SetReadOnly(true));
        handle_event(&mut state, &Event::ToggleMoveControls(true));
        handle_event(&mut state, &Event::SetMainWindow(Some(WindowId(2))));

        assert!(state.is_read_only());
        assert!(state.move_controls().visible);
        assert_eq!(state.main_window(), Some(WindowId(2)));
    }

    #[test]
    fn debug_output_names_event() {
        let event: Event<String> = Event::Search("al".to_string());
        assert_eq!(format!("{event:?}"), "Search(\"al\")");
        assert_eq!(format!("{:?}", Event::<String>::MoveDown), "MoveDown");
    }
}
