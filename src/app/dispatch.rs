//! Executing actions against the list's collaborators.
//!
//! A list talks to two collaborators: the property editor next to it and the
//! owner that holds the objects (usually the main window). Both are traits so
//! concrete list types, and tests, can plug in their own.

use super::actions::Action;
use super::modes::MoveDirection;
use crate::domain::{ListId, WindowId};
use std::rc::Rc;

/// Property editor bound to the active object of a list.
pub trait PropertyEditor<T: ?Sized> {
    /// Shows `obj`'s properties, or clears the editor for `None`.
    fn load_properties(&mut self, obj: Option<Rc<T>>);

    /// Writes the editor's contents back into `obj`.
    fn save_properties(&mut self, obj: &Rc<T>);
}

/// Owner of the objects shown in a list.
pub trait ListOwner<T: ?Sized> {
    /// Closes selector dialogs that `window` opened on behalf of `list`.
    fn close_selectors(&mut self, window: WindowId, list: ListId);

    fn selection_changed(&mut self, list: ListId);

    /// Reorders `obj` in the owner's data. The owner refreshes the list
    /// afterwards with `set_object_list`.
    fn object_moved(&mut self, obj: Rc<T>, direction: MoveDirection);

    /// Scrolls the view so `row` is centered. Views without scrolling ignore it.
    fn reveal_row(&mut self, row: usize) {
        let _ = row;
    }
}

/// Executes `actions` in order.
///
/// # Example
///
/// ```rust
/// use objlist::app::dispatch::{dispatch_actions, ListOwner, PropertyEditor};
/// use objlist::{Action, ListId, MoveDirection, WindowId};
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct Log(Vec<String>);
///
/// impl PropertyEditor<str> for Log {
///     fn load_properties(&mut self, obj: Option<Rc<str>>) {
///         self.0.push(format!("load {}", obj.as_deref().unwrap_or("-")));
///     }
///     fn save_properties(&mut self, obj: &Rc<str>) {
///         self.0.push(format!("save {obj}"));
///     }
/// }
///
/// impl ListOwner<str> for Log {
///     fn close_selectors(&mut self, _window: WindowId, _list: ListId) {}
///     fn selection_changed(&mut self, _list: ListId) { self.0.push("changed".into()); }
///     fn object_moved(&mut self, _obj: Rc<str>, _direction: MoveDirection) {}
/// }
///
/// let a: Rc<str> = Rc::from("a");
/// let mut editor = Log::default();
/// let mut owner = Log::default();
/// dispatch_actions(
///     vec![Action::SaveProperties(a), Action::LoadProperties(None)],
///     &mut editor,
///     &mut owner,
/// );
/// assert_eq!(editor.0, vec!["save a", "load -"]);
/// ```
pub fn dispatch_actions<T, E, O>(actions: Vec<Action<T>>, editor: &mut E, owner: &mut O)
where
    T: ?Sized,
    E: PropertyEditor<T> + ?Sized,
    O: ListOwner<T> + ?Sized,
{
    for action in actions {
        match action {
            Action::SaveProperties(obj) => {
                tracing::debug!("saving properties");
                editor.save_properties(&obj);
            }
            Action::LoadProperties(obj) => {
                tracing::debug!(has_object = obj.is_some(), "loading properties");
                editor.load_properties(obj);
            }
            Action::CloseSelectors { window, list } => {
                tracing::debug!(%window, %list, "closing selectors");
                owner.close_selectors(window, list);
            }
            Action::SelectionChanged { list } => owner.selection_changed(list),
            Action::ObjectMoved { object, direction } => {
                tracing::debug!(?direction, "object move requested");
                owner.object_moved(object, direction);
            }
            Action::RevealRow { row } => owner.reveal_row(row),
        }
    }
}
