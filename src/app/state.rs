//! List state, the selection controller and view model computation.
//!
//! [`ObjectListState`] is the single source of truth for one list: the backing
//! store, the search projection, the view selection (which underlying row the
//! view has highlighted) and the active selection (which object the property
//! editor is bound to). Every mutating operation returns the ordered
//! [`Action`]s the owner must execute.
//!
//! # Selection Transitions
//!
//! Whenever the view selection changes, [`ObjectListState`] runs one
//! transition and emits, in order:
//!
//! 1. `SaveProperties(previous)` unless read-only or the previous object is gone
//! 2. `CloseSelectors` if a previous object resolves and a main window is attached
//! 3. `LoadProperties(new)` with `None` when nothing resolves
//! 4. `SelectionChanged`
//!
//! # Example
//!
//! ```rust
//! use objlist::{Action, ListId, ObjectDescriber, ObjectListState};
//! use std::rc::Rc;
//!
//! struct Names;
//! impl ObjectDescriber<(u32, String)> for Names {
//!     fn object_id(&self, obj: &(u32, String)) -> String { obj.0.to_string() }
//!     fn object_name(&self, obj: &(u32, String)) -> String { obj.1.clone() }
//! }
//!
//! let alpha = Rc::new((1, "Alpha".to_string()));
//! let beta = Rc::new((2, "beta".to_string()));
//!
//! let mut state = ObjectListState::new(ListId(1), Names);
//! state.set_object_list(&[Rc::clone(&alpha), Rc::clone(&beta)]);
//! state.select(&alpha);
//!
//! let (found, actions) = state.select(&beta);
//! assert!(found);
//! assert!(matches!(actions[1], Action::SaveProperties(ref obj) if Rc::ptr_eq(obj, &alpha)));
//! assert!(matches!(actions[2], Action::LoadProperties(Some(ref obj)) if Rc::ptr_eq(obj, &beta)));
//! ```

use super::actions::Action;
use super::filter::FilterIndex;
use super::modes::{MoveControls, MoveDirection, SelectionState};
use super::store::ObjectListStore;
use crate::domain::{parse_object_id, ListId, ObjectDescriber, WindowId};
use crate::ui::viewmodel::{
    EmptyState, HeaderInfo, ListViewModel, MoveControlsInfo, RowItem, SearchBarInfo,
};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Text shown for rows whose object has been dropped by its owner.
const REMOVED_ROW_TEXT: &str = "<removed>";

/// Central state of one object list.
pub struct ObjectListState<T: ?Sized, D> {
    id: ListId,
    describer: D,
    store: ObjectListStore<T>,
    filter: FilterIndex,

    /// Underlying row highlighted in the view, if any.
    ///
    /// Kept in underlying coordinates so that filtering only moves it on
    /// screen. Cleared when the filter hides it.
    view_selection: Option<usize>,

    active: SelectionState<T>,
    read_only: bool,
    move_controls: MoveControls,
    main_window: Option<WindowId>,
}

impl<T: ?Sized, D: ObjectDescriber<T>> ObjectListState<T, D> {
    /// Creates an empty list with no selection, writable, move controls hidden.
    #[must_use]
    pub fn new(id: ListId, describer: D) -> Self {
        Self {
            id,
            describer,
            store: ObjectListStore::default(),
            filter: FilterIndex::default(),
            view_selection: None,
            active: SelectionState::NoSelection,
            read_only: false,
            move_controls: MoveControls::default(),
            main_window: None,
        }
    }

    /// Identity reported in `SelectionChanged` and `CloseSelectors`.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Describer used for filtering, row text and the id mapping.
    #[must_use]
    pub const fn describer(&self) -> &D {
        &self.describer
    }

    /// Attaches (or detaches) the main window that owns the selector dialogs.
    pub fn set_main_window(&mut self, window: Option<WindowId>) {
        tracing::debug!(list = %self.id, window = ?window, "main window set");
        self.main_window = window;
    }

    #[must_use]
    pub const fn main_window(&self) -> Option<WindowId> {
        self.main_window
    }

    /// Replaces the whole list.
    ///
    /// The active selection is reset without saving and the property editor
    /// is cleared. The search term is kept and re-applied.
    pub fn set_object_list(&mut self, objs: &[Rc<T>]) -> Vec<Action<T>> {
        let _span = tracing::debug_span!("set_object_list",
            list = %self.id,
            object_count = objs.len()
        )
        .entered();

        self.store.replace(objs);
        self.filter.refresh(&self.store, &self.describer);

        self.view_selection = None;
        self.active = SelectionState::NoSelection;
        self.move_controls.enabled = false;

        tracing::debug!(visible = self.filter.visible_count(), "object list replaced");

        vec![Action::LoadProperties(None)]
    }

    /// Applies a search term to the list.
    ///
    /// If the selected row no longer matches, the view loses its selection and
    /// a full transition runs.
    pub fn set_filter(&mut self, term: &str) -> Vec<Action<T>> {
        let _span = tracing::debug_span!("set_filter",
            list = %self.id,
            total_rows = self.store.row_count(),
            term_len = term.len()
        )
        .entered();

        self.filter.set_term(term, &self.store, &self.describer);

        tracing::debug!(visible = self.filter.visible_count(), "search filter applied");

        match self.view_selection {
            Some(row) if self.filter.to_visible(row).is_none() => {
                tracing::debug!(row, "selected row filtered out");
                self.set_view_selection(None)
            }
            _ => vec![],
        }
    }

    #[must_use]
    pub fn filter_term(&self) -> &str {
        self.filter.term()
    }

    /// Handles a click on a visible row.
    ///
    /// Clicking outside the visible rows is ignored; clicking the row that is
    /// already selected changes nothing.
    pub fn click_row(&mut self, visible_row: usize) -> Vec<Action<T>> {
        let Some(row) = self.filter.to_underlying(visible_row) else {
            tracing::debug!(visible_row, visible = self.filter.visible_count(), "click outside visible rows");
            return vec![];
        };
        self.set_view_selection(Some(row))
    }

    /// Clears the view selection, e.g. when the user deselects the row.
    pub fn clear_selection(&mut self) -> Vec<Action<T>> {
        self.set_view_selection(None)
    }

    /// Reveals and selects `obj`.
    ///
    /// Returns `false` with no actions if `obj` is not in the list. A search
    /// term that hides `obj` is cleared so the row can be shown.
    pub fn select(&mut self, obj: &Rc<T>) -> (bool, Vec<Action<T>>) {
        let _span = tracing::debug_span!("select", list = %self.id).entered();

        let Some(row) = self.store.index_of(obj) else {
            tracing::debug!("object not in list");
            return (false, vec![]);
        };

        if self.filter.to_visible(row).is_none() {
            tracing::debug!(row, term = %self.filter.term(), "clearing search to reveal object");
            self.filter.set_term("", &self.store, &self.describer);
        }

        let mut actions = Vec::new();
        if let Some(visible_row) = self.filter.to_visible(row) {
            actions.push(Action::RevealRow { row: visible_row });
        }
        actions.extend(self.set_view_selection(Some(row)));

        (true, actions)
    }

    /// Resolves the active object. `None` if nothing is selected or the owner
    /// has dropped it.
    #[must_use]
    pub fn active_object(&self) -> Option<Rc<T>> {
        self.active.resolve()
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState<T> {
        &self.active
    }

    /// Visible row of the current view selection.
    #[must_use]
    pub fn selected_visible_row(&self) -> Option<usize> {
        self.view_selection.and_then(|row| self.filter.to_visible(row))
    }

    /// Requests a save of the active object's properties.
    ///
    /// Used by the owner to flush pending edits, e.g. before switching tabs.
    pub fn save_active_properties(&self) -> Vec<Action<T>> {
        if self.read_only {
            tracing::debug!(list = %self.id, "read-only, skipping save");
            return vec![];
        }

        self.active
            .resolve()
            .map_or_else(Vec::new, |obj| vec![Action::SaveProperties(obj)])
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        tracing::debug!(list = %self.id, read_only, "read-only changed");
        self.read_only = read_only;
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Shows or hides the move buttons. Enablement is unaffected.
    pub fn toggle_move_controls(&mut self, visible: bool) {
        self.move_controls.visible = visible;
    }

    #[must_use]
    pub const fn move_controls(&self) -> MoveControls {
        self.move_controls
    }

    /// Requests moving the selected object one underlying row up.
    pub fn move_up(&self) -> Vec<Action<T>> {
        self.request_move(MoveDirection::Up)
    }

    /// Requests moving the selected object one underlying row down.
    pub fn move_down(&self) -> Vec<Action<T>> {
        self.request_move(MoveDirection::Down)
    }

    fn request_move(&self, direction: MoveDirection) -> Vec<Action<T>> {
        let Some(row) = self.view_selection else {
            tracing::debug!(?direction, "move without selection");
            return vec![];
        };

        let at_edge = match direction {
            MoveDirection::Up => row == 0,
            MoveDirection::Down => row + 1 >= self.store.row_count(),
        };
        if at_edge {
            tracing::debug!(?direction, row, "move at list edge ignored");
            return vec![];
        }

        self.store.get_object(row).map_or_else(Vec::new, |object| {
            tracing::debug!(?direction, row, "move requested");
            vec![Action::ObjectMoved { object, direction }]
        })
    }

    /// Object at an underlying row.
    #[must_use]
    pub fn get_object(&self, row: usize) -> Option<Rc<T>> {
        self.store.get_object(row)
    }

    /// Underlying row of `obj` by identity.
    #[must_use]
    pub fn index_of(&self, obj: &Rc<T>) -> Option<usize> {
        self.store.index_of(obj)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.filter.visible_count()
    }

    /// Objects currently shown, in visible order. Dropped objects are skipped.
    #[must_use]
    pub fn visible_objects(&self) -> Vec<Rc<T>> {
        self.filter
            .visible_rows()
            .iter()
            .filter_map(|&row| self.store.get_object(row))
            .collect()
    }

    /// Identifier to display text for every live object of the full list.
    ///
    /// The search term is ignored. Identifiers that do not parse map to 0 and
    /// a repeated identifier keeps the text of its last row.
    #[must_use]
    pub fn object_mapping(&self) -> BTreeMap<u32, String> {
        let mut mapping = BTreeMap::new();

        for (_, handle) in self.store.entries() {
            let Some(obj) = handle.resolve() else {
                continue;
            };
            let id = parse_object_id(&self.describer.object_id(&obj));
            if mapping.insert(id, self.describer.display_text(&obj)).is_some() {
                tracing::debug!(list = %self.id, id, "duplicate object id in mapping");
            }
        }

        mapping
    }

    fn set_view_selection(&mut self, selection: Option<usize>) -> Vec<Action<T>> {
        if self.view_selection == selection {
            return vec![];
        }
        self.view_selection = selection;
        self.selection_changed()
    }

    fn selection_changed(&mut self) -> Vec<Action<T>> {
        let _span = tracing::debug_span!("selection_changed",
            list = %self.id,
            read_only = self.read_only,
            row = ?self.view_selection
        )
        .entered();

        let mut actions = Vec::new();

        if let Some(previous) = self.active.resolve() {
            if !self.read_only {
                actions.push(Action::SaveProperties(previous));
            }
            if let Some(window) = self.main_window {
                actions.push(Action::CloseSelectors {
                    window,
                    list: self.id,
                });
            }
        }

        self.active = self
            .view_selection
            .and_then(|row| self.store.handle(row))
            .map_or(SelectionState::NoSelection, |handle| {
                SelectionState::HasSelection(handle.clone())
            });

        self.move_controls.enabled = self.active.is_selected();

        let loaded = self.active.resolve();
        tracing::debug!(has_object = loaded.is_some(), "loading properties");
        actions.push(Action::LoadProperties(loaded));
        actions.push(Action::SelectionChanged { list: self.id });

        actions
    }

    /// Computes a renderable view model showing at most `rows` list rows.
    ///
    /// The window of rows is centered on the selection when the list is longer
    /// than `rows`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> ListViewModel {
        let visible = self.filter.visible_rows();
        let selected_visible = self.selected_visible_row();

        let mut window_start = selected_visible.map_or(0, |sel| sel.saturating_sub(rows / 2));
        let window_end = (window_start + rows).min(visible.len());
        if window_end - window_start < rows && visible.len() >= rows {
            window_start = window_end.saturating_sub(rows);
        }

        let term = self.filter.term();
        let items: Vec<RowItem> = visible[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(offset, &row)| {
                let text = self
                    .store
                    .get_object(row)
                    .map_or_else(|| REMOVED_ROW_TEXT.to_string(), |obj| self.describer.display_text(&obj));
                let highlight_ranges = literal_match_ranges(&text, term);
                RowItem {
                    text,
                    visible_row: window_start + offset,
                    underlying_row: row,
                    is_selected: self.view_selection == Some(row),
                    highlight_ranges,
                }
            })
            .collect();

        let empty_state = if self.store.is_empty() {
            Some(EmptyState {
                message: "No objects".to_string(),
                subtitle: "The list is empty".to_string(),
            })
        } else if visible.is_empty() {
            Some(EmptyState {
                message: "No matches".to_string(),
                subtitle: format!("Nothing matches \"{term}\""),
            })
        } else {
            None
        };

        ListViewModel {
            rows: items,
            selected_index: selected_visible
                .filter(|sel| (window_start..window_end).contains(sel))
                .map(|sel| sel - window_start),
            header: HeaderInfo {
                title: format!(" Objects ({}/{}) ", visible.len(), self.store.row_count()),
            },
            search_bar: SearchBarInfo {
                query: term.to_string(),
            },
            move_controls: MoveControlsInfo {
                visible: self.move_controls.visible,
                enabled: self.move_controls.enabled,
            },
            read_only: self.read_only,
            empty_state,
        }
    }
}

/// Byte ranges of every non-overlapping case-insensitive occurrence of `term`.
///
/// Returns nothing when lowercasing changes the byte length of `text`, since
/// offsets into the lowercased string would not line up with `text`.
fn literal_match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }

    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    if haystack.len() != text.len() {
        return vec![];
    }

    haystack
        .match_indices(&needle)
        .map(|(start, matched)| (start, start + matched.len()))
        .filter(|&(start, end)| text.is_char_boundary(start) && text.is_char_boundary(end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Obj {
        id: String,
        name: String,
    }

    struct Describer;

    impl ObjectDescriber<Obj> for Describer {
        fn object_id(&self, obj: &Obj) -> String {
            obj.id.clone()
        }

        fn object_name(&self, obj: &Obj) -> String {
            obj.name.clone()
        }
    }

    fn obj(id: &str, name: &str) -> Rc<Obj> {
        Rc::new(Obj {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    fn list(objs: &[Rc<Obj>]) -> ObjectListState<Obj, Describer> {
        let mut state = ObjectListState::new(ListId(3), Describer);
        state.set_object_list(objs);
        state
    }

    #[test]
    fn new_state_is_empty_and_unselected() {
        let state: ObjectListState<Obj, Describer> = ObjectListState::new(ListId(1), Describer);
        assert_eq!(state.row_count(), 0);
        assert!(state.active_object().is_none());
        assert_eq!(state.move_controls(), MoveControls::default());
        assert!(!state.is_read_only());
    }

    #[test]
    fn clicking_selected_row_again_emits_nothing() {
        let objs = [obj("1", "a"), obj("2", "b")];
        let mut state = list(&objs);

        assert!(!state.click_row(1).is_empty());
        assert!(state.click_row(1).is_empty());
    }

    #[test]
    fn click_outside_visible_rows_is_ignored() {
        let objs = [obj("1", "a")];
        let mut state = list(&objs);

        assert!(state.click_row(5).is_empty());
        assert!(state.active_object().is_none());
    }

    #[test]
    fn filtering_out_selection_runs_transition() {
        let objs = [obj("1", "Alpha"), obj("2", "beta")];
        let mut state = list(&objs);
        state.click_row(0);

        let actions = state.set_filter("bet");

        assert_eq!(
            actions,
            vec![
                Action::SaveProperties(Rc::clone(&objs[0])),
                Action::LoadProperties(None),
                Action::SelectionChanged { list: ListId(3) },
            ]
        );
        assert!(state.active_object().is_none());
        assert!(!state.move_controls().enabled);
    }

    #[test]
    fn filtering_that_keeps_selection_shifts_visible_row_only() {
        let objs = [obj("1", "Alpha"), obj("2", "beta"), obj("3", "Alpine")];
        let mut state = list(&objs);
        state.click_row(2);
        assert_eq!(state.selected_visible_row(), Some(2));

        assert!(state.set_filter("alp").is_empty());
        assert_eq!(state.selected_visible_row(), Some(1));
        assert!(Rc::ptr_eq(&state.active_object().unwrap(), &objs[2]));
    }

    #[test]
    fn select_clears_search_that_hides_object() {
        let objs = [obj("1", "Alpha"), obj("2", "beta")];
        let mut state = list(&objs);
        state.set_filter("alpha");

        let (found, actions) = state.select(&objs[1]);

        assert!(found);
        assert_eq!(state.filter_term(), "");
        assert_eq!(actions[0], Action::RevealRow { row: 1 });
        assert!(Rc::ptr_eq(&state.active_object().unwrap(), &objs[1]));
    }

    #[test]
    fn dropped_active_object_is_not_saved() {
        let mut objs = vec![obj("1", "a"), obj("2", "b")];
        let mut state = list(&objs);
        state.click_row(0);

        objs.remove(0);
        assert!(state.active_object().is_none());
        assert!(state.save_active_properties().is_empty());

        let actions = state.click_row(1);
        assert_eq!(
            actions,
            vec![
                Action::LoadProperties(Some(Rc::clone(&objs[0]))),
                Action::SelectionChanged { list: ListId(3) },
            ]
        );
    }

    #[test]
    fn selecting_dropped_row_loads_nothing_but_enables_moves() {
        let mut objs = vec![obj("1", "a"), obj("2", "b")];
        let mut state = list(&objs);
        objs.remove(1);

        let actions = state.click_row(1);

        assert_eq!(
            actions,
            vec![
                Action::LoadProperties(None),
                Action::SelectionChanged { list: ListId(3) },
            ]
        );
        assert!(state.selection().is_selected());
        assert!(state.move_controls().enabled);
        assert!(state.move_up().is_empty());
    }

    #[test]
    fn row_text_and_mapping_come_from_describer() {
        let objs = [obj("7", "Gate"), obj("8", "")];
        let state = list(&objs);

        assert_eq!(state.id(), ListId(3));
        assert_eq!(state.describer().display_text(&objs[0]), "7 (Gate)");
        assert_eq!(state.compute_viewmodel(5).rows[1].text, "8");
        assert_eq!(state.object_mapping().get(&8).map(String::as_str), Some("8"));
    }

    #[test]
    fn mapping_skips_dropped_objects() {
        let mut objs = vec![obj("1", "a"), obj("2", "b")];
        let state = list(&objs);
        objs.remove(0);

        let mapping = state.object_mapping();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get(&2).map(String::as_str), Some("2 (b)"));
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let objs: Vec<Rc<Obj>> = (0..10).map(|i| obj(&i.to_string(), &format!("n{i}"))).collect();
        let mut state = list(&objs);
        state.click_row(8);

        let vm = state.compute_viewmodel(4);

        assert_eq!(vm.rows.len(), 4);
        assert_eq!(vm.rows[0].visible_row, 6);
        assert_eq!(vm.selected_index, Some(2));
        assert!(vm.rows[2].is_selected);
        assert_eq!(vm.header.title, " Objects (10/10) ");
    }

    #[test]
    fn viewmodel_reports_empty_states() {
        let mut state = list(&[]);
        let vm = state.compute_viewmodel(5);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No objects".to_string()));

        let objs = [obj("1", "a")];
        state.set_object_list(&objs);
        state.set_filter("zzz");
        let vm = state.compute_viewmodel(5);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No matches".to_string()));
    }

    #[test]
    fn match_ranges_cover_each_occurrence() {
        assert_eq!(literal_match_ranges("1 (Banana)", "AN"), vec![(4, 6), (6, 8)]);
        assert!(literal_match_ranges("abc", "").is_empty());
        assert!(literal_match_ranges("İstanbul", "st").is_empty());
    }
}
