//! View model types representing renderable list state.
//!
//! View models are computed by `ObjectListState::compute_viewmodel()` and
//! contain only display-ready data, so any toolkit (or the plain-text
//! renderer in this crate) can draw them.
//!
//! # Example
//!
//! ```rust
//! use objlist::ui::viewmodel::{
//!     HeaderInfo, ListViewModel, MoveControlsInfo, RowItem, SearchBarInfo,
//! };
//!
//! let vm = ListViewModel {
//!     rows: vec![RowItem {
//!         text: "1 (Alpha)".to_string(),
//!         visible_row: 0,
//!         underlying_row: 0,
//!         is_selected: true,
//!         highlight_ranges: vec![(3, 5)],
//!     }],
//!     selected_index: Some(0),
//!     header: HeaderInfo { title: " Objects (1/2) ".to_string() },
//!     search_bar: SearchBarInfo { query: "al".to_string() },
//!     move_controls: MoveControlsInfo { visible: true, enabled: true },
//!     read_only: false,
//!     empty_state: None,
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

/// Complete list view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Rows inside the display window, in visible order.
    pub rows: Vec<RowItem>,

    /// Index into `rows` of the selected row, if it is inside the window.
    pub selected_index: Option<usize>,

    pub header: HeaderInfo,

    pub search_bar: SearchBarInfo,

    pub move_controls: MoveControlsInfo,

    /// Whether edits in the property editor will be discarded.
    pub read_only: bool,

    /// Message shown instead of rows when nothing is visible.
    pub empty_state: Option<EmptyState>,
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowItem {
    /// Rendered row text.
    pub text: String,

    /// Position among the filtered rows.
    pub visible_row: usize,

    /// Position in the full list.
    pub underlying_row: usize,

    pub is_selected: bool,

    /// Byte ranges of `text` matching the search term.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title with visible and total row counts.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,
}

/// Move-up/move-down button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveControlsInfo {
    pub visible: bool,
    pub enabled: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matches").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
