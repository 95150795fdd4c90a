//! Plain-text renderer for list view models.
//!
//! Produces one line per element: header, search bar, rows (selected row
//! marked with `>`, search matches wrapped in brackets), move buttons and the
//! read-only marker. Used by the demo shell and handy in tests.

use crate::ui::viewmodel::{ListViewModel, MoveControlsInfo, RowItem};
use std::fmt::Write as _;

/// Renders a view model to a newline-terminated string.
///
/// # Example
///
/// ```rust
/// use objlist::{ListId, ObjectDescriber, ObjectListState};
/// use objlist::ui::render_to_string;
/// use std::rc::Rc;
///
/// struct Names;
/// impl ObjectDescriber<String> for Names {
///     fn object_id(&self, _obj: &String) -> String { "1".to_string() }
///     fn object_name(&self, obj: &String) -> String { obj.clone() }
/// }
///
/// let alpha = Rc::new("Alpha".to_string());
/// let mut state = ObjectListState::new(ListId(1), Names);
/// state.set_object_list(&[Rc::clone(&alpha)]);
/// state.set_filter("al");
///
/// let out = render_to_string(&state.compute_viewmodel(10));
/// assert!(out.contains("1 ([Al]pha)"));
/// ```
#[must_use]
pub fn render_to_string(vm: &ListViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", vm.header.title.trim());
    let _ = writeln!(out, "Search: {}", vm.search_bar.query);

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "  {}", empty.message);
        let _ = writeln!(out, "  {}", empty.subtitle);
    } else {
        for row in &vm.rows {
            render_row(&mut out, row);
        }
    }

    render_move_controls(&mut out, vm.move_controls);

    if vm.read_only {
        out.push_str("(read-only)\n");
    }

    out
}

fn render_row(out: &mut String, row: &RowItem) {
    let marker = if row.is_selected { '>' } else { ' ' };
    let _ = writeln!(
        out,
        "{marker} {:>3}  {}",
        row.visible_row,
        highlight(&row.text, &row.highlight_ranges)
    );
}

fn render_move_controls(out: &mut String, controls: MoveControlsInfo) {
    if !controls.visible {
        return;
    }
    if controls.enabled {
        out.push_str("[Up] [Down]\n");
    } else {
        out.push_str("(Up) (Down)\n");
    }
}

/// Wraps each highlighted byte range of `text` in brackets.
///
/// Ranges must be sorted, non-overlapping and on char boundaries; anything
/// else is rendered unhighlighted.
fn highlight(text: &str, ranges: &[(usize, usize)]) -> String {
    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut cursor = 0;

    for &(start, end) in ranges {
        if start < cursor || end > text.len() || start > end {
            return text.to_string();
        }
        let (Some(before), Some(matched)) = (text.get(cursor..start), text.get(start..end)) else {
            return text.to_string();
        };
        out.push_str(before);
        out.push('[');
        out.push_str(matched);
        out.push(']');
        cursor = end;
    }

    out.push_str(text.get(cursor..).unwrap_or_default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{EmptyState, HeaderInfo, SearchBarInfo};

    fn vm(rows: Vec<RowItem>) -> ListViewModel {
        ListViewModel {
            rows,
            selected_index: None,
            header: HeaderInfo {
                title: " Objects (2/2) ".to_string(),
            },
            search_bar: SearchBarInfo {
                query: String::new(),
            },
            move_controls: MoveControlsInfo {
                visible: false,
                enabled: false,
            },
            read_only: false,
            empty_state: None,
        }
    }

    fn row(text: &str, visible_row: usize, is_selected: bool) -> RowItem {
        RowItem {
            text: text.to_string(),
            visible_row,
            underlying_row: visible_row,
            is_selected,
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn renders_rows_with_selection_marker() {
        let out = render_to_string(&vm(vec![row("1 (a)", 0, false), row("2 (b)", 1, true)]));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Objects (2/2)");
        assert_eq!(lines[1], "Search: ");
        assert_eq!(lines[2], "    0  1 (a)");
        assert_eq!(lines[3], ">   1  2 (b)");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn move_controls_and_read_only_marker() {
        let mut model = vm(vec![]);
        model.move_controls = MoveControlsInfo {
            visible: true,
            enabled: false,
        };
        model.read_only = true;

        let out = render_to_string(&model);
        assert!(out.contains("(Up) (Down)\n"));
        assert!(out.ends_with("(read-only)\n"));
    }

    #[test]
    fn empty_state_replaces_rows() {
        let mut model = vm(vec![row("ignored", 0, false)]);
        model.empty_state = Some(EmptyState {
            message: "No matches".to_string(),
            subtitle: "Nothing matches \"q\"".to_string(),
        });

        let out = render_to_string(&model);
        assert!(out.contains("No matches"));
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn highlight_rejects_bad_ranges() {
        assert_eq!(highlight("abcdef", &[(0, 1), (3, 5)]), "[a]bc[de]f");
        assert_eq!(highlight("abc", &[(2, 9)]), "abc");
        assert_eq!(highlight("abc", &[(2, 3), (0, 1)]), "abc");
    }
}
