//! The JSON catalog and property sheet driving a list the way an owning
//! window would.

use objlist::storage::{CatalogDescriber, CatalogObject, JsonCatalog, PropertySheet};
use objlist::ui::render_to_string;
use objlist::{dispatch_actions, handle_event, Config, Event, ListId, ObjectListState};
use std::io::Write;

const CATALOG: &str = r#"{
  "version": 1,
  "objects": [
    { "id": 1, "name": "A" },
    { "id": 2, "name": "B" },
    { "id": 3, "name": "C" }
  ]
}"#;

struct Window {
    list: ObjectListState<CatalogObject, CatalogDescriber>,
    catalog: JsonCatalog,
    sheet: PropertySheet,
}

impl Window {
    fn open(config: &Config) -> Self {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let mut window = Self {
            list: objlist::initialize(config, ListId(1), CatalogDescriber),
            catalog: JsonCatalog::load(file.path()).unwrap(),
            sheet: PropertySheet::default(),
        };
        let actions = window.list.set_object_list(window.catalog.objects());
        dispatch_actions(actions, &mut window.sheet, &mut window.catalog);
        window
    }

    fn send(&mut self, event: Event<CatalogObject>) {
        let (_, actions) = handle_event(&mut self.list, &event);
        dispatch_actions(actions, &mut self.sheet, &mut self.catalog);

        if self.catalog.take_dirty() {
            let active = self.list.active_object();
            let mut actions = self.list.set_object_list(self.catalog.objects());
            if let Some(obj) = active {
                actions.extend(self.list.select(&obj).1);
            }
            dispatch_actions(actions, &mut self.sheet, &mut self.catalog);
        }
    }

    fn ids(&self) -> Vec<u32> {
        (0..self.list.row_count())
            .filter_map(|row| self.list.get_object(row))
            .map(|obj| obj.id())
            .collect()
    }
}

#[test]
fn edits_are_saved_when_selection_moves_on() {
    let mut window = Window::open(&Config::default());

    window.send(Event::ClickRow(0));
    assert_eq!(window.sheet.name_field(), "A");

    window.sheet.edit_name("Aardvark");
    window.send(Event::ClickRow(1));

    let a = window.catalog.find(1).unwrap();
    assert_eq!(a.name(), "Aardvark");
    assert!(a.saved_at().is_some());
    assert_eq!(window.sheet.name_field(), "B");
    assert_eq!(window.catalog.selection_changes(), 2);
}

#[test]
fn read_only_config_discards_edits() {
    let config = Config {
        read_only: true,
        ..Default::default()
    };
    let mut window = Window::open(&config);

    window.send(Event::ClickRow(0));
    window.sheet.edit_name("Aardvark");
    window.send(Event::ClickRow(1));

    assert_eq!(window.catalog.find(1).unwrap().name(), "A");
    assert_eq!(window.sheet.save_count(), 0);
}

#[test]
fn owner_reorders_and_refreshes_after_move() {
    let mut window = Window::open(&Config::default());

    window.send(Event::ClickRow(1));
    window.send(Event::MoveDown);
    assert_eq!(window.ids(), vec![1, 3, 2]);
    assert_eq!(window.list.selected_visible_row(), Some(2));

    // B is now last: nothing happens.
    window.send(Event::MoveDown);
    assert_eq!(window.ids(), vec![1, 3, 2]);

    window.send(Event::ClickRow(0));
    window.send(Event::MoveUp);
    assert_eq!(window.ids(), vec![1, 3, 2]);
}

#[test]
fn selectors_close_through_owner() {
    let mut window = Window::open(&Config::default());
    window.send(Event::SetMainWindow(Some(objlist::WindowId(5))));

    window.send(Event::ClickRow(0));
    assert!(window.catalog.closed_selectors().is_empty());

    window.send(Event::ClearSelection);
    assert_eq!(
        window.catalog.closed_selectors(),
        &[(objlist::WindowId(5), ListId(1))]
    );
    assert!(window.sheet.loaded().is_none());
}

#[test]
fn dropped_rows_render_as_removed_until_refresh() {
    let mut window = Window::open(&Config::default());
    window.send(Event::ClickRow(1));

    assert!(window.catalog.remove(2));
    let text = render_to_string(&window.list.compute_viewmodel(10));
    assert!(text.contains("<removed>"));
    assert!(window.list.active_object().is_none());
    assert_eq!(window.list.object_mapping().len(), 2);

    window.send(Event::SetObjectList(window.catalog.objects().to_vec()));
    assert_eq!(window.ids(), vec![1, 3]);
}
