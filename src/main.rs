//! Interactive demo shell for the object list.
//!
//! Loads a JSON catalog, shows it through an object list and reads commands
//! from stdin, one per line. Every command becomes a list [`Event`]; the
//! resulting actions are dispatched to a [`PropertySheet`] and the catalog,
//! then the list is printed again.
//!
//! # Usage
//!
//! ```text
//! objlist <CATALOG> [CONFIG]
//! ```
//!
//! Without a config argument, `config.toml` in the data directory
//! (`$OBJLIST_DATA_DIR`, else `$XDG_DATA_HOME/objlist`, else
//! `~/.local/share/objlist`) is used if present.
//!
//! # Commands
//!
//! - `search <term>`: Filter by name (no term clears the filter)
//! - `click <row>`: Select a visible row
//! - `clear`: Clear the selection
//! - `select <id>`: Reveal and select an object by id
//! - `up` / `down`: Move the selected object
//! - `rename <name>`: Edit the name field of the property sheet
//! - `save`: Save the property sheet into the selected object
//! - `readonly on|off`, `controls on|off`: Owner settings
//! - `window <n>|none`: Attach or detach a main window
//! - `drop <id>`: Remove an object from the catalog
//! - `map`: Print the id to text mapping
//! - `quit`

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use objlist::infrastructure::get_data_dir;
use objlist::observability::init_tracing;
use objlist::storage::{CatalogDescriber, CatalogObject, JsonCatalog, PropertySheet};
use objlist::ui::render_to_string;
use objlist::{
    dispatch_actions, handle_event, Action, Config, Event, ListId, ObjectListState, WindowId,
};

/// Looked up in the data directory when no config path is given.
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Parser, Debug)]
#[command(name = "objlist")]
#[command(about = "Interactive shell over a filterable, reorderable object list")]
struct Args {
    /// JSON catalog holding the listed objects
    catalog: PathBuf,

    /// TOML configuration (default: config.toml in the data directory, if present)
    config: Option<PathBuf>,
}

/// Whether the shell keeps reading after a command.
enum Flow {
    Continue,
    Quit,
}

/// Shell state: the list plus the collaborators it drives.
struct Shell {
    list: ObjectListState<CatalogObject, CatalogDescriber>,
    catalog: JsonCatalog,
    sheet: PropertySheet,
    view_rows: usize,
}

impl Shell {
    fn new(config: &Config, catalog: JsonCatalog) -> Self {
        let mut shell = Self {
            list: objlist::initialize(config, ListId(1), CatalogDescriber),
            catalog,
            sheet: PropertySheet::default(),
            view_rows: config.view_rows,
        };
        let actions = shell.list.set_object_list(shell.catalog.objects());
        shell.dispatch(actions);
        shell
    }

    /// Runs one command line and writes the response to `out`.
    fn execute(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').map_or((line, ""), |(c, a)| (c, a.trim()));

        let _span = tracing::debug_span!("shell_command", command).entered();

        let event = match command {
            "" => return Ok(Flow::Continue),
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => {
                writeln!(
                    out,
                    "commands: search click clear select up down rename save readonly controls window drop map quit"
                )?;
                return Ok(Flow::Continue);
            }
            "map" => {
                for (id, text) in self.list.object_mapping() {
                    writeln!(out, "{id:>5} => {text}")?;
                }
                return Ok(Flow::Continue);
            }
            "rename" => {
                self.sheet.edit_name(arg);
                writeln!(out, "name field: {}", self.sheet.name_field())?;
                return Ok(Flow::Continue);
            }
            "drop" => {
                let Some(id) = parse_id(arg, out)? else {
                    return Ok(Flow::Continue);
                };
                if !self.catalog.remove(id) {
                    writeln!(out, "no object with id {id}")?;
                    return Ok(Flow::Continue);
                }
                // Render once with the dead row before the owner refreshes.
                self.print(out)?;
                self.refresh();
                return self.print(out).map(|()| Flow::Continue);
            }
            "search" => Event::Search(arg.to_string()),
            "click" => match arg.parse::<usize>() {
                Ok(row) => Event::ClickRow(row),
                Err(_) => {
                    writeln!(out, "click needs a row number")?;
                    return Ok(Flow::Continue);
                }
            },
            "clear" => Event::ClearSelection,
            "select" => {
                let Some(id) = parse_id(arg, out)? else {
                    return Ok(Flow::Continue);
                };
                match self.catalog.find(id) {
                    Some(obj) => Event::Select(obj),
                    None => {
                        writeln!(out, "no object with id {id}")?;
                        return Ok(Flow::Continue);
                    }
                }
            }
            "up" => Event::MoveUp,
            "down" => Event::MoveDown,
            "save" => Event::SaveActiveProperties,
            "readonly" | "controls" => {
                let Some(flag) = parse_switch(arg) else {
                    writeln!(out, "{command} needs on or off")?;
                    return Ok(Flow::Continue);
                };
                if command == "readonly" {
                    Event::SetReadOnly(flag)
                } else {
                    Event::ToggleMoveControls(flag)
                }
            }
            "window" => match arg {
                "none" => Event::SetMainWindow(None),
                n => match n.parse::<u32>() {
                    Ok(n) => Event::SetMainWindow(Some(WindowId(n))),
                    Err(_) => {
                        writeln!(out, "window needs a number or none")?;
                        return Ok(Flow::Continue);
                    }
                },
            },
            other => {
                writeln!(out, "unknown command: {other} (try help)")?;
                return Ok(Flow::Continue);
            }
        };

        let (should_render, actions) = handle_event(&mut self.list, &event);
        if let Event::Select(_) = event {
            if actions.is_empty() {
                writeln!(out, "not in list")?;
            }
        }
        for action in &actions {
            writeln!(out, "  -> {}", describe_action(action))?;
        }
        self.dispatch(actions);

        if self.catalog.take_dirty() {
            self.refresh();
            return self.print(out).map(|()| Flow::Continue);
        }
        if should_render {
            self.print(out)?;
        }
        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, actions: Vec<Action<CatalogObject>>) {
        dispatch_actions(actions, &mut self.sheet, &mut self.catalog);
    }

    /// Hands the catalog's current order back to the list and reselects the
    /// previously active object if it survived.
    fn refresh(&mut self) {
        self.catalog.take_dirty();
        let active = self.list.active_object();

        let mut actions = self.list.save_active_properties();
        actions.extend(self.list.set_object_list(self.catalog.objects()));
        if let Some(obj) = active {
            actions.extend(self.list.select(&obj).1);
        }
        self.dispatch(actions);
    }

    fn print(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(render_to_string(&self.list.compute_viewmodel(self.view_rows)).as_bytes())
    }
}

fn describe_action(action: &Action<CatalogObject>) -> String {
    match action {
        Action::SaveProperties(obj) => format!("save #{}", obj.id()),
        Action::LoadProperties(Some(obj)) => format!("load #{}", obj.id()),
        Action::LoadProperties(None) => "load none".to_string(),
        Action::CloseSelectors { window, list } => format!("close selectors of {window} for {list}"),
        Action::SelectionChanged { list } => format!("selection changed in {list}"),
        Action::ObjectMoved { object, direction } => format!("move #{} {direction:?}", object.id()),
        Action::RevealRow { row } => format!("reveal row {row}"),
    }
}

fn parse_id(arg: &str, out: &mut impl Write) -> io::Result<Option<u32>> {
    match arg.parse::<u32>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(out, "expected a numeric id, got {arg:?}")?;
            Ok(None)
        }
    }
}

fn parse_switch(arg: &str) -> Option<bool> {
    match arg {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn run(args: Args) -> objlist::Result<()> {
    let config = match args.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let default_path = get_data_dir().join(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                Config::from_file(default_path)?
            } else {
                Config::default()
            }
        }
    };

    init_tracing(&config);
    let _span = tracing::debug_span!("shell", catalog = %args.catalog.display()).entered();

    let catalog = JsonCatalog::load(&args.catalog)?;
    let mut shell = Shell::new(&config, catalog);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    shell.print(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if let Flow::Quit = shell.execute(&line, &mut out)? {
            break;
        }
        out.flush()?;
    }

    tracing::debug!(saves = shell.sheet.save_count(), "shell finished");
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("objlist: {e}");
            ExitCode::FAILURE
        }
    }
}
