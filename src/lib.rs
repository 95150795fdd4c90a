//! objlist: a filterable, selectable, reorderable object list controller.
//!
//! objlist provides the logic behind the object lists of a data-editing tool,
//! independent of any GUI toolkit:
//! - Case-insensitive literal search over object names
//! - Single selection tracked through weak handles to externally owned objects
//! - Save-on-deselect coordination with an adjacent property editor
//! - Move-up/move-down requests delegated to the owner of the objects
//! - An identifier to display text mapping of the full list

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Demo shell (main.rs)                               │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Selection transitions                            │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Observability │
//! │ (ui/)         │   │ (storage/)    │   │ (observ…/)    │
//! │ - View model  │   │ - JSON catalog│   │ - tracing     │
//! │ - Text render │   │ - Prop. sheet │   │ - Log file    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Weak handles, describer capability (domain/)     │
//! │  - Error types (domain/error)                       │
//! │  - Data directory (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: List state machine with event/action model
//! - [`domain`]: Object handles, identities, errors
//! - [`infrastructure`]: Platform paths
//! - [`storage`]: Demo object owner and property editor backed by JSON
//! - [`ui`]: View model and plain-text rendering
//! - [`observability`]: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use objlist::{handle_event, Action, Config, Event, ListId, ObjectDescriber};
//! use std::rc::Rc;
//!
//! struct Npcs;
//! impl ObjectDescriber<(u32, String)> for Npcs {
//!     fn object_id(&self, obj: &(u32, String)) -> String { obj.0.to_string() }
//!     fn object_name(&self, obj: &(u32, String)) -> String { obj.1.clone() }
//! }
//!
//! let config = Config { show_move_controls: true, ..Default::default() };
//! let mut state = objlist::initialize(&config, ListId(1), Npcs);
//!
//! let objs = vec![Rc::new((1, "Alpha".to_string())), Rc::new((2, "beta".to_string()))];
//! handle_event(&mut state, &Event::SetObjectList(objs.clone()));
//! handle_event(&mut state, &Event::ClickRow(0));
//!
//! let (_, actions) = handle_event(&mut state, &Event::MoveDown);
//! assert!(matches!(actions.as_slice(), [Action::ObjectMoved { .. }]));
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{
    dispatch_actions, handle_event, Action, Event, ListOwner, MoveControls, MoveDirection,
    ObjectListState, PropertyEditor, SelectionState,
};
pub use domain::{ListId, ObjectDescriber, ObjectHandle, ObjectListError, Result, WindowId};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Default number of list rows the text renderer shows.
const DEFAULT_VIEW_ROWS: usize = 20;

/// Levels accepted for `trace_level`.
const TRACE_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// List configuration.
///
/// Can be built from a string map (as handed over by a host application) or
/// read from a TOML file.
///
/// # Example
///
/// ```toml
/// read_only = false
/// show_move_controls = true
/// initial_filter = "gate"
/// trace_level = "debug"
/// log_file = "~/.local/share/objlist/objlist.log"
/// view_rows = 15
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start in read-only mode: selection changes never save. Default: `false`
    pub read_only: bool,

    /// Show the move-up/move-down buttons. Default: `false`
    pub show_move_controls: bool,

    /// Search term applied before the first list is set.
    pub initial_filter: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Logs go to stderr when unset.
    ///
    /// A leading `~` is expanded to the home directory.
    pub log_file: Option<String>,

    /// Rows shown by the text renderer. Default: 20
    pub view_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_only: false,
            show_move_controls: false,
            initial_filter: None,
            trace_level: None,
            log_file: None,
            view_rows: DEFAULT_VIEW_ROWS,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `read_only`, `show_move_controls`: `true`/`false`/`yes`/`no`/`1`/`0`
    ///   (falls back to `false` on anything else)
    /// - `view_rows`: `usize` (falls back to 20 on parse error or 0)
    /// - `initial_filter`, `trace_level`, `log_file`: taken verbatim
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use objlist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("read_only".to_string(), "yes".to_string());
    /// map.insert("view_rows".to_string(), "5".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(config.read_only);
    /// assert_eq!(config.view_rows, 5);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let flag = |key: &str| {
            config
                .get(key)
                .map(String::as_str)
                .and_then(parse_flag)
                .unwrap_or(false)
        };

        let view_rows = config
            .get("view_rows")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|rows| *rows > 0)
            .unwrap_or(DEFAULT_VIEW_ROWS);

        Self {
            read_only: flag("read_only"),
            show_move_controls: flag("show_move_controls"),
            initial_filter: config.get("initial_filter").cloned(),
            trace_level: config.get("trace_level").cloned(),
            log_file: config.get("log_file").cloned(),
            view_rows,
        }
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML for this
    /// structure, or names an unknown trace level.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration file");

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot check.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectListError::Config`] for an unknown trace level or zero
    /// view rows.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.trace_level {
            if !TRACE_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ObjectListError::Config(format!("unknown trace_level: {level}")));
            }
        }
        if self.view_rows == 0 {
            return Err(ObjectListError::Config("view_rows must be positive".to_string()));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Creates a list configured from `config`.
///
/// The list starts empty; the owner fills it with `set_object_list`.
pub fn initialize<T, D>(config: &Config, id: ListId, describer: D) -> ObjectListState<T, D>
where
    T: ?Sized,
    D: ObjectDescriber<T>,
{
    tracing::debug!(list = %id, read_only = config.read_only, "initializing object list");

    let mut state = ObjectListState::new(id, describer);
    state.set_read_only(config.read_only);
    state.toggle_move_controls(config.show_move_controls);
    if let Some(term) = &config.initial_filter {
        // Empty list: applying the term cannot change a selection.
        let _ = state.set_filter(term);
    }
    state
}
