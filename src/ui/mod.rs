//! Toolkit-agnostic presentation layer.
//!
//! The list state never draws anything itself. It computes a
//! [`ListViewModel`] which a toolkit binding, or the plain-text renderer
//! here, turns into pixels or lines.
//!
//! ```text
//! ObjectListState → compute_viewmodel → ListViewModel → render_to_string → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable list state
//! - [`renderer`]: Plain-text rendering

pub mod renderer;
pub mod viewmodel;

pub use renderer::render_to_string;
pub use viewmodel::{
    EmptyState, HeaderInfo, ListViewModel, MoveControlsInfo, RowItem, SearchBarInfo,
};
