//! Application layer: the list controller.
//!
//! This module sits between the owning window (or a toolkit binding) and the
//! domain types. It implements the event-driven flow that keeps the search
//! filter, the view selection and the property editor in step.
//!
//! # Architecture
//!
//! ```text
//! View/Owner → Events → handle_event → State Mutations → Actions → dispatch_actions
//!                                                              ↓
//!                                               PropertyEditor / ListOwner
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the list
//! - [`dispatch`]: Collaborator traits and action execution
//! - [`filter`]: Search term projection from visible to underlying rows
//! - [`handler`]: Event processing
//! - [`modes`]: Selection state machine and move control types
//! - [`state`]: List state, selection transitions, view model computation
//! - [`store`]: Ordered backing sequence of weak object handles

pub mod actions;
pub mod dispatch;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use actions::Action;
pub use dispatch::{dispatch_actions, ListOwner, PropertyEditor};
pub use filter::FilterIndex;
pub use handler::{handle_event, Event};
pub use modes::{MoveControls, MoveDirection, SelectionState};
pub use state::ObjectListState;
pub use store::ObjectListStore;
