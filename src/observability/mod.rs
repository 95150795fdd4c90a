//! Logging setup for the object list.
//!
//! The crate logs through `tracing` everywhere. This module installs the
//! subscriber: an `EnvFilter` plus a `fmt` layer writing either to stderr or
//! to a size-rotated log file.
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer usable as a `MakeWriter`

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
