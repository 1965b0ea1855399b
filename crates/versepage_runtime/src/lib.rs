//! Dataset loading, CLI, and REPL for Versepage.
//!
//! This crate provides:
//! - [`load_entries`] - Read the page-data dataset from CSV or JSON
//! - [`RuntimeConfig`] - Settings gathered from the environment and CLI
//! - [`Repl`] - Interactive lookup loop
//! - [`render`] - Human-readable and JSON rendering of lookup results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dataset;
pub mod editor;
pub mod logging;
pub mod render;
pub mod repl;

pub use config::RuntimeConfig;
pub use dataset::{load_entries, read_csv, read_json};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use render::Rendered;
pub use repl::{COMMANDS, Repl, Step};
