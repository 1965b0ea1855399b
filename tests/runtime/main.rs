//! Integration tests for the versepage_runtime crate.
//!
//! Tests for the path from a dataset on disk to rendered output:
//! - Dataset loading (CSV and JSON)
//! - Configuration overrides
//! - Rendering and REPL evaluation

mod dataset_tests;
mod repl_tests;
