//! Integration tests for the versepage_index crate.
//!
//! Tests for building the verse index and looking citations up:
//! - Index construction and partial-failure ingestion
//! - Spillover handling
//! - Lookup classification and failures

mod build_tests;
mod lookup_tests;
