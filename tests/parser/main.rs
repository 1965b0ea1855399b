//! Integration tests for the versepage_parser crate.
//!
//! Tests for the citation pipeline:
//! - Abbreviation normalization
//! - Grammar scanning
//! - Range expansion

mod expander_tests;
mod normalizer_tests;
