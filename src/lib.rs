//! Versepage - Bible citation to page lookup
//!
//! This crate re-exports all layers of the Versepage system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: versepage_runtime    - Dataset loading, CLI, REPL, rendering
//! Layer 2: versepage_index      - Verse id to page index, lookup
//! Layer 1: versepage_parser     - Normalization, citation grammar, range expansion
//! Layer 0: versepage_foundation - Core types (BookId, VerseId, Error)
//! ```

pub use versepage_foundation as foundation;
pub use versepage_index as index;
pub use versepage_parser as parser;
pub use versepage_runtime as runtime;
