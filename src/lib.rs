//! Parlance - Grammar-driven interpreter for abbreviated game commands
//!
//! This crate re-exports all layers of the Parlance system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: parlance_runtime    - Grammar files, sessions, REPL, CLI
//! Layer 1: parlance_grammar    - Grammar nodes, parse outcomes, failure ranking
//! Layer 0: parlance_foundation - Core types (Value, Error, English lists)
//! ```

pub use parlance_foundation as foundation;
pub use parlance_grammar as grammar;
pub use parlance_runtime as runtime;
