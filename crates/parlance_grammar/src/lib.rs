//! Grammar engine for short, abbreviated game commands.
//!
//! This crate turns typed input like "mv 3 nw" or "buy rai" into a
//! [`Value`](parlance_foundation::Value), guided by a declarative grammar
//! built from composable nodes.
//!
//! # Architecture
//!
//! ```text
//! "buy 2 rai"
//!      │
//!      ▼
//! ┌──────────────────────────────┐
//! │ Spec::Sequence               │  threads remaining input step to step
//! │  ├─ Literal("buy")           │  → "buy"       remaining " 2 rai"
//! │  ├─ after_space(Integer)     │  → [" ", 2]    remaining " rai"
//! │  └─ after_space(Enumerated)  │  → [" ", "railroad"]
//! └──────────────────────────────┘
//!      │
//!      ▼
//! Output { value, consumed, remaining }   or   ParseFailure { message, expected, offset }
//! ```
//!
//! Failures carry the offset at which they happened so that an
//! [`Alternation`] can report the branch that got furthest.
//!
//! # Modules
//!
//! - [`spec`] - The grammar tree and the [`Parse`] trait
//! - [`output`] - [`Output`] and [`ParseFailure`]
//! - [`integer`], [`literal`], [`enumerated`], [`whitespace`], [`player`] - Primitives
//! - [`alternation`], [`sequence`], [`repetition`], [`optional`], [`documented`] - Combinators

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alternation;
pub mod documented;
pub mod enumerated;
pub mod integer;
pub mod literal;
pub mod optional;
pub mod output;
pub mod player;
pub mod repetition;
pub mod sequence;
pub mod spec;
pub mod whitespace;

mod text;

// Re-export main types for convenience
pub use alternation::Alternation;
pub use documented::{DocEntry, Documented};
pub use enumerated::Enumerated;
pub use integer::Integer;
pub use literal::Literal;
pub use optional::Optional;
pub use output::{Output, ParseFailure, ParseResult};
pub use player::PlayerName;
pub use repetition::Repetition;
pub use sequence::Sequence;
pub use spec::{Parse, Spec};
pub use whitespace::Whitespace;
