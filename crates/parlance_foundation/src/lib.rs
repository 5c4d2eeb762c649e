//! Core types shared by every Parlance layer.
//!
//! This crate provides:
//! - [`Value`] - The value produced by a successful parse
//! - [`Error`] - Rich error types with context for the outer layers
//! - English list helpers ([`comma_list_and`], [`comma_list_or`]) used to
//!   phrase diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod english;
pub mod error;
pub mod value;

pub use english::{comma_list, comma_list_and, comma_list_or};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use value::Value;
