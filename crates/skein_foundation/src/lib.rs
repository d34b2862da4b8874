//! Core values, node kinds, persistent collections, and errors for Skein.
//!
//! This crate provides:
//! - [`Value`] - Runtime values passed to and returned from resolvers
//! - [`NodeKind`] - The closed set of schema type-node kinds
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`PList`], [`PMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod kind;
pub mod value;

pub use collections::{PList, PMap};
pub use error::{Error, ErrorContext, ErrorKind};
pub use kind::NodeKind;
pub use value::Value;

/// Result type used throughout Skein.
pub type Result<T> = std::result::Result<T, Error>;
