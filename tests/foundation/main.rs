//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, NodeKind, Error, and persistent collections.

mod errors;
mod kinds;
