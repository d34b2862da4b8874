//! Integration tests for Layer 2: Schema
//!
//! Tests for building the live type registry and invoking attached behavior.

mod defaults;
mod resolve;
