//! Core data structures for structural record tables.
//!
//! This module defines the row/column representation of parsed atomic
//! coordinate data along with the identifier and geometry primitives shared
//! across the crate. The pocket model consumes these types read-only.

pub mod record;
pub mod types;
