//! Format-facing schema definitions.
//!
//! Actual file parsing lives upstream; this module only pins down the column
//! layout adapters must emit so record tables stay interchangeable.

pub mod schema;

pub use schema::{Column, ColumnType};
