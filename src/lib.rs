//! # PocketForge
//!
//! **PocketForge** is a binding-pocket geometry toolkit. It consumes already-parsed structural record tables (atom-level rows with residue identifiers and Cartesian coordinates), resolves caller-chosen anchor residues to representative alpha-carbon positions, and aggregates them into named subpocket regions with centroids and a stable tabular export. Ambiguous selections fail loudly; missing data stays representable instead of raising.
//!
//! ## Features
//!
//! - **Anchor resolution with gap tolerance** – Exact CA lookup per residue with a documented neighbor-averaging fallback, so unresolved residues still yield usable anchor points.
//! - **Strict centroid semantics** – A subpocket center exists only when every anchor resolved; one missing anchor poisons the centroid rather than silently shifting it.
//! - **Stable export surface** – Anchor rows project to dotted column names (`subpocket.name`, `anchor_residue.id`, …) preserved through serde for downstream reporting and visualization.
//! - **Shared format schemas** – PDB and MOL2 column maps under `io` keep upstream adapters emitting interchangeable record tables.

mod model;

pub mod io;
pub mod pocket;

pub use model::record::{RecordTable, StructuralRecord};
pub use model::types::{Point, ResidueId};
pub use pocket::{AnchorResidue, AnchorResidueRow, Error, Subpocket, DEFAULT_COLOR};
