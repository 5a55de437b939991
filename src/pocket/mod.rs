//! Subpocket geometry model: anchor residues and their aggregation.
//!
//! This module carries the algorithmic core of the crate. [`AnchorResidue`]
//! resolves one residue identifier to a representative CA position, with a
//! neighbor-averaging fallback for gapped structures; [`Subpocket`] aggregates
//! an ordered set of anchors into a named, colored region with a centroid and
//! a tabular export view. All computation is a pure function of the input
//! record table; nothing is mutated after construction.

mod anchor;
mod error;
mod subpocket;
mod utils;

pub use anchor::AnchorResidue;
pub use error::Error;
pub use subpocket::{AnchorResidueRow, Subpocket, DEFAULT_COLOR};
pub use utils::format_residue_ids_and_labels;
