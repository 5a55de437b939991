//! Aggregation of anchor residues into a named, colored pocket region.

use crate::model::record::RecordTable;
use crate::model::types::{Point, ResidueId};
use crate::pocket::anchor::AnchorResidue;
use crate::pocket::error::Error;
use crate::pocket::utils::format_residue_ids_and_labels;
use nalgebra::Vector3;
use serde::Serialize;
use smol_str::SmolStr;

/// Color assigned to subpockets and anchors when the caller does not pick one.
pub const DEFAULT_COLOR: &str = "blue";

/// A named sub-region of a binding pocket, centered on the centroid of its
/// anchor residues.
///
/// The center is computed once at construction. It is absent exactly when at
/// least one anchor residue failed to resolve: a pocket center is only
/// meaningful if every anchor contributed a point, so one missing anchor
/// poisons the whole centroid rather than silently shifting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Subpocket {
    name: String,
    color: SmolStr,
    center: Option<Point>,
    anchor_residues: Vec<AnchorResidue>,
}

/// One row of the tabular anchor residue projection.
///
/// Serialized field names follow the dotted column convention consumed by
/// downstream visualization and reporting tools; order and naming are part of
/// the export contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorResidueRow {
    #[serde(rename = "subpocket.name")]
    pub subpocket_name: String,
    #[serde(rename = "subpocket.color")]
    pub subpocket_color: String,
    #[serde(rename = "anchor_residue.id")]
    pub id: String,
    #[serde(rename = "anchor_residue.id_alternative")]
    pub id_alternative: Option<Vec<String>>,
    #[serde(rename = "anchor_residue.label")]
    pub label: Option<String>,
    #[serde(rename = "anchor_residue.center")]
    pub center: Option<[f64; 3]>,
}

impl Subpocket {
    /// Builds a subpocket from a structural record table.
    ///
    /// Resolves one [`AnchorResidue`] per requested identifier, then delegates
    /// to [`Subpocket::from_anchor_residues`]. Labels default to the
    /// stringified ids when not supplied.
    ///
    /// # Arguments
    ///
    /// * `records` - Structural record table, iterated read-only.
    /// * `name` - Subpocket display name.
    /// * `anchor_residue_ids` - Requested anchor residue identifiers.
    /// * `color` - Display color tag; defaults to [`DEFAULT_COLOR`].
    /// * `anchor_residue_labels` - Optional display labels, parallel to the
    ///   ids.
    ///
    /// # Errors
    ///
    /// [`Error::LabelCountMismatch`] when ids and labels differ in length, and
    /// any error [`AnchorResidue::resolve`] reports for an individual anchor.
    pub fn from_records<I>(
        records: &RecordTable,
        name: &str,
        anchor_residue_ids: I,
        color: Option<&str>,
        anchor_residue_labels: Option<Vec<String>>,
    ) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<ResidueId>,
    {
        let color = color.unwrap_or(DEFAULT_COLOR);
        let (ids, labels) = format_residue_ids_and_labels(anchor_residue_ids, anchor_residue_labels)?;

        let mut anchor_residues = Vec::with_capacity(ids.len());
        for (id, label) in ids.into_iter().zip(labels) {
            anchor_residues.push(AnchorResidue::resolve(records, id, color, Some(&label))?);
        }

        Ok(Self::from_anchor_residues(anchor_residues, name, Some(color)))
    }

    /// Builds a subpocket from pre-resolved anchor residues.
    ///
    /// The sequence is stored as given, without re-resolution; only the
    /// centroid is computed here.
    pub fn from_anchor_residues(
        anchor_residues: Vec<AnchorResidue>,
        name: &str,
        color: Option<&str>,
    ) -> Self {
        let center = Self::centroid(&anchor_residues);
        Self {
            name: name.to_string(),
            color: SmolStr::new(color.unwrap_or(DEFAULT_COLOR)),
            center,
            anchor_residues,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Centroid of all anchor residue centers, or `None` if any anchor failed
    /// to resolve.
    pub fn center(&self) -> Option<Point> {
        self.center
    }

    pub fn iter_anchor_residues(&self) -> std::slice::Iter<'_, AnchorResidue> {
        self.anchor_residues.iter()
    }

    /// Tabular projection of the anchor residues, one row per anchor in
    /// construction order.
    ///
    /// Recomputed from the owned anchors on every call; anchors are immutable
    /// after construction, so nothing is cached.
    pub fn anchor_residues(&self) -> Vec<AnchorResidueRow> {
        self.anchor_residues
            .iter()
            .map(|residue| AnchorResidueRow {
                subpocket_name: self.name.clone(),
                subpocket_color: self.color.to_string(),
                id: residue.id.to_string(),
                id_alternative: residue
                    .id_alternative
                    .as_ref()
                    .map(|ids| ids.iter().map(ToString::to_string).collect()),
                label: residue.label.clone(),
                center: residue.center.map(|p| [p.x, p.y, p.z]),
            })
            .collect()
    }

    fn centroid(anchor_residues: &[AnchorResidue]) -> Option<Point> {
        if anchor_residues.is_empty() {
            return None;
        }

        let mut sum = Vector3::zeros();
        for residue in anchor_residues {
            sum += residue.center?.coords;
        }
        Some(Point::from(sum / anchor_residues.len() as f64))
    }
}
