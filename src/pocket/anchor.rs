//! Resolution of a single residue identifier to a representative 3D point.
//!
//! An anchor residue stands in for one residue's location when characterizing
//! pocket geometry, conventionally through its alpha-carbon (CA) position.
//! Experimental structures routinely have gaps at the requested position
//! (missing residues, unresolved density), so resolution falls back to the
//! flanking residues and averages their CA positions rather than discarding
//! the anchor entirely.

use crate::model::record::{RecordTable, StructuralRecord};
use crate::model::types::{Point, ResidueId};
use crate::pocket::error::Error;
use nalgebra::Vector3;
use smol_str::SmolStr;

const CA_ATOM_NAME: &str = "CA";

/// A resolved anchor residue: one requested identifier mapped to a center.
///
/// Constructed once via [`AnchorResidue::resolve`] and immutable afterwards.
/// An absent `center` is a normal outcome (the residue and both neighbors were
/// missing from the table), not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorResidue {
    /// Canonical form of the originally requested residue identifier.
    pub id: ResidueId,
    /// Identifiers of the neighboring residues actually used when the
    /// requested one was absent, in table order. `None` when the primary
    /// lookup succeeded or no neighbor was found either.
    pub id_alternative: Option<Vec<ResidueId>>,
    /// Caller-supplied display label.
    pub label: Option<String>,
    /// Display color tag; opaque to the pocket model.
    pub color: SmolStr,
    /// Representative coordinates, or `None` if nothing usable was found.
    pub center: Option<Point>,
}

impl AnchorResidue {
    /// Resolves a residue identifier against a structural record table.
    ///
    /// The primary lookup selects the CA row of the requested residue. When
    /// that lookup comes back empty, the CA rows of residues `id - 1` and
    /// `id + 1` are selected instead and their mean position becomes the
    /// center, with `id_alternative` recording which neighbors were used.
    ///
    /// # Arguments
    ///
    /// * `records` - Structural record table, iterated read-only.
    /// * `residue_id` - Requested identifier; integers normalize to their
    ///   decimal string form.
    /// * `color` - Display color tag, passed through unvalidated.
    /// * `label` - Optional display label, passed through unvalidated.
    ///
    /// # Errors
    ///
    /// * [`Error::AmbiguousSelection`] when the exact lookup matches two or
    ///   more CA rows, or the neighbor lookup matches three or more. Both
    ///   indicate malformed input data and are never silently resolved.
    /// * [`Error::NonNumericResidueId`] when the fallback is reached but the
    ///   canonical identifier cannot be parsed as an integer.
    pub fn resolve(
        records: &RecordTable,
        residue_id: impl Into<ResidueId>,
        color: &str,
        label: Option<&str>,
    ) -> Result<Self, Error> {
        let id = residue_id.into();

        let mut id_alternative = None;
        let center = match Self::ca_row(records, &id)? {
            Some(pos) => Some(pos),
            None => match Self::ca_rows_before_after(records, &id)? {
                Some((neighbor_ids, pos)) => {
                    id_alternative = Some(neighbor_ids);
                    Some(pos)
                }
                None => None,
            },
        };

        Ok(Self {
            id,
            id_alternative,
            label: label.map(str::to_string),
            color: SmolStr::new(color),
            center,
        })
    }

    /// Exact CA lookup: zero matches defer to the fallback, one match
    /// resolves, two or more are ambiguous.
    fn ca_row(records: &RecordTable, id: &ResidueId) -> Result<Option<Point>, Error> {
        let matches: Vec<&StructuralRecord> = records
            .iter()
            .filter(|r| r.atom_name == CA_ATOM_NAME && r.residue_id == *id)
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches[0].pos)),
            found => Err(Error::ambiguous_selection(id.as_str(), found, 1)),
        }
    }

    /// Neighbor fallback over `{id - 1, id + 1}`. More than two matches is
    /// impossible for well-formed single-chain data and fails hard.
    fn ca_rows_before_after(
        records: &RecordTable,
        id: &ResidueId,
    ) -> Result<Option<(Vec<ResidueId>, Point)>, Error> {
        let numeric = id
            .to_int()
            .map_err(|_| Error::non_numeric_residue_id(id.as_str()))?;
        let before = ResidueId::from(numeric - 1);
        let after = ResidueId::from(numeric + 1);

        let matches: Vec<&StructuralRecord> = records
            .iter()
            .filter(|r| {
                r.atom_name == CA_ATOM_NAME && (r.residue_id == before || r.residue_id == after)
            })
            .collect();

        match matches.len() {
            0 => Ok(None),
            found @ (1 | 2) => {
                let neighbor_ids = matches.iter().map(|r| r.residue_id.clone()).collect();
                let mut sum = Vector3::zeros();
                for record in &matches {
                    sum += record.pos.coords;
                }
                Ok(Some((neighbor_ids, Point::from(sum / found as f64))))
            }
            found => Err(Error::ambiguous_selection(id.as_str(), found, 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str, [f64; 3])]) -> RecordTable {
        rows.iter()
            .map(|(id, atom, pos)| {
                StructuralRecord::new(*id, atom, Point::new(pos[0], pos[1], pos[2]))
            })
            .collect()
    }

    #[test]
    fn resolve_uses_exact_ca_match() {
        let records = table(&[
            ("12", "N", [9.0, 9.0, 9.0]),
            ("12", "CA", [1.0, 2.0, 3.0]),
            ("13", "CA", [4.0, 5.0, 6.0]),
        ]);

        let anchor = AnchorResidue::resolve(&records, 12, "blue", Some("hinge")).unwrap();
        assert_eq!(anchor.id, ResidueId::from("12"));
        assert_eq!(anchor.center, Some(Point::new(1.0, 2.0, 3.0)));
        assert_eq!(anchor.id_alternative, None);
        assert_eq!(anchor.label.as_deref(), Some("hinge"));
        assert_eq!(anchor.color, "blue");
    }

    #[test]
    fn resolve_ignores_non_ca_rows_of_requested_residue() {
        let records = table(&[("12", "CB", [9.0, 9.0, 9.0]), ("13", "CA", [4.0, 5.0, 6.0])]);

        let anchor = AnchorResidue::resolve(&records, 12, "blue", None).unwrap();
        assert_eq!(anchor.id_alternative, Some(vec![ResidueId::from("13")]));
        assert_eq!(anchor.center, Some(Point::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn resolve_falls_back_to_single_neighbor() {
        let records = table(&[("11", "CA", [2.0, 4.0, 6.0])]);

        let anchor = AnchorResidue::resolve(&records, 12, "blue", None).unwrap();
        assert_eq!(anchor.center, Some(Point::new(2.0, 4.0, 6.0)));
        assert_eq!(anchor.id_alternative, Some(vec![ResidueId::from("11")]));
    }

    #[test]
    fn resolve_falls_back_to_mean_of_both_neighbors() {
        let records = table(&[
            ("11", "CA", [0.0, 0.0, 0.0]),
            ("13", "CA", [2.0, 4.0, 6.0]),
        ]);

        let anchor = AnchorResidue::resolve(&records, 12, "blue", None).unwrap();
        assert_eq!(anchor.center, Some(Point::new(1.0, 2.0, 3.0)));
        assert_eq!(
            anchor.id_alternative,
            Some(vec![ResidueId::from("11"), ResidueId::from("13")])
        );
    }

    #[test]
    fn resolve_reports_neighbors_in_table_order() {
        let records = table(&[
            ("13", "CA", [2.0, 0.0, 0.0]),
            ("11", "CA", [0.0, 0.0, 0.0]),
        ]);

        let anchor = AnchorResidue::resolve(&records, 12, "blue", None).unwrap();
        assert_eq!(
            anchor.id_alternative,
            Some(vec![ResidueId::from("13"), ResidueId::from("11")])
        );
    }

    #[test]
    fn resolve_with_no_match_and_no_neighbors_yields_absent_center() {
        let records = table(&[("50", "CA", [1.0, 1.0, 1.0])]);

        let anchor = AnchorResidue::resolve(&records, 12, "blue", None).unwrap();
        assert_eq!(anchor.center, None);
        assert_eq!(anchor.id_alternative, None);
    }

    #[test]
    fn resolve_fails_on_duplicate_exact_matches() {
        let records = table(&[
            ("12", "CA", [1.0, 0.0, 0.0]),
            ("12", "CA", [2.0, 0.0, 0.0]),
        ]);

        let err = AnchorResidue::resolve(&records, 12, "blue", None).unwrap_err();
        match err {
            Error::AmbiguousSelection {
                found, max_allowed, ..
            } => {
                assert_eq!(found, 2);
                assert_eq!(max_allowed, 1);
            }
            other => panic!("expected AmbiguousSelection, got {other:?}"),
        }
    }

    #[test]
    fn resolve_fails_on_more_than_two_neighbor_matches() {
        // Duplicated chains can yield the same neighbor id twice.
        let records = table(&[
            ("11", "CA", [0.0, 0.0, 0.0]),
            ("13", "CA", [1.0, 0.0, 0.0]),
            ("11", "CA", [2.0, 0.0, 0.0]),
        ]);

        let err = AnchorResidue::resolve(&records, 12, "blue", None).unwrap_err();
        match err {
            Error::AmbiguousSelection {
                found, max_allowed, ..
            } => {
                assert_eq!(found, 3);
                assert_eq!(max_allowed, 2);
            }
            other => panic!("expected AmbiguousSelection, got {other:?}"),
        }
    }

    #[test]
    fn resolve_fails_when_fallback_needs_arithmetic_on_non_numeric_id() {
        let records = table(&[("11", "CA", [0.0, 0.0, 0.0])]);

        let err = AnchorResidue::resolve(&records, "12A", "blue", None).unwrap_err();
        assert!(matches!(err, Error::NonNumericResidueId { .. }));
    }

    #[test]
    fn resolve_accepts_non_numeric_id_with_exact_match() {
        // The integer re-parse only happens on the fallback path.
        let records = table(&[("12A", "CA", [1.0, 2.0, 3.0])]);

        let anchor = AnchorResidue::resolve(&records, "12A", "blue", None).unwrap();
        assert_eq!(anchor.center, Some(Point::new(1.0, 2.0, 3.0)));
        assert_eq!(anchor.id_alternative, None);
    }
}
