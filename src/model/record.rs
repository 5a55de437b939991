//! Atom-level rows of an already-parsed structural table.
//!
//! Format readers (PDB, MOL2, or anything else upstream) flatten their output
//! into [`StructuralRecord`] rows before the pocket model sees them. The table
//! preserves insertion order, which downstream selection rules rely on when
//! reporting which rows matched.

use super::types::{Point, ResidueId};
use smol_str::SmolStr;

/// One atom-level row of a structural record table.
///
/// Only the fields the pocket model consumes are kept: the residue the atom
/// belongs to, the atom label, and its Cartesian position in ångströms. Extra
/// columns a reader may carry (occupancy, b-factor, charge) stay upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralRecord {
    /// Identifier of the residue the atom belongs to, in canonical form.
    pub residue_id: ResidueId,
    /// Atom name as it appears in the source file (e.g., `CA`).
    pub atom_name: SmolStr,
    /// Cartesian coordinates in ångströms.
    pub pos: Point,
}

impl StructuralRecord {
    pub fn new(residue_id: impl Into<ResidueId>, atom_name: &str, pos: Point) -> Self {
        Self {
            residue_id: residue_id.into(),
            atom_name: SmolStr::new(atom_name),
            pos,
        }
    }
}

/// Ordered, read-only collection of structural records.
///
/// Row order is the order rows were appended in, mirroring the source table;
/// all selection logic iterates in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    records: Vec<StructuralRecord>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(records: Vec<StructuralRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: StructuralRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StructuralRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<StructuralRecord> for RecordTable {
    fn from_iter<I: IntoIterator<Item = StructuralRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_table_preserves_insertion_order() {
        let mut table = RecordTable::new();
        table.push(StructuralRecord::new(1, "N", Point::new(0.0, 0.0, 0.0)));
        table.push(StructuralRecord::new(1, "CA", Point::new(1.0, 0.0, 0.0)));
        table.push(StructuralRecord::new(2, "CA", Point::new(2.0, 0.0, 0.0)));

        let names: Vec<&str> = table.iter().map(|r| r.atom_name.as_str()).collect();
        assert_eq!(names, vec!["N", "CA", "CA"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn record_table_from_rows_matches_pushed_rows() {
        let rows = vec![
            StructuralRecord::new("10", "CA", Point::new(0.5, 1.5, 2.5)),
            StructuralRecord::new("11", "CB", Point::new(3.5, 4.5, 5.5)),
        ];
        let table = RecordTable::from_rows(rows.clone());
        let collected: RecordTable = rows.into_iter().collect();
        assert_eq!(table, collected);
    }
}
