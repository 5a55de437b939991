//! Column schemas shared by upstream format adapters.
//!
//! Readers that flatten PDB or MOL2 files into record tables map positional
//! fields through these tables so every adapter emits the same dotted column
//! names. The pocket model only consumes `residue.pdb_id`, `atom.name`, and
//! the three coordinate columns; everything else is carried for completeness.

/// Value type a column is parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int,
    Float,
    Str,
}

/// One positional column of a source format: token index, emitted name, type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub index: usize,
    pub name: &'static str,
    pub ty: ColumnType,
}

/// Columns every emitted record table carries.
pub const DEFAULT_COLUMNS: &[(&str, ColumnType)] = &[
    ("atom.id", ColumnType::Int),
    ("atom.name", ColumnType::Str),
    ("atom.x", ColumnType::Float),
    ("atom.y", ColumnType::Float),
    ("atom.z", ColumnType::Float),
    ("residue.pdb_id", ColumnType::Str),
    ("residue.name", ColumnType::Str),
];

/// Additional columns emitted by verbose adapters.
pub const VERBOSE_COLUMNS: &[(&str, ColumnType)] = &[
    ("atom.type", ColumnType::Str),
    ("residue.subst_id", ColumnType::Int),
    ("residue.subst_name", ColumnType::Str),
    ("record.name", ColumnType::Str),
    ("atom.symbol", ColumnType::Str),
    ("atom.charge", ColumnType::Float),
    ("atom.status_bit", ColumnType::Str),
    ("atom.occupancy", ColumnType::Float),
    ("atom.bfactor", ColumnType::Float),
    ("atom.alternative_model", ColumnType::Str),
    ("structure.chain", ColumnType::Str),
];

/// Tokenized PDB coordinate-line columns, by token index.
pub const PDB_COLUMNS: &[Column] = &[
    Column { index: 0, name: "record.name", ty: ColumnType::Str },
    Column { index: 1, name: "atom.id", ty: ColumnType::Int },
    Column { index: 3, name: "atom.name", ty: ColumnType::Str },
    Column { index: 4, name: "atom.alternative_model", ty: ColumnType::Str },
    Column { index: 5, name: "residue.name", ty: ColumnType::Str },
    Column { index: 7, name: "structure.chain", ty: ColumnType::Str },
    Column { index: 8, name: "residue.pdb_id", ty: ColumnType::Str },
    Column { index: 9, name: "residue.insertion", ty: ColumnType::Str },
    Column { index: 11, name: "atom.x", ty: ColumnType::Float },
    Column { index: 12, name: "atom.y", ty: ColumnType::Float },
    Column { index: 13, name: "atom.z", ty: ColumnType::Float },
    Column { index: 14, name: "atom.occupancy", ty: ColumnType::Float },
    Column { index: 15, name: "atom.bfactor", ty: ColumnType::Float },
    Column { index: 17, name: "segment.id", ty: ColumnType::Str },
    Column { index: 18, name: "atom.symbol", ty: ColumnType::Str },
    Column { index: 19, name: "atom.charge", ty: ColumnType::Float },
];

/// MOL2 `@<TRIPOS>ATOM` columns for ten-field records.
pub const MOL2_COLUMNS_10: &[Column] = &[
    Column { index: 0, name: "atom.id", ty: ColumnType::Int },
    Column { index: 1, name: "atom.name", ty: ColumnType::Str },
    Column { index: 2, name: "atom.x", ty: ColumnType::Float },
    Column { index: 3, name: "atom.y", ty: ColumnType::Float },
    Column { index: 4, name: "atom.z", ty: ColumnType::Float },
    Column { index: 5, name: "atom.type", ty: ColumnType::Str },
    Column { index: 6, name: "residue.subst_id", ty: ColumnType::Int },
    Column { index: 7, name: "residue.subst_name", ty: ColumnType::Str },
    Column { index: 8, name: "atom.charge", ty: ColumnType::Float },
    Column { index: 9, name: "atom.status_bit", ty: ColumnType::Str },
];

/// MOL2 `@<TRIPOS>ATOM` columns for nine-field records (no status bit).
pub const MOL2_COLUMNS_9: &[Column] = &[
    Column { index: 0, name: "atom.id", ty: ColumnType::Int },
    Column { index: 1, name: "atom.name", ty: ColumnType::Str },
    Column { index: 2, name: "atom.x", ty: ColumnType::Float },
    Column { index: 3, name: "atom.y", ty: ColumnType::Float },
    Column { index: 4, name: "atom.z", ty: ColumnType::Float },
    Column { index: 5, name: "atom.type", ty: ColumnType::Str },
    Column { index: 6, name: "residue.subst_id", ty: ColumnType::Int },
    Column { index: 7, name: "residue.subst_name", ty: ColumnType::Str },
    Column { index: 8, name: "atom.charge", ty: ColumnType::Float },
];

/// Looks up a column by its token index within a schema table.
pub fn column(columns: &[Column], index: usize) -> Option<&Column> {
    columns.iter().find(|c| c.index == index)
}
