use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "ambiguous CA selection for residue '{residue_id}': {found} atoms found, at most {max_allowed} allowed"
    )]
    AmbiguousSelection {
        residue_id: String,
        found: usize,
        max_allowed: usize,
    },

    #[error("anchor residue ids and labels differ in length: {ids} ids, {labels} labels")]
    LabelCountMismatch { ids: usize, labels: usize },

    #[error("residue id '{id}' is not numeric; neighbor lookup requires an integer identifier")]
    NonNumericResidueId { id: String },
}

impl Error {
    pub fn ambiguous_selection(
        residue_id: impl Into<String>,
        found: usize,
        max_allowed: usize,
    ) -> Self {
        Self::AmbiguousSelection {
            residue_id: residue_id.into(),
            found,
            max_allowed,
        }
    }

    pub fn non_numeric_residue_id(id: impl Into<String>) -> Self {
        Self::NonNumericResidueId { id: id.into() }
    }
}
