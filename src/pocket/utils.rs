//! Shared normalization helpers for pocket construction inputs.

use crate::model::types::ResidueId;
use crate::pocket::error::Error;

/// Normalizes parallel anchor residue id and label sequences.
///
/// Identifiers are canonicalized to their string form. When `labels` is given
/// it must match `ids` in length; when absent, labels default to the
/// stringified ids so every anchor carries a usable display label.
///
/// # Errors
///
/// [`Error::LabelCountMismatch`] when both sequences are given with different
/// lengths.
pub fn format_residue_ids_and_labels<I>(
    ids: I,
    labels: Option<Vec<String>>,
) -> Result<(Vec<ResidueId>, Vec<String>), Error>
where
    I: IntoIterator,
    I::Item: Into<ResidueId>,
{
    let ids: Vec<ResidueId> = ids.into_iter().map(Into::into).collect();

    let labels = match labels {
        Some(labels) => {
            if labels.len() != ids.len() {
                return Err(Error::LabelCountMismatch {
                    ids: ids.len(),
                    labels: labels.len(),
                });
            }
            labels
        }
        None => ids.iter().map(ToString::to_string).collect(),
    };

    Ok((ids, labels))
}
