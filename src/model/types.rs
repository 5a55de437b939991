use nalgebra::Point3;
use smol_str::SmolStr;
use std::fmt;
use std::num::ParseIntError;

pub type Point = Point3<f64>;

/// Canonical residue identifier.
///
/// Callers may supply either integer or string identifiers; both normalize to
/// the decimal string form at construction. Re-interpreting the canonical form
/// as an integer (required by the neighbor fallback during anchor resolution)
/// is a separate, explicit, fallible step via [`ResidueId::to_int`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueId(SmolStr);

impl ResidueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the canonical identifier back into an integer.
    ///
    /// Only meaningful for sequentially numbered residues; identifiers with
    /// insertion codes or other non-numeric forms fail here.
    pub fn to_int(&self) -> Result<i64, ParseIntError> {
        self.0.parse::<i64>()
    }
}

impl From<i32> for ResidueId {
    fn from(id: i32) -> Self {
        Self(SmolStr::new(id.to_string()))
    }
}

impl From<i64> for ResidueId {
    fn from(id: i64) -> Self {
        Self(SmolStr::new(id.to_string()))
    }
}

impl From<&str> for ResidueId {
    fn from(id: &str) -> Self {
        Self(SmolStr::new(id))
    }
}

impl From<String> for ResidueId {
    fn from(id: String) -> Self {
        Self(SmolStr::new(id))
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
