// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use diagram::{read_persistence, Diagrams, PairingError, PersistencePair};
pub use reduction::StandardReduction;
pub use traits::ReductionSolver;

mod diagram;
mod reduction;
mod traits;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use tracing::debug;

use crate::filtrations::FiltrationEntry;
use crate::matrix::{BoundaryMatrix, FiltrationError};

/// Error type for the full filtration-to-diagrams pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The input filtration could not be encoded.
    Filtration(FiltrationError),
    /// The solver's pairing failed consistency validation.
    Pairing(PairingError),
}

impl Display for PersistenceError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filtration(error) => write!(formatter, "{}", error),
            Self::Pairing(error) => write!(formatter, "{}", error),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Filtration(error) => Some(error),
            Self::Pairing(error) => Some(error),
        }
    }
}

impl From<FiltrationError> for PersistenceError {
    fn from(error: FiltrationError) -> Self {
        Self::Filtration(error)
    }
}

impl From<PairingError> for PersistenceError {
    fn from(error: PairingError) -> Self {
        Self::Pairing(error)
    }
}

/// Compute persistence diagrams for a filtration using the given reduction
/// backend.
///
/// The entries are encoded into an ordered boundary matrix, reduced by
/// `solver`, and the resulting index pairs are read off into per-dimension
/// diagrams. With `hide_infinite` set, features that never die are
/// suppressed; otherwise each unpaired simplex contributes a
/// (birth, `f64::INFINITY`) interval.
///
/// # Errors
/// Returns [`PersistenceError::Filtration`] if the entries violate the
/// filtration-order invariant, or [`PersistenceError::Pairing`] if the
/// solver's output is inconsistent with the matrix.
///
/// # Examples
///
/// ```rust
/// use covhom::{compute_diagrams, FiltrationEntry, Simplex, StandardReduction};
///
/// let entries = vec![
///     FiltrationEntry::new(Simplex::vertex(0u32), 0.0),
///     FiltrationEntry::new(Simplex::vertex(1u32), 0.0),
///     FiltrationEntry::new(Simplex::new(vec![0u32, 1]), 0.5),
/// ];
/// let diagrams = compute_diagrams(entries, &StandardReduction, true).unwrap();
///
/// // The younger component dies when the edge joins the two vertices.
/// assert_eq!(diagrams.intervals(0), &[(0.0, 0.5)]);
/// ```
pub fn compute_diagrams<K, S>(
    entries: Vec<FiltrationEntry<K>>,
    solver: &S,
    hide_infinite: bool,
) -> Result<Diagrams, PersistenceError>
where
    K: Clone + Ord + Hash + Debug,
    S: ReductionSolver,
{
    let unsorted = entries.clone();
    let matrix = BoundaryMatrix::encode(entries)?;

    debug!(columns = matrix.len(), "reducing boundary matrix");
    let pairs = solver.reduce(matrix.columns());
    debug!(pairs = pairs.len(), "reduction finished");

    let diagrams = read_persistence(&pairs, matrix.entries(), &unsorted, hide_infinite)?;
    Ok(diagrams)
}
