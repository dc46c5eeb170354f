// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::matrix::BoundaryColumn;
use crate::persistence::PersistencePair;

/// The interface to a boundary-matrix reduction backend.
///
/// A reduction backend consumes a boundary matrix in sparse pivot-column
/// form and returns the persistence pairs of the underlying filtration as
/// (birth-index, death-index) pairs of column indices. Each index may
/// appear in at most one pair; unpaired indices correspond to features
/// that never die.
///
/// The reduction itself is treated as an external collaborator: this crate
/// ships the plain [`StandardReduction`](crate::StandardReduction) backend,
/// and alternative implementations (optimized or native solvers) can be
/// substituted without touching the encoder or the interpreter. The call is
/// blocking; no cancellation contract is defined here.
pub trait ReductionSolver {
    /// Reduce `columns` and return the persistence pairs.
    fn reduce(&self, columns: &[BoundaryColumn]) -> Vec<PersistencePair>;
}
