// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `covhom` crate computes persistent homology of filtered simplicial
//! complexes built from covers of a point set. Birth times are derived from
//! the Jaccard distance between cover elements, the filtration is encoded as
//! a sparse pivot-column boundary matrix, and the index pairs returned by a
//! reduction backend are read off into per-dimension persistence diagrams.
//!
//! The reduction step is abstracted behind the [`ReductionSolver`] trait so
//! that external backends can be substituted; [`StandardReduction`] provides
//! a plain reference implementation.

#![warn(missing_docs)]

pub use crate::filtrations::{
    jaccard_distance, CoverError, CoverFiltration, FiltrationBuilder, FiltrationEntry, Simplex,
};
pub use crate::matrix::{BoundaryColumn, BoundaryMatrix, FiltrationError};
pub use crate::persistence::{
    compute_diagrams, read_persistence, Diagrams, PairingError, PersistenceError, PersistencePair,
    ReductionSolver, StandardReduction,
};

mod filtrations;
mod matrix;
mod persistence;
