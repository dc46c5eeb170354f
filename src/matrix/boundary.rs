// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Encoding of a filtration into a sparse pivot-column boundary matrix.
//!
//! Filtration entries are sorted ascending by birth time; the position of an
//! entry in this order is its index, which serves both as the column
//! identity handed to a reduction backend and as the key for reading birth
//! times back out of persistence pairs.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::filtrations::{FiltrationEntry, Simplex};

/// Error type for filtrations that cannot be encoded.
///
/// Encoding fails only when the filtration violates the monotonicity
/// invariant: some simplex is scheduled before one of its proper faces.
/// No partial boundary matrix is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiltrationError {
    /// A codimension-1 face of a simplex had not been assigned an index by
    /// the time the simplex was encoded. Simplex and face are reported in
    /// their `Debug` renderings.
    MissingFace {
        /// The simplex whose boundary was being assembled.
        simplex: String,
        /// The face absent from the filtration order so far.
        face: String,
    },
}

impl Display for FiltrationError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFace { simplex, face } => {
                write!(
                    formatter,
                    "not a proper filtration: {} added before its face {}",
                    simplex, face
                )
            }
        }
    }
}

impl Error for FiltrationError {}

/// One column of a sparse pivot-column boundary matrix.
///
/// `faces` holds the ascending indices of the codimension-1 faces of the
/// column's simplex; every face index is strictly smaller than the column's
/// own index. Columns of 0-dimensional simplices have no faces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryColumn {
    /// Dimension of the simplex this column represents.
    pub dimension: u32,
    /// Sorted indices of the simplex's codimension-1 faces.
    pub faces: Vec<usize>,
}

/// A boundary matrix over an ordered filtration.
///
/// Produced by [`BoundaryMatrix::encode`], this owns the filtration entries
/// in index order together with one [`BoundaryColumn`] per entry. The
/// columns are the exact artifact consumed by a
/// [`ReductionSolver`](crate::ReductionSolver); the entries provide the
/// lookup from pair indices back to simplices and birth times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryMatrix<K> {
    entries: Vec<FiltrationEntry<K>>,
    columns: Vec<BoundaryColumn>,
}

impl<K> BoundaryMatrix<K>
where
    K: Clone + Ord + Hash + Debug,
{
    /// Sort `entries` into filtration order and encode the boundary matrix.
    ///
    /// Entries are ordered ascending by birth time; ties are broken by
    /// simplex order (vertex count, then vertices), which places every face
    /// before its cofaces and makes the assigned indices deterministic.
    /// Encoding the same entries twice yields identical matrices.
    ///
    /// # Errors
    /// Returns [`FiltrationError::MissingFace`] if some simplex precedes one
    /// of its codimension-1 faces in the sorted order, i.e. the input is
    /// not a valid filtration.
    pub fn encode(mut entries: Vec<FiltrationEntry<K>>) -> Result<Self, FiltrationError> {
        entries.sort_by(|left, right| {
            left.birth
                .total_cmp(&right.birth)
                .then_with(|| left.simplex.cmp(&right.simplex))
        });

        let mut index_of: HashMap<Simplex<K>, usize> = HashMap::with_capacity(entries.len());
        let mut columns = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            index_of.insert(entry.simplex.clone(), index);

            if entry.simplex.vertex_count() == 1 {
                columns.push(BoundaryColumn {
                    dimension: 0,
                    faces: Vec::new(),
                });
                continue;
            }

            let mut faces = Vec::with_capacity(entry.simplex.vertex_count());
            for face in entry.simplex.faces() {
                match index_of.get(&face) {
                    Some(face_index) => faces.push(*face_index),
                    None => {
                        return Err(FiltrationError::MissingFace {
                            simplex: format!("{:?}", entry.simplex.vertices()),
                            face: format!("{:?}", face.vertices()),
                        })
                    }
                }
            }
            faces.sort_unstable();

            columns.push(BoundaryColumn {
                dimension: entry.simplex.dimension(),
                faces,
            });
        }

        debug_assert_eq!(entries.len(), columns.len());
        debug!(columns = columns.len(), "encoded boundary matrix");

        Ok(Self { entries, columns })
    }
}

impl<K> BoundaryMatrix<K> {
    /// The filtration entries in index order.
    pub fn entries(&self) -> &[FiltrationEntry<K>] {
        &self.entries
    }

    /// The boundary columns in index order.
    pub fn columns(&self) -> &[BoundaryColumn] {
        &self.columns
    }

    /// The number of columns (equivalently, filtration entries).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the matrix has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Consume the matrix, returning the ordered entries and columns.
    pub fn into_parts(self) -> (Vec<FiltrationEntry<K>>, Vec<BoundaryColumn>) {
        (self.entries, self.columns)
    }
}
