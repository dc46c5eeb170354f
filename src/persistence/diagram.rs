// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persistence diagrams and the readout of solver pairings into them.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::filtrations::FiltrationEntry;

/// A (birth-index, death-index) pair of boundary matrix columns, as
/// returned by a [`ReductionSolver`](crate::ReductionSolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistencePair {
    /// Index of the column whose simplex gives birth to the feature.
    pub birth: usize,
    /// Index of the column whose simplex kills the feature.
    pub death: usize,
}

/// Error type for solver pairings that are inconsistent with the boundary
/// matrix they were computed from.
///
/// Any variant indicates a bug in the solver integration or a malformed
/// matrix, not invalid user input. Interpretation aborts without emitting
/// partial diagrams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// A column index appears in more than one pair.
    ReusedIndex {
        /// The index used twice.
        index: usize,
    },
    /// A pair references a column beyond the entry list.
    IndexOutOfRange {
        /// The out-of-range index.
        index: usize,
    },
    /// The death simplex of a pair is not exactly one dimension above its
    /// birth simplex.
    DimensionMismatch {
        /// Birth column index.
        birth: usize,
        /// Death column index.
        death: usize,
    },
    /// A pair reports a death time earlier than its birth time.
    NegativePersistence {
        /// Birth column index.
        birth: usize,
        /// Death column index.
        death: usize,
    },
}

impl Display for PairingError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReusedIndex { index } => {
                write!(formatter, "column index {} used in multiple pairs", index)
            }
            Self::IndexOutOfRange { index } => {
                write!(formatter, "column index {} exceeds the filtration", index)
            }
            Self::DimensionMismatch { birth, death } => {
                write!(
                    formatter,
                    "pair ({}, {}) does not span consecutive dimensions",
                    birth, death
                )
            }
            Self::NegativePersistence { birth, death } => {
                write!(
                    formatter,
                    "pair ({}, {}) dies before it is born",
                    birth, death
                )
            }
        }
    }
}

impl Error for PairingError {}

/// Persistence diagrams grouped by homology dimension.
///
/// Each dimension maps to its (birth-time, death-time) intervals; a death
/// time of `f64::INFINITY` marks an essential feature that never dies.
/// Zero-persistence intervals are never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagrams {
    by_dimension: BTreeMap<u32, Vec<(f64, f64)>>,
}

impl Diagrams {
    /// Create an empty set of diagrams.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The intervals recorded for homology dimension `dimension`, empty if
    /// none were.
    pub fn intervals(&self, dimension: u32) -> &[(f64, f64)] {
        self.by_dimension
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over the dimensions holding at least one interval, in
    /// increasing order.
    pub fn dimensions(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_dimension.keys().copied()
    }

    /// The total number of intervals across all dimensions.
    pub fn interval_count(&self) -> usize {
        self.by_dimension.values().map(Vec::len).sum()
    }

    /// Whether no intervals have been recorded.
    pub fn is_empty(&self) -> bool {
        self.by_dimension.is_empty()
    }

    fn push(&mut self, dimension: u32, interval: (f64, f64)) {
        self.by_dimension.entry(dimension).or_default().push(interval);
    }
}

/// Read a solver pairing off into per-dimension persistence diagrams.
///
/// `ordered` is the entry list in boundary matrix index order, as produced
/// by [`BoundaryMatrix::encode`](crate::BoundaryMatrix::encode); pair
/// indices refer into it. `all_entries` is the entry list as originally
/// built, used as the dimension reference when synthesizing infinite
/// features; callers holding only the sorted list may pass it for both.
///
/// Each pair contributes a (birth-time, death-time) interval in the
/// dimension of its birth simplex, except that zero-persistence pairs are
/// dropped. When `hide_infinite` is false, every index not covered by any
/// pair additionally contributes a (birth-time, `f64::INFINITY`) interval.
///
/// # Errors
/// Returns [`PairingError`] if the pairing reuses an index, references a
/// column out of range, pairs simplices not one dimension apart, or
/// reports a death before a birth.
pub fn read_persistence<K: Ord>(
    pairs: &[PersistencePair],
    ordered: &[FiltrationEntry<K>],
    all_entries: &[FiltrationEntry<K>],
    hide_infinite: bool,
) -> Result<Diagrams, PairingError> {
    debug_assert_eq!(ordered.len(), all_entries.len());

    let mut diagrams = Diagrams::new();

    // Role marker per column: +1 birth, -1 death, 0 unpaired. Scoped to
    // this call; the pairing is validated from scratch each time.
    let mut roles = vec![0i8; ordered.len()];

    for pair in pairs {
        for index in [pair.birth, pair.death] {
            if index >= ordered.len() {
                return Err(PairingError::IndexOutOfRange { index });
            }
            if roles[index] != 0 {
                return Err(PairingError::ReusedIndex { index });
            }
        }
        roles[pair.birth] = 1;
        roles[pair.death] = -1;

        let birth_entry = &ordered[pair.birth];
        let death_entry = &ordered[pair.death];

        if death_entry.birth < birth_entry.birth {
            return Err(PairingError::NegativePersistence {
                birth: pair.birth,
                death: pair.death,
            });
        }
        if death_entry.simplex.vertex_count() != birth_entry.simplex.vertex_count() + 1 {
            return Err(PairingError::DimensionMismatch {
                birth: pair.birth,
                death: pair.death,
            });
        }

        // Zero-persistence pairs represent no observable feature.
        if birth_entry.birth != death_entry.birth {
            diagrams.push(
                birth_entry.simplex.dimension(),
                (birth_entry.birth, death_entry.birth),
            );
        }
    }

    if !hide_infinite {
        for (index, role) in roles.iter().enumerate() {
            if *role == 0 {
                let entry = &all_entries[index];
                diagrams.push(entry.simplex.dimension(), (entry.birth, f64::INFINITY));
            }
        }
    }

    Ok(diagrams)
}
