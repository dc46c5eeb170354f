// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Filtration construction from a cover via the Jaccard distance.
//!
//! Each cover element becomes a vertex born at 0.0. A collection of cover
//! elements spans a higher simplex born at their Jaccard distance, provided
//! the elements share at least one point; collections with empty
//! intersection (distance 1.0) are excluded to bound the size of the
//! complex.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use itertools::Itertools;
use tracing::debug;

use super::entry::{FiltrationEntry, Simplex};
use super::traits::FiltrationBuilder;

/// Error type for invalid cover inputs to a filtration builder.
///
/// Both variants are domain errors: the Jaccard distance is undefined on
/// empty input, so no filtration exists for such covers. Callers may
/// recover by fixing the input; the builder performs no partial work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The cover contains no elements.
    EmptyCover,
    /// A cover element maps to an empty point set. The offending key is
    /// reported in its `Debug` rendering.
    EmptyElement(String),
}

impl Display for CoverError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCover => {
                write!(formatter, "cover contains no elements")
            }
            Self::EmptyElement(key) => {
                write!(formatter, "cover element {} has an empty point set", key)
            }
        }
    }
}

impl Error for CoverError {}

/// The Jaccard distance `1 − |∩ sets| / |∪ sets|` over two or more sets.
///
/// Returns 1.0 exactly when the sets share no common point. The distance is
/// monotonically non-decreasing as further sets are added, since the
/// intersection can only shrink and the union only grow.
///
/// # Panics
/// Panics in debug builds if `sets` is empty; the distance is undefined
/// there.
pub fn jaccard_distance<P>(sets: &[&HashSet<P>]) -> f64
where
    P: Eq + Hash,
{
    debug_assert!(!sets.is_empty(), "Jaccard distance of no sets");

    let (first, rest) = sets.split_first().expect("Jaccard distance of no sets");

    let intersection = first
        .iter()
        .filter(|point| rest.iter().all(|set| set.contains(*point)))
        .count();

    let mut union: HashSet<&P> = first.iter().collect();
    for set in rest {
        union.extend(set.iter());
    }

    1.0 - intersection as f64 / union.len() as f64
}

/// Builds a filtration from a cover using the Jaccard distance between
/// cover elements as birth times.
///
/// Every cover element contributes a vertex at birth time 0.0. For each
/// subset of between 2 and `max_dim` cover elements, the Jaccard distance
/// of the corresponding point sets is computed; if it is strictly below
/// 1.0 the subset enters the filtration as a simplex born at that distance.
///
/// All subsets up to the configured size are enumerated, so construction is
/// exponential in the number of cover elements; callers choose a tractable
/// bound.
///
/// # Examples
///
/// ```rust
/// use std::collections::{HashMap, HashSet};
/// use covhom::{CoverFiltration, FiltrationBuilder};
///
/// let covers = HashMap::from([
///     ("a", HashSet::from([1, 2])),
///     ("b", HashSet::from([2, 3])),
/// ]);
/// let entries = CoverFiltration::new(2).build(&covers).unwrap();
///
/// // Two vertices at 0.0 plus the edge {a, b} at 1 - 1/3.
/// assert_eq!(entries.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoverFiltration {
    max_dim: usize,
}

impl CoverFiltration {
    /// Create a builder considering simplices on up to `max_dim` cover
    /// elements (maximum simplex dimension `max_dim − 1`).
    #[must_use]
    pub fn new(max_dim: usize) -> Self {
        Self { max_dim }
    }

    /// The maximum number of cover elements spanning a single simplex.
    #[must_use]
    pub fn max_dim(&self) -> usize {
        self.max_dim
    }

    /// Build a filtration from an unkeyed sequence of cover elements.
    ///
    /// Keys `0..sets.len()` are assigned in input order, mirroring
    /// [`FiltrationBuilder::build`] for covers without natural names.
    ///
    /// # Errors
    /// Returns [`CoverError`] if `sets` is empty or any set is empty.
    pub fn build_enumerated<P>(
        &self,
        sets: &[HashSet<P>],
    ) -> Result<Vec<FiltrationEntry<usize>>, CoverError>
    where
        P: Eq + Hash,
    {
        self.build_from_pairs(sets.iter().enumerate().collect())
    }

    /// Shared construction over key-ordered (key, point set) pairs.
    fn build_from_pairs<K, P>(
        &self,
        pairs: Vec<(K, &HashSet<P>)>,
    ) -> Result<Vec<FiltrationEntry<K>>, CoverError>
    where
        K: Clone + Ord + Hash + Debug,
        P: Eq + Hash,
    {
        if pairs.is_empty() {
            return Err(CoverError::EmptyCover);
        }
        for (key, set) in &pairs {
            if set.is_empty() {
                return Err(CoverError::EmptyElement(format!("{:?}", key)));
            }
        }

        let mut entries: Vec<FiltrationEntry<K>> = pairs
            .iter()
            .map(|(key, _)| FiltrationEntry::new(Simplex::vertex(key.clone()), 0.0))
            .collect();

        for size in 2..=self.max_dim {
            for combination in pairs.iter().combinations(size) {
                let sets: Vec<&HashSet<P>> = combination.iter().map(|(_, set)| *set).collect();
                let distance = jaccard_distance(&sets);

                if distance < 1.0 {
                    let vertices = combination.iter().map(|(key, _)| key.clone()).collect();
                    entries.push(FiltrationEntry::new(Simplex::new(vertices), distance));
                }
            }
        }

        debug!(
            cover_elements = pairs.len(),
            entries = entries.len(),
            "built cover filtration"
        );

        Ok(entries)
    }
}

impl<K> FiltrationBuilder<K> for CoverFiltration
where
    K: Clone + Ord + Hash + Debug,
{
    fn build<P>(
        &self,
        covers: &HashMap<K, HashSet<P>>,
    ) -> Result<Vec<FiltrationEntry<K>>, CoverError>
    where
        P: Eq + Hash,
    {
        // Sort keys so combination enumeration is deterministic regardless
        // of hash order.
        let mut pairs: Vec<(K, &HashSet<P>)> = covers
            .iter()
            .map(|(key, set)| (key.clone(), set))
            .collect();
        pairs.sort_by(|(left, _), (right, _)| left.cmp(right));

        self.build_from_pairs(pairs)
    }
}
