// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::cover::CoverError;
use super::entry::FiltrationEntry;

/// Trait for strategies that construct a filtered simplicial complex from a
/// cover of a point set.
///
/// A cover maps keys of type `K` to the sets of points each cover element
/// contains. Implementors turn such a cover into a list of filtration
/// entries; the entries need not be sorted by birth time, as ordering is the
/// responsibility of [`BoundaryMatrix::encode`](crate::BoundaryMatrix::encode).
///
/// Both the key type and the point type are caller-defined; keys need an
/// order for deterministic enumeration and hashing for lookup.
pub trait FiltrationBuilder<K>
where
    K: Clone + Ord + Hash + Debug,
{
    /// Build the filtration entries for `covers`.
    ///
    /// # Errors
    /// Returns [`CoverError`] if the cover is empty or contains an empty
    /// element; both are domain errors on which no filtration is defined.
    fn build<P>(
        &self,
        covers: &HashMap<K, HashSet<P>>,
    ) -> Result<Vec<FiltrationEntry<K>>, CoverError>
    where
        P: Eq + Hash;
}
