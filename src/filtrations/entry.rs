// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An abstract simplex on vertices of type `K`, stored as a sorted,
/// deduplicated vector of vertex keys.
///
/// The dimension of a simplex is one less than its vertex count: single
/// vertices are 0-dimensional, pairs are edges, triples are triangles, and
/// so on. Vertex keys are caller-defined; any ordered, hashable type works.
///
/// # Examples
///
/// ```rust
/// use covhom::Simplex;
///
/// let edge = Simplex::new(vec!["b", "a"]);
/// assert_eq!(edge.vertices(), &["a", "b"]); // sorted on construction
/// assert_eq!(edge.dimension(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Simplex<K> {
    vertices: Vec<K>,
}

impl<K> Simplex<K>
where
    K: Ord,
{
    /// Create a simplex from a vertex list. The list is sorted and
    /// deduplicated, so the caller may pass vertices in any order.
    pub fn new(mut vertices: Vec<K>) -> Self {
        vertices.sort();
        vertices.dedup();
        Self { vertices }
    }

    /// Create a 0-dimensional simplex from a single vertex.
    pub fn vertex(key: K) -> Self {
        Self {
            vertices: vec![key],
        }
    }

    /// The sorted vertex keys of this simplex.
    pub fn vertices(&self) -> &[K] {
        &self.vertices
    }

    /// The number of vertices of this simplex.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The dimension of this simplex, one less than its vertex count.
    ///
    /// # Panics
    /// Panics in debug builds if the simplex has no vertices; empty
    /// simplices are never produced by this crate.
    pub fn dimension(&self) -> u32 {
        debug_assert!(!self.vertices.is_empty(), "empty simplex");
        (self.vertices.len() - 1) as u32
    }
}

impl<K> Simplex<K>
where
    K: Ord + Clone,
{
    /// Return all codimension-1 faces, each obtained by omitting one vertex.
    ///
    /// A 0-dimensional simplex has no proper faces and yields an empty
    /// vector.
    pub fn faces(&self) -> Vec<Simplex<K>> {
        if self.vertices.len() < 2 {
            return Vec::new();
        }

        (0..self.vertices.len())
            .map(|omitted| {
                let vertices = self
                    .vertices
                    .iter()
                    .enumerate()
                    .filter(|(position, _)| *position != omitted)
                    .map(|(_, key)| key.clone())
                    .collect();
                // Already sorted; skip the re-sort in `new`.
                Simplex { vertices }
            })
            .collect()
    }
}

impl<K: Ord> PartialOrd for Simplex<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Simplices order by vertex count first, then lexicographically by their
/// sorted vertices. Under this order every proper face of a simplex
/// precedes it, which is what makes birth-time ties in a filtration safe to
/// break with simplex order.
impl<K: Ord> Ord for Simplex<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertices
            .len()
            .cmp(&other.vertices.len())
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

/// A simplex tagged with the filtration parameter at which it enters the
/// complex.
///
/// A list of entries is a valid filtration when every proper face of each
/// simplex is present with a birth time no greater than the simplex's own;
/// [`BoundaryMatrix::encode`](crate::BoundaryMatrix::encode) validates this
/// while assigning indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltrationEntry<K> {
    /// The simplex entering the complex.
    pub simplex: Simplex<K>,
    /// The filtration value at which `simplex` appears.
    pub birth: f64,
}

impl<K> FiltrationEntry<K> {
    /// Create a filtration entry for `simplex` born at `birth`.
    pub fn new(simplex: Simplex<K>, birth: f64) -> Self {
        Self { simplex, birth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_sorts_and_dedups() {
        let simplex = Simplex::new(vec![3, 1, 2, 1]);
        assert_eq!(simplex.vertices(), &[1, 2, 3]);
        assert_eq!(simplex.vertex_count(), 3);
        assert_eq!(simplex.dimension(), 2);
    }

    #[test]
    fn test_vertex_simplex() {
        let simplex = Simplex::vertex("a");
        assert_eq!(simplex.dimension(), 0);
        assert!(simplex.faces().is_empty());
    }

    #[test]
    fn test_faces_of_triangle() {
        let triangle = Simplex::new(vec![0, 1, 2]);
        let faces = triangle.faces();

        assert_eq!(faces.len(), 3);
        assert!(faces.contains(&Simplex::new(vec![0, 1])));
        assert!(faces.contains(&Simplex::new(vec![0, 2])));
        assert!(faces.contains(&Simplex::new(vec![1, 2])));
    }

    #[test]
    fn test_order_places_faces_first() {
        // Faces have fewer vertices, so they order strictly before any
        // containing simplex regardless of vertex values.
        let edge = Simplex::new(vec![8, 9]);
        let vertex = Simplex::vertex(9);
        assert!(vertex < edge);

        // Equal counts fall back to lexicographic order.
        assert!(Simplex::new(vec![0, 1]) < Simplex::new(vec![0, 2]));
        assert!(Simplex::new(vec![0, 2]) < Simplex::new(vec![1, 2]));
    }

    #[test]
    fn test_entry_roundtrip_serde() {
        let entry = FiltrationEntry::new(Simplex::new(vec![0u32, 1]), 0.25);
        let encoded = serde_json::to_string(&entry).unwrap();
        let decoded: FiltrationEntry<u32> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(entry, decoded);
    }
}
