// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

use crate::matrix::BoundaryColumn;
use crate::persistence::{PersistencePair, ReductionSolver};

/// The standard persistence algorithm over Z/2 coefficients.
///
/// Columns are processed left to right; while a column shares its lowest
/// nonzero row with an earlier reduced column, that column is added to it
/// (symmetric difference of the sparse index sets). A column that remains
/// nonzero pairs its pivot row with its own index. Runs in O(n³) worst
/// case with no attempt at the clearing or twist optimizations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction;

impl ReductionSolver for StandardReduction {
    fn reduce(&self, columns: &[BoundaryColumn]) -> Vec<PersistencePair> {
        // Maps a pivot row to the reduced column owning it.
        let mut column_with_pivot: HashMap<usize, usize> = HashMap::new();
        let mut reduced: Vec<Vec<usize>> = Vec::with_capacity(columns.len());
        let mut pairs = Vec::new();

        for (index, column) in columns.iter().enumerate() {
            let mut chain = column.faces.clone();

            while let Some(&low) = chain.last() {
                match column_with_pivot.get(&low) {
                    Some(&earlier) => chain = symmetric_difference(&chain, &reduced[earlier]),
                    None => break,
                }
            }

            if let Some(&low) = chain.last() {
                column_with_pivot.insert(low, index);
                pairs.push(PersistencePair {
                    birth: low,
                    death: index,
                });
            }

            reduced.push(chain);
        }

        pairs
    }
}

/// Symmetric difference of two ascending index lists (column addition over
/// Z/2).
fn symmetric_difference(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => {
                result.push(left[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                result.push(right[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);

    result
}
