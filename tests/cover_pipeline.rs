use std::collections::{HashMap, HashSet};
use std::fs;

use covhom::{
    compute_diagrams, BoundaryColumn, CoverFiltration, FiltrationBuilder, FiltrationEntry,
    PersistenceError, PersistencePair, ReductionSolver, StandardReduction,
};

#[test]
fn overlapping_pair_yields_one_finite_component() {
    let covers = HashMap::from([
        ("a", HashSet::from([1, 2])),
        ("b", HashSet::from([2, 3])),
    ]);

    let entries = CoverFiltration::new(2).build(&covers).unwrap();
    let diagrams = compute_diagrams(entries, &StandardReduction, true).unwrap();

    // One component dies when the edge merges the two; the survivor is
    // hidden.
    let intervals = diagrams.intervals(0);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].0, 0.0);
    assert!((intervals[0].1 - (1.0 - 1.0 / 3.0)).abs() < 1e-12);
}

#[test]
fn pairwise_overlaps_with_empty_triple_form_a_cycle() {
    // Three cover elements overlapping pairwise but sharing no common
    // point: the three edges close a loop that nothing fills.
    let covers = HashMap::from([
        ("a", HashSet::from([1, 2])),
        ("b", HashSet::from([2, 3])),
        ("c", HashSet::from([1, 3])),
    ]);

    let entries = CoverFiltration::new(3).build(&covers).unwrap();
    let diagrams = compute_diagrams(entries, &StandardReduction, false).unwrap();

    let birth = 1.0 - 1.0 / 3.0;

    // Two components die when the edges arrive; one survives forever.
    let dim0 = diagrams.intervals(0);
    assert_eq!(dim0.len(), 3);
    assert_eq!(dim0.iter().filter(|(_, d)| d.is_infinite()).count(), 1);
    for (b, d) in dim0.iter().filter(|(_, d)| d.is_finite()) {
        assert_eq!(*b, 0.0);
        assert!((d - birth).abs() < 1e-12);
    }

    // The loop is essential.
    let dim1 = diagrams.intervals(1);
    assert_eq!(dim1.len(), 1);
    assert!((dim1[0].0 - birth).abs() < 1e-12);
    assert!(dim1[0].1.is_infinite());
}

#[test]
fn disjoint_cover_elements_stay_separate_components() {
    let covers = HashMap::from([(0, HashSet::from(["x"])), (1, HashSet::from(["y"]))]);

    let entries = CoverFiltration::new(2).build(&covers).unwrap();
    let diagrams = compute_diagrams(entries, &StandardReduction, false).unwrap();

    assert_eq!(
        diagrams.intervals(0),
        &[(0.0, f64::INFINITY), (0.0, f64::INFINITY)]
    );
    assert!(diagrams.intervals(1).is_empty());
}

#[test]
fn every_index_is_paired_or_infinite() {
    let covers = HashMap::from([
        (0, HashSet::from([1, 2, 3])),
        (1, HashSet::from([2, 3, 4])),
        (2, HashSet::from([3, 4, 5])),
    ]);

    let entries = CoverFiltration::new(3).build(&covers).unwrap();
    let entry_count = entries.len();

    let hidden = compute_diagrams(entries.clone(), &StandardReduction, true).unwrap();
    let full = compute_diagrams(entries, &StandardReduction, false).unwrap();

    // With infinite features included, finite intervals account for two
    // indices each and infinite intervals for one; together they must
    // exhaust the filtration. Zero-persistence pairs also consume two.
    let finite: usize = full
        .dimensions()
        .map(|p| full.intervals(p).iter().filter(|(_, d)| d.is_finite()).count())
        .sum();
    let infinite: usize = full
        .dimensions()
        .map(|p| {
            full.intervals(p)
                .iter()
                .filter(|(_, d)| d.is_infinite())
                .count()
        })
        .sum();
    let zero_persistence = entry_count - (2 * finite + infinite);
    assert_eq!(zero_persistence % 2, 0);

    // Hiding infinite features removes exactly the infinite intervals.
    assert_eq!(hidden.interval_count(), finite);
}

#[test]
fn fixture_filtration_produces_expected_diagrams() {
    let raw = fs::read_to_string("testing/filtrations/filled_triangle.json")
        .expect("Testing filtration file not found.");
    let entries: Vec<FiltrationEntry<u32>> =
        serde_json::from_str(&raw).expect("Testing filtration could not be deserialized.");

    let diagrams = compute_diagrams(entries, &StandardReduction, false).unwrap();

    // Two components die as the edges arrive; one lives forever.
    assert_eq!(
        diagrams.intervals(0),
        &[(0.0, 0.25), (0.0, 0.5), (0.0, f64::INFINITY)]
    );

    // The cycle closed by the second 0.5 edge dies when the face fills it.
    assert_eq!(diagrams.intervals(1), &[(0.5, 0.75)]);

    assert!(diagrams.intervals(2).is_empty());
}

/// A backend returning a fixed pairing, standing in for an external solver.
struct FixedPairing(Vec<PersistencePair>);

impl ReductionSolver for FixedPairing {
    fn reduce(&self, _columns: &[BoundaryColumn]) -> Vec<PersistencePair> {
        self.0.clone()
    }
}

#[test]
fn inconsistent_solver_output_is_rejected() {
    let covers = HashMap::from([("a", HashSet::from([1, 2])), ("b", HashSet::from([2, 3]))]);
    let entries = CoverFiltration::new(2).build(&covers).unwrap();

    // Pairs two vertices, which are not one dimension apart.
    let solver = FixedPairing(vec![PersistencePair { birth: 0, death: 1 }]);
    let result = compute_diagrams(entries, &solver, true);

    assert!(matches!(result, Err(PersistenceError::Pairing(_))));
}
