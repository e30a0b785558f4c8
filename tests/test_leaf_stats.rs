mod common;

use leafstats::model::{EdgeLength, TreeBuilder};
use leafstats::stats::{
    LookupKind, PathAggregates, SubtreeAggregates, assemble_leaf_records, compute_leaf_stats,
};
use leafstats::{LeafRecord, LeafStatsError};
use std::collections::{BTreeMap, HashMap};

fn record<'a>(records: &'a [LeafRecord], name: &str) -> &'a LeafRecord {
    records.iter().find(|r| r.name() == name).unwrap()
}

// --- SCENARIOS ---
#[test]
fn test_balanced_binary_tree() {
    let tree = common::balanced_four();
    let names = ["A", "B", "C", "D"];
    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();

    assert_eq!(records.len(), 4);
    for (record, name) in records.iter().zip(names) {
        assert_eq!(record.name(), name);
        assert_eq!(record.root_to_tip_weighted(), 2.0);
        assert_eq!(record.root_to_tip_unweighted(), 2);
        assert_eq!(record.sibling_leaf_count(), 1);
        assert_eq!(record.closest_leaf_distance(), 2.0);
        assert_eq!(record.efficacy(), 0.5);
    }
    assert_eq!(record(&records, "C").diagnosis(), Some(3.0));
}

#[test]
fn test_star_tree() {
    let tree = common::star_three();
    let names = ["A", "B", "C"];
    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();

    for record in &records {
        assert_eq!(record.sibling_leaf_count(), 2);
        assert_eq!(record.closest_leaf_distance(), 2.0);
        assert_eq!(record.root_to_tip_unweighted(), 1);
    }
}

#[test]
fn test_cherry_is_symmetric() {
    let mut builder = TreeBuilder::new();
    let l1 = builder.add_leaf(Some(0.3), "L1").unwrap();
    let l2 = builder.add_leaf(Some(1.2), "L2").unwrap();
    builder.add_internal(&[l1, l2], Some(5.0)).unwrap();
    let tree = builder.finish().unwrap();
    let names = ["L1", "L2"];

    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();

    assert_eq!(records[0].closest_leaf_distance(), 0.3 + 1.2);
    assert_eq!(records[1].closest_leaf_distance(), 0.3 + 1.2);
    // Root edge is ignored
    assert_eq!(records[0].root_to_tip_weighted(), 0.3);
    assert_eq!(records[1].root_to_tip_weighted(), 1.2);
}

#[test]
fn test_absent_edge_lengths() {
    // ((A,B:2):1,C:3);
    let mut builder = TreeBuilder::new();
    let a = builder.add_leaf(None, "A").unwrap();
    let b = builder.add_leaf(Some(2.0), "B").unwrap();
    let ab = builder.add_internal(&[a, b], Some(1.0)).unwrap();
    let c = builder.add_leaf(Some(3.0), "C").unwrap();
    builder.add_internal(&[ab, c], None).unwrap();
    let tree = builder.finish().unwrap();
    let names = ["A", "B", "C"];

    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();
    let (ra, rb, rc) = (&records[0], &records[1], &records[2]);

    assert_eq!(ra.edge_length(), EdgeLength::Absent);
    assert_eq!(ra.root_to_tip_weighted(), 1.0);
    assert_eq!(ra.root_to_tip_unweighted(), 2);
    assert_eq!(ra.closest_leaf_distance(), 2.0);
    assert_eq!(rb.closest_leaf_distance(), 2.0);
    // Closest leaf for C is A, across the absent edge
    assert_eq!(rc.closest_leaf_distance(), 4.0);
    assert_eq!(rc.sibling_leaf_count(), 2);
}

#[test]
fn test_all_edges_absent() {
    let mut builder = TreeBuilder::new();
    let a = builder.add_leaf(None, "A").unwrap();
    let b = builder.add_leaf(None, "B").unwrap();
    let ab = builder.add_internal(&[a, b], None).unwrap();
    let c = builder.add_leaf(None, "C").unwrap();
    builder.add_internal(&[ab, c], None).unwrap();
    let tree = builder.finish().unwrap();
    let names = ["A", "B", "C"];

    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();

    for record in &records {
        assert_eq!(record.root_to_tip_weighted(), 0.0);
        assert_eq!(record.closest_leaf_distance(), 0.0);
    }
    assert_eq!(records[0].root_to_tip_unweighted(), 2);
    assert_eq!(records[2].root_to_tip_unweighted(), 1);
}

#[test]
fn test_multifurcation_uses_all_siblings() {
    // (A:5,(B:1,C:2):1,D:4,E:0.5);
    let mut builder = TreeBuilder::new();
    let a = builder.add_leaf(Some(5.0), "A").unwrap();
    let b = builder.add_leaf(Some(1.0), "B").unwrap();
    let c = builder.add_leaf(Some(2.0), "C").unwrap();
    let bc = builder.add_internal(&[b, c], Some(1.0)).unwrap();
    let d = builder.add_leaf(Some(4.0), "D").unwrap();
    let e = builder.add_leaf(Some(0.5), "E").unwrap();
    builder.add_internal(&[a, bc, d, e], None).unwrap();
    let tree = builder.finish().unwrap();
    let names = ["A", "B", "C", "D", "E"];

    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();

    assert_eq!(record(&records, "A").closest_leaf_distance(), 5.5);
    assert_eq!(record(&records, "A").sibling_leaf_count(), 4);
    assert_eq!(record(&records, "B").closest_leaf_distance(), 2.5);
    assert_eq!(record(&records, "B").sibling_leaf_count(), 1);
    assert_eq!(record(&records, "C").closest_leaf_distance(), 3.0);
    assert_eq!(record(&records, "D").closest_leaf_distance(), 4.5);
    // E's closest leaf is B, via the bc subtree
    assert_eq!(record(&records, "E").closest_leaf_distance(), 2.5);
    assert_eq!(record(&records, "C").root_to_tip_weighted(), 3.0);
    assert_eq!(record(&records, "C").root_to_tip_unweighted(), 2);
}

#[test]
fn test_unary_vertex_passes_distances_through() {
    // ((A:1):2,B:1);
    let mut builder = TreeBuilder::new();
    let a = builder.add_leaf(Some(1.0), "A").unwrap();
    let unary = builder.add_internal(&[a], Some(2.0)).unwrap();
    let b = builder.add_leaf(Some(1.0), "B").unwrap();
    builder.add_internal(&[unary, b], None).unwrap();
    let tree = builder.finish().unwrap();
    let names = ["A", "B"];

    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();

    assert_eq!(records[0].sibling_leaf_count(), 0);
    assert_eq!(records[0].closest_leaf_distance(), 4.0);
    assert_eq!(records[0].root_to_tip_unweighted(), 2);
    assert_eq!(records[1].sibling_leaf_count(), 1);
    assert_eq!(records[1].closest_leaf_distance(), 4.0);
}

#[test]
fn test_single_leaf_tree() {
    let mut builder = TreeBuilder::new();
    builder.add_leaf(Some(0.7), "Solo").unwrap();
    let tree = builder.finish().unwrap();
    let names = ["Solo"];

    let records = compute_leaf_stats(
        &tree,
        &common::diagnoses_for(&names),
        &common::efficacies_for(&names),
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    let solo = &records[0];
    assert_eq!(solo.sibling_leaf_count(), 0);
    assert!(solo.closest_leaf_distance().is_infinite());
    assert_eq!(solo.root_to_tip_weighted(), 0.0);
    assert_eq!(solo.root_to_tip_unweighted(), 0);
    assert!(solo.edge_length().is_present());
}

// --- PASSES ---
#[test]
fn test_passes_on_internal_vertices() {
    let tree = common::balanced_four();
    let aggregates = SubtreeAggregates::compute(&tree);
    let paths = PathAggregates::compute(&tree, &aggregates);
    let root = tree.root_index();
    let ab = tree.root().children()[0];

    assert_eq!(aggregates.leaf_count(root), 4);
    assert_eq!(aggregates.leaf_count(ab), 2);
    assert_eq!(aggregates.min_distance_below(root), 2.0);
    assert_eq!(aggregates.min_distance_below(ab), 1.0);

    assert!(paths.min_distance_above(root).is_infinite());
    assert_eq!(paths.min_distance_above(ab), 3.0);
    assert_eq!(paths.root_to_tip_weighted(ab), 1.0);
    assert_eq!(paths.root_to_tip_unweighted(ab), 1);
    assert_eq!(paths.root_to_tip_unweighted(root), 0);
}

#[test]
fn test_assemble_from_passes_matches_compute() {
    let tree = common::star_three();
    let names = ["A", "B", "C"];
    let diagnoses = common::diagnoses_for(&names);
    let efficacies = common::efficacies_for(&names);

    let aggregates = SubtreeAggregates::compute(&tree);
    let paths = PathAggregates::compute(&tree, &aggregates);
    let assembled =
        assemble_leaf_records(&tree, &aggregates, &paths, &diagnoses, &efficacies).unwrap();

    assert_eq!(
        assembled,
        compute_leaf_stats(&tree, &diagnoses, &efficacies).unwrap()
    );
}

// --- LOOKUPS ---
#[test]
fn test_lookup_tables_as_btree_maps() {
    let tree = common::star_three();
    let diagnoses: BTreeMap<String, Option<f64>> = BTreeMap::from([
        ("A".to_string(), Some(2001.5)),
        ("B".to_string(), None),
        ("C".to_string(), Some(1999.0)),
    ]);
    let efficacies: BTreeMap<String, f64> = ["A", "B", "C"]
        .iter()
        .map(|n| (n.to_string(), 0.25))
        .collect();

    let records = compute_leaf_stats(&tree, &diagnoses, &efficacies).unwrap();
    assert_eq!(records[0].diagnosis(), Some(2001.5));
    assert_eq!(records[1].diagnosis(), None);
    assert_eq!(records[2].efficacy(), 0.25);
}

#[test]
fn test_missing_diagnosis_names_the_leaf() {
    let tree = common::balanced_four();
    let diagnoses = common::diagnoses_for(&["A", "B", "D"]);
    let efficacies = common::efficacies_for(&["A", "B", "C", "D"]);

    let error = compute_leaf_stats(&tree, &diagnoses, &efficacies).unwrap_err();
    match &error {
        LeafStatsError::MissingLookup { kind, leaf } => {
            assert_eq!(*kind, LookupKind::Diagnosis);
            assert_eq!(leaf, "C");
        }
        other => panic!("expected missing lookup, got {other:?}"),
    }
    assert_eq!(error.to_string(), "no diagnosis value for leaf 'C'");
}

#[test]
fn test_missing_efficacy_names_the_leaf() {
    let tree = common::balanced_four();
    let diagnoses = common::diagnoses_for(&["A", "B", "C", "D"]);
    let efficacies: HashMap<String, f64> = HashMap::new();

    let error = compute_leaf_stats(&tree, &diagnoses, &efficacies).unwrap_err();
    assert!(matches!(
        error,
        LeafStatsError::MissingLookup { kind: LookupKind::Efficacy, ref leaf } if leaf == "A"
    ));
}
