#![allow(dead_code)]

use leafstats::model::{Tree, TreeBuilder};
use std::collections::HashMap;

/// `((A:1,B:1):1,(C:1,D:1):1);`
pub fn balanced_four() -> Tree {
    let mut builder = TreeBuilder::new();
    let a = builder.add_leaf(Some(1.0), "A").unwrap();
    let b = builder.add_leaf(Some(1.0), "B").unwrap();
    let c = builder.add_leaf(Some(1.0), "C").unwrap();
    let d = builder.add_leaf(Some(1.0), "D").unwrap();
    let ab = builder.add_internal(&[a, b], Some(1.0)).unwrap();
    let cd = builder.add_internal(&[c, d], Some(1.0)).unwrap();
    builder.add_internal(&[ab, cd], None).unwrap();
    builder.finish().unwrap()
}

/// `(A:1,B:1,C:1);`
pub fn star_three() -> Tree {
    let mut builder = TreeBuilder::new();
    let leaves: Vec<_> = ["A", "B", "C"]
        .iter()
        .map(|&label| builder.add_leaf(Some(1.0), label).unwrap())
        .collect();
    builder.add_internal(&leaves, None).unwrap();
    builder.finish().unwrap()
}

/// Diagnosis table assigning `index + 1` to the `index`-th name.
pub fn diagnoses_for(names: &[&str]) -> HashMap<String, Option<f64>> {
    names
        .iter()
        .enumerate()
        .map(|(i, &name)| (name.to_string(), Some((i + 1) as f64)))
        .collect()
}

/// Efficacy table assigning `0.5` to every name.
pub fn efficacies_for(names: &[&str]) -> HashMap<String, f64> {
    names.iter().map(|&name| (name.to_string(), 0.5)).collect()
}

/// Labels of all leaves of `tree` in encounter order.
pub fn leaf_names(tree: &Tree) -> Vec<String> {
    tree.leaves()
        .map(|leaf| leaf.label().unwrap().to_string())
        .collect()
}
