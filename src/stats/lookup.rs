//! Name-keyed lookup tables supplied from outside the computation.
//!
//! Diagnosis times and efficacy values are produced by other tools and
//! handed in per leaf name. Any map keyed by [String] works through the
//! [Lookup] trait.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

/// Diagnosis time of an individual; `None` if it was never set.
pub type DiagnosisTime = Option<f64>;

/// Efficacy value of an individual.
pub type Efficacy = f64;

// =#========================================================================#=
// LOOKUP (trait)
// =#========================================================================T=
/// Read-only table from leaf name to a value.
pub trait Lookup<V> {
    /// Returns the value stored for `name`, or `None` if there is no entry.
    fn lookup(&self, name: &str) -> Option<&V>;
}

impl<V, S: BuildHasher> Lookup<V> for HashMap<String, V, S> {
    fn lookup(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Lookup<V> for BTreeMap<String, V> {
    fn lookup(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Which lookup table a value comes from, used to report missing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Diagnosis,
    Efficacy,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupKind::Diagnosis => write!(f, "diagnosis"),
            LookupKind::Efficacy => write!(f, "efficacy"),
        }
    }
}
