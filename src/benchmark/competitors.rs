//! Competitor registry
//!
//! Which competing backends ship an executable for which algorithm. A pair
//! missing from the table simply means "no comparison available".

use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};

use crate::constants::backends::{STL, TBB, THRUST};

/// Built-in table of backend → supported algorithms
const BUILTIN_COMPETITORS: &[(&str, &[&str])] = &[
    (
        THRUST,
        &["accumulate", "count", "inner_product", "partial_sum", "sort", "saxpy"],
    ),
    (TBB, &["accumulate", "merge", "sort"]),
    (
        STL,
        &[
            "accumulate",
            "count",
            "find_end",
            "includes",
            "inner_product",
            "is_permutation",
            "merge",
            "next_permutation",
            "nth_element",
            "partial_sum",
            "partition",
            "partition_point",
            "prev_permutation",
            "reverse",
            "rotate",
            "rotate_copy",
            "search",
            "search_n",
            "set_difference",
            "set_intersection",
            "set_symmetric_difference",
            "set_union",
            "sort",
            "stable_partition",
            "unique",
            "unique_copy",
        ],
    ),
];

static REGISTRY: LazyLock<CompetitorRegistry> =
    LazyLock::new(|| CompetitorRegistry::from_table(BUILTIN_COMPETITORS));

/// Read-only mapping from backend label to the algorithms it supports
#[derive(Debug, Clone)]
pub struct CompetitorRegistry {
    table: IndexMap<&'static str, IndexSet<&'static str>>,
}

impl CompetitorRegistry {
    /// The process-wide built-in registry
    pub fn global() -> &'static CompetitorRegistry {
        &REGISTRY
    }

    /// Build a registry from a static table
    pub fn from_table(table: &[(&'static str, &[&'static str])]) -> Self {
        let mut registry = IndexMap::new();

        for (backend, algorithms) in table {
            registry
                .entry(*backend)
                .or_insert_with(IndexSet::new)
                .extend(algorithms.iter().copied());
        }

        Self { table: registry }
    }

    /// Whether `backend` has an executable for `algorithm`
    pub fn supports(&self, backend: &str, algorithm: &str) -> bool {
        self.table
            .get(backend)
            .is_some_and(|algorithms| algorithms.contains(algorithm))
    }

    /// Known backend labels in declaration order
    pub fn backends(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }

    /// Algorithms a backend supports, in declaration order
    pub fn algorithms_for(&self, backend: &str) -> Vec<&'static str> {
        self.table
            .get(backend)
            .map(|algorithms| algorithms.iter().copied().collect())
            .unwrap_or_default()
    }
}
