//! Generators used by tests: exhaustive small-graph enumeration and seeded
//! random graphs.

pub mod graph_enumerator;
pub mod random_graphs;
