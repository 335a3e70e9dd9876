// #![warn(missing_docs)]

//! # planar_subgraph
//!
//! Exact maximum planar subgraph search built on a left-right planarity
//! oracle.
//!
//! The oracle decides planarity by folding descending height sequences
//! over a depth-first traversal; the search branches over every edge of
//! the input and keeps the largest subset the oracle accepts.

pub mod error;
pub mod graph;
pub mod input;
pub mod kuratowski;
pub mod output;
pub mod planarity;
pub mod search;
pub mod types;

mod fringe;

#[doc(hidden)]
pub mod testing;

pub use error::GraphError;
pub use graph::Graph;
pub use planarity::is_planar;
pub use search::maximum_planar_subgraph;
pub use types::Edge;
