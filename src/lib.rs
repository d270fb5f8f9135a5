//! Generates CPLEX LP-format MILP formulations that lay out a transit
//! network on the octolinear grid (every edge running along one of the
//! eight compass directions), and reads a solver's solution back onto
//! the graph.
//!
//! Ported from `transit_map_generator`, keeping its pipeline shape:
//! prepare the graph, allocate variables, generate constraints per
//! family, emit LP text, then (once an external solver has run) revise
//! the graph with the solution.

pub mod constraint;
pub mod constraints;
pub mod direction;
pub mod emit;
pub mod error;
pub mod formulation;
pub mod graph;
pub mod prepare;
pub mod settings;
pub mod solution;
pub mod variables;

pub use error::{FormulationError, Result};
pub use formulation::{build, Formulation};
pub use graph::{Graph, RawGraph};
pub use settings::Settings;

/// Commonly-used types, re-exported for `use transit_layout_milp::prelude::*;`.
pub mod prelude {
    pub use crate::constraint::{Comparison, LinearConstraint};
    pub use crate::error::{FormulationError, Result};
    pub use crate::formulation::{build, Formulation};
    pub use crate::graph::{Edge, Graph, Node, NodeId, RawGraph};
    pub use crate::settings::Settings;
}
