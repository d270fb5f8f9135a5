//! The three constraint families that make up a formulation: each edge's
//! own octolinearity, and each unordered edge pair's either occlusion
//! (non-adjacent) or bend-angle (adjacent) constraints.

pub mod adjacency;
pub mod occlusion;
pub mod octolinearity;

use crate::constraint::LinearConstraint;
use crate::error::Result;
use crate::graph::{Graph, GraphIndex};
use crate::settings::Settings;
use crate::variables::Variables;

/// Generate every constraint in the formulation, in the order the LP
/// `Subject To` section will list them: octolinearity first (per edge),
/// then adjacency (registering the pair variables as it goes), then
/// occlusion.
pub fn generate_all(
    graph: &Graph,
    index: &GraphIndex,
    settings: &Settings,
    variables: &mut Variables,
) -> Result<Vec<LinearConstraint>> {
    let mut constraints = octolinearity::generate(graph, index, settings)?;
    constraints.extend(adjacency::generate(graph, index, settings, variables)?);
    constraints.extend(occlusion::generate(graph, index, settings)?);
    Ok(constraints)
}
