//! Normalizes a raw, wire-format graph into the fully-prepared form the
//! rest of the formulation operates on: every edge has flattened line
//! ids and populated direction candidates, and the result never aliases
//! the input.

use std::collections::HashMap;

use crate::direction::DirectionClassifier;
use crate::error::{FormulationError, Result};
use crate::graph::{Edge, EdgeMetadata, Graph, NodeId, RawGraph};

/// Prepare a raw graph for formulation.
///
/// This:
/// - flattens each edge's `lines` metadata to bare ids (an element that
///   arrived as `{"id": ...}` becomes just the id),
/// - computes `sourceDirections`/`targetDirections` for every edge via
///   [`DirectionClassifier`],
/// - returns a structurally independent copy; the input is never
///   mutated or aliased.
///
/// # Errors
/// Returns [`FormulationError::InvalidInput`] if an edge references a
/// node id absent from `raw.nodes`.
pub fn prepare_graph(raw: &RawGraph) -> Result<Graph> {
    let coords: HashMap<&NodeId, (f64, f64)> = raw
        .nodes
        .iter()
        .map(|n| (&n.id, (n.metadata.x, n.metadata.y)))
        .collect();

    let classifier = DirectionClassifier;
    let mut edges = Vec::with_capacity(raw.edges.len());
    for raw_edge in &raw.edges {
        let source_xy = *coords.get(&raw_edge.source).ok_or_else(|| {
            FormulationError::InvalidInput(format!(
                "edge references unknown source node {}",
                raw_edge.source
            ))
        })?;
        let target_xy = *coords.get(&raw_edge.target).ok_or_else(|| {
            FormulationError::InvalidInput(format!(
                "edge references unknown target node {}",
                raw_edge.target
            ))
        })?;

        let lines = raw_edge
            .metadata
            .lines
            .iter()
            .cloned()
            .map(|l| l.into_id())
            .collect();

        let (source_directions, target_directions) = classifier.classify(source_xy, target_xy);

        edges.push(Edge {
            source: raw_edge.source.clone(),
            target: raw_edge.target.clone(),
            metadata: EdgeMetadata {
                lines,
                source_directions,
                target_directions,
            },
        });
    }

    Ok(Graph {
        nodes: raw.nodes.clone(),
        edges,
    })
}
