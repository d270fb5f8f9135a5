//! Pairwise non-occlusion constraints: for every pair of edges that
//! don't share a node, force geometric separation along whichever axis
//! the input coordinates already agree on, so the solved layout can't
//! introduce a crossing the input topology didn't have.
//!
//! Ported from `transit_map_generator/occlusion.py`.

use crate::constraint::LinearConstraint;
use crate::error::Result;
use crate::graph::{Edge, Graph, GraphIndex};
use crate::variables::{vx, vy};

/// The four axes a pair of edges can be geometrically separated along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    WestEast,
    SouthNorth,
    SouthwestNortheast,
    NorthwestSoutheast,
}

const AXES: [Axis; 4] = [
    Axis::WestEast,
    Axis::SouthNorth,
    Axis::SouthwestNortheast,
    Axis::NorthwestSoutheast,
];

/// The four pairwise endpoint differences (e1.source - e2.source, etc.)
/// projected onto `axis`, computed from *input* geographic coordinates.
fn differences(axis: Axis, e1: [(f64, f64); 2], e2: [(f64, f64); 2]) -> [f64; 4] {
    let project = |p: (f64, f64)| match axis {
        Axis::WestEast => p.0,
        Axis::SouthNorth => p.1,
        Axis::SouthwestNortheast => p.0 - p.1,
        Axis::NorthwestSoutheast => p.0 + p.1,
    };
    let mut out = [0.0; 4];
    let mut idx = 0;
    for p1 in e1 {
        for p2 in e2 {
            out[idx] = project(p1) - project(p2);
            idx += 1;
        }
    }
    out
}

/// Generate the non-occlusion constraints for every non-adjacent edge
/// pair in `graph`. Adjacent pairs are handled by
/// [`crate::constraints::adjacency`] instead.
pub fn generate(graph: &Graph, index: &GraphIndex, _settings: &crate::settings::Settings) -> Result<Vec<LinearConstraint>> {
    let mut constraints = Vec::new();
    let edges = &graph.edges;

    for o in 0..edges.len() {
        for i in (o + 1)..edges.len() {
            let outer = &edges[o];
            let inner = &edges[i];
            if outer.is_adjacent_to(inner) {
                continue;
            }
            constraints.extend(pair_constraints(graph, index, outer, inner)?);
        }
    }

    Ok(constraints)
}

fn endpoint_coords(graph: &Graph, edge: &Edge) -> Result<[(f64, f64); 2]> {
    let source = graph
        .nodes
        .iter()
        .find(|n| n.id == edge.source)
        .ok_or_else(|| {
            crate::error::FormulationError::InvalidInput(format!(
                "edge references unknown source node {}",
                edge.source
            ))
        })?;
    let target = graph
        .nodes
        .iter()
        .find(|n| n.id == edge.target)
        .ok_or_else(|| {
            crate::error::FormulationError::InvalidInput(format!(
                "edge references unknown target node {}",
                edge.target
            ))
        })?;
    Ok([
        (source.metadata.x, source.metadata.y),
        (target.metadata.x, target.metadata.y),
    ])
}

fn pair_constraints(
    graph: &Graph,
    index: &GraphIndex,
    outer: &Edge,
    inner: &Edge,
) -> Result<Vec<LinearConstraint>> {
    let e1 = endpoint_coords(graph, outer)?;
    let e2 = endpoint_coords(graph, inner)?;

    let mut best: Option<(Axis, f64, bool)> = None; // axis, min_abs, all_positive
    for &axis in &AXES {
        let diffs = differences(axis, e1, e2);
        let positive_count = diffs.iter().filter(|&&d| d > 0.0).count();
        if positive_count != 0 && positive_count != 4 {
            continue; // not a candidate: edges straddle this axis
        }
        let min_abs = diffs.iter().fold(f64::INFINITY, |acc, d| acc.min(d.abs()));
        let better = match &best {
            None => true,
            Some((_, current_min, _)) => min_abs > *current_min,
        };
        if better {
            best = Some((axis, min_abs, positive_count == 4));
        }
    }

    let Some((axis, _, all_positive)) = best else {
        return Ok(vec![]);
    };

    let e1s = index.node_index(&outer.source)?;
    let e1t = index.node_index(&outer.target)?;
    let e2s = index.node_index(&inner.source)?;
    let e2t = index.node_index(&inner.target)?;

    let (cmp, rhs) = if all_positive {
        (crate::constraint::Comparison::Ge, 1.0)
    } else {
        (crate::constraint::Comparison::Le, -1.0)
    };

    let pairs = [(e1s, e2s), (e1s, e2t), (e1t, e2s), (e1t, e2t)];

    let terms_for = |(a, b): (usize, usize)| -> Vec<(f64, String)> {
        match axis {
            Axis::WestEast => vec![(1.0, vx(a)), (-1.0, vx(b))],
            Axis::SouthNorth => vec![(1.0, vy(a)), (-1.0, vy(b))],
            Axis::SouthwestNortheast => {
                vec![(1.0, vx(a)), (-1.0, vy(a)), (-1.0, vx(b)), (1.0, vy(b))]
            }
            Axis::NorthwestSoutheast => {
                vec![(1.0, vx(a)), (1.0, vy(a)), (-1.0, vx(b)), (-1.0, vy(b))]
            }
        }
    };

    Ok(pairs
        .into_iter()
        .map(|pair| LinearConstraint::new(terms_for(pair), cmp, rhs))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeMetadata, Node, NodeId, NodeMetadata};
    use crate::settings::Settings;

    fn node(id: &str, x: f64, y: f64) -> Node {
        Node {
            id: NodeId::from(id),
            metadata: NodeMetadata { x, y, dummy: false },
        }
    }

    fn edge(source: &str, target: &str) -> Edge {
        Edge {
            source: NodeId::from(source),
            target: NodeId::from(target),
            metadata: EdgeMetadata::default(),
        }
    }

    #[test]
    fn vertically_separated_edges_use_south_north_axis() {
        let graph = Graph {
            nodes: vec![
                node("a", 0.0, 0.0),
                node("b", 10.0, 0.0),
                node("c", 0.0, 100.0),
                node("d", 10.0, 100.0),
            ],
            edges: vec![edge("a", "b"), edge("c", "d")],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let constraints = generate(&graph, &index, &Settings::default()).unwrap();
        assert_eq!(constraints.len(), 4);
        for c in &constraints {
            assert_eq!(c.cmp, crate::constraint::Comparison::Le);
            assert_eq!(c.rhs, -1.0);
            assert!(c.terms.iter().any(|(_, v)| v.starts_with("vy")));
        }
    }

    #[test]
    fn adjacent_edges_produce_no_occlusion_constraints() {
        let graph = Graph {
            nodes: vec![node("a", 0.0, 0.0), node("b", 10.0, 0.0), node("c", 20.0, 0.0)],
            edges: vec![edge("a", "b"), edge("b", "c")],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let constraints = generate(&graph, &index, &Settings::default()).unwrap();
        assert!(constraints.is_empty());
    }

    #[test]
    fn straddling_edges_emit_no_constraints() {
        // b and c cross through the same region in both x and y -- no
        // axis has all four pairwise differences the same sign.
        let graph = Graph {
            nodes: vec![
                node("a", 0.0, 0.0),
                node("b", 10.0, 10.0),
                node("c", 0.0, 10.0),
                node("d", 10.0, 0.0),
            ],
            edges: vec![edge("a", "b"), edge("c", "d")],
        };
        let index = GraphIndex::build(&graph).unwrap();
        let constraints = generate(&graph, &index, &Settings::default()).unwrap();
        assert!(constraints.is_empty());
    }
}
