//! Parses a solver's solution file and writes the solved coordinates
//! back onto a graph, without mutating the caller's copy.
//!
//! Ported from `transit_map_generator/revise_solution.py`'s
//! `create_revise_solution` closure.

use std::collections::HashMap;

use crate::error::{FormulationError, Result};
use crate::graph::Graph;
use crate::settings::Settings;
use crate::variables::{vx, vy};

/// Parse a SCIP `.sol`-style solution file into a name -> value map.
///
/// Skips the `objective value:` and `solution status:` header lines;
/// every other non-blank line is `name value [optional objective-row
/// marker]`, whitespace-separated.
pub fn parse_solution(text: &str) -> Result<HashMap<String, f64>> {
    let mut solution = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("objective value:") || line.starts_with("solution status:") {
            continue;
        }
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| {
            FormulationError::SolutionParseError(format!("malformed solution line: {line:?}"))
        })?;
        let value_str = parts.next().ok_or_else(|| {
            FormulationError::SolutionParseError(format!(
                "solution line missing value: {line:?}"
            ))
        })?;
        let value: f64 = value_str.parse().map_err(|_| {
            FormulationError::SolutionParseError(format!(
                "unparseable value {value_str:?} on line {line:?}"
            ))
        })?;
        solution.insert(name.to_string(), value);
    }
    Ok(solution)
}

/// Write the solved `vx`/`vy` values (offset subtracted, rounded to 5
/// decimal places) back onto a fresh copy of `graph`. A variable absent
/// from `solution` (the solver omitted a structurally-zero coordinate)
/// defaults to `0.0` before the offset is subtracted.
pub fn revise_solution(graph: &Graph, solution: &HashMap<String, f64>, settings: &Settings) -> Graph {
    let mut revised = graph.clone();
    for (i, node) in revised.nodes.iter_mut().enumerate() {
        let x = solution.get(&vx(i)).copied().unwrap_or(0.0) - settings.offset;
        let y = solution.get(&vy(i)).copied().unwrap_or(0.0) - settings.offset;
        node.metadata.x = round5(x);
        node.metadata.y = round5(y);
    }
    revised
}

fn round5(v: f64) -> f64 {
    (v * 100_000.0).round() / 100_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, EdgeMetadata, Node, NodeId, NodeMetadata};

    fn sample_graph() -> Graph {
        Graph {
            nodes: vec![
                Node {
                    id: NodeId::from("a"),
                    metadata: NodeMetadata { x: 0.0, y: 0.0, dummy: false },
                },
                Node {
                    id: NodeId::from("b"),
                    metadata: NodeMetadata { x: 1.0, y: 1.0, dummy: false },
                },
            ],
            edges: vec![Edge {
                source: NodeId::from("a"),
                target: NodeId::from("b"),
                metadata: EdgeMetadata::default(),
            }],
        }
    }

    #[test]
    fn parse_solution_skips_header_lines() {
        let text = "objective value: 12.5\nsolution status: optimal\nvx0 10000\nvy0 9998.12345\n";
        let parsed = parse_solution(text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["vx0"], 10000.0);
    }

    #[test]
    fn revise_solution_subtracts_offset_and_rounds() {
        let graph = sample_graph();
        let settings = Settings::default();
        let mut solution = HashMap::new();
        solution.insert("vx0".to_string(), 10000.0);
        solution.insert("vy0".to_string(), 10003.123456);
        solution.insert("vx1".to_string(), 10010.0);
        solution.insert("vy1".to_string(), 10000.0);

        let revised = revise_solution(&graph, &solution, &settings);
        assert_eq!(revised.nodes[0].metadata.x, 0.0);
        assert_eq!(revised.nodes[0].metadata.y, 3.12346);
        assert_eq!(revised.nodes[1].metadata.x, 10.0);
    }

    #[test]
    fn revise_solution_does_not_mutate_input() {
        let graph = sample_graph();
        let settings = Settings::default();
        let solution = HashMap::new();
        let _ = revise_solution(&graph, &solution, &settings);
        assert_eq!(graph.nodes[0].metadata.x, 0.0);
    }

    #[test]
    fn missing_variable_defaults_to_offset_subtracted_zero() {
        let graph = sample_graph();
        let settings = Settings::default();
        let solution = HashMap::new();
        let revised = revise_solution(&graph, &solution, &settings);
        assert_eq!(revised.nodes[0].metadata.x, -10000.0);
    }
}
