//! Top-level orchestration: raw graph in, LP text and the variable
//! catalogue out. Single-threaded and allocation-light, mirroring the
//! sequential, in-process pipeline of `transit_map_generator`'s
//! `generate_lp`/`prepare_graph` pair — there is no parallelism to
//! coordinate here, only a fixed pipeline of passes over the graph.

use crate::constraints;
use crate::emit::LpEmitter;
use crate::error::Result;
use crate::graph::{Graph, GraphIndex, RawGraph};
use crate::prepare::prepare_graph;
use crate::settings::Settings;
use crate::variables::{VariableAllocator, Variables};

/// A fully-built formulation, ready to hand to an external solver.
pub struct Formulation {
    /// The prepared graph (flattened lines, populated directions).
    pub graph: Graph,
    /// Every LP variable name declared, by family.
    pub variables: Variables,
    /// LP-format problem text.
    pub lp_text: String,
}

/// Build the complete MILP formulation for `raw`: prepare the graph,
/// declare variables, generate every constraint family, and render LP
/// text.
pub fn build(raw: &RawGraph, settings: &Settings) -> Result<Formulation> {
    let graph = prepare_graph(raw)?;
    let index = GraphIndex::build(&graph)?;
    let mut variables = VariableAllocator.allocate(&graph);
    let constraints = constraints::generate_all(&graph, &index, settings, &mut variables)?;
    let lp_text = LpEmitter.emit(&variables, &constraints, settings);

    Ok(Formulation {
        graph,
        variables,
        lp_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeMetadataInput, Node, NodeMetadata, RawEdge};

    #[test]
    fn build_produces_nonempty_lp_text_for_a_simple_path() {
        let raw = RawGraph {
            nodes: vec![
                Node {
                    id: "a".into(),
                    metadata: NodeMetadata { x: 0.0, y: 0.0, dummy: false },
                },
                Node {
                    id: "b".into(),
                    metadata: NodeMetadata { x: 10.0, y: 0.0, dummy: false },
                },
                Node {
                    id: "c".into(),
                    metadata: NodeMetadata { x: 20.0, y: 0.0, dummy: false },
                },
            ],
            edges: vec![
                RawEdge {
                    source: "a".into(),
                    target: "b".into(),
                    metadata: EdgeMetadataInput::default(),
                },
                RawEdge {
                    source: "b".into(),
                    target: "c".into(),
                    metadata: EdgeMetadataInput::default(),
                },
            ],
        };
        let settings = Settings::default();
        let formulation = build(&raw, &settings).unwrap();
        assert!(formulation.lp_text.starts_with("Minimize"));
        assert!(formulation.lp_text.ends_with("End\n"));
        assert_eq!(formulation.variables.q.len(), 1);
    }

    #[test]
    fn build_rejects_dangling_edge_reference() {
        let raw = RawGraph {
            nodes: vec![Node {
                id: "a".into(),
                metadata: NodeMetadata { x: 0.0, y: 0.0, dummy: false },
            }],
            edges: vec![RawEdge {
                source: "a".into(),
                target: "ghost".into(),
                metadata: EdgeMetadataInput::default(),
            }],
        };
        let settings = Settings::default();
        assert!(build(&raw, &settings).is_err());
    }
}
