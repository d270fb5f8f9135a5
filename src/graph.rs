//! The abstract transit network data model: stations (nodes), lines
//! (carried as edge metadata), and the stable-index lookups
//! ([`GraphIndex`]) the rest of the formulation is built on.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FormulationError, Result};

/// A node identifier. Newtype over `String` so node ids can't be
/// confused with arbitrary text at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

/// A line id as it appears in edge metadata. The wire format allows a
/// bare id or `{"id": ...}`; [`crate::prepare::prepare_graph`] flattens
/// both to this.
pub type LineId = String;

/// A line reference as it may appear on the wire: either a bare id or an
/// object carrying one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineRef {
    /// A bare line id.
    Id(LineId),
    /// An object wrapping a line id, e.g. `{"id": "L1"}`.
    Object {
        /// The wrapped id.
        id: LineId,
    },
}

impl LineRef {
    /// Flatten to the bare id, regardless of which wire form was used.
    pub fn into_id(self) -> LineId {
        match self {
            LineRef::Id(id) => id,
            LineRef::Object { id } => id,
        }
    }
}

/// Node metadata: a geographic coordinate, and whether this node is a
/// synthetic interchange inserted only to allow line crossings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Input geographic x coordinate; replaced by the solved layout
    /// coordinate after [`crate::solution::revise_solution`].
    pub x: f64,
    /// Input geographic y coordinate; replaced by the solved layout
    /// coordinate after [`crate::solution::revise_solution`].
    pub y: f64,
    /// Whether this is a synthetic interchange node.
    #[serde(default)]
    pub dummy: bool,
}

/// A station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, unique within the graph.
    pub id: NodeId,
    /// Coordinate and interchange metadata.
    pub metadata: NodeMetadata,
}

/// Edge metadata as it appears on the wire: the lines that run along
/// this edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeMetadataInput {
    /// Lines carried by this edge, in either wire form.
    #[serde(default)]
    pub lines: Vec<LineRef>,
}

/// Edge metadata after preparation: `lines` flattened to bare ids, plus
/// the candidate octolinear directions computed by
/// [`crate::direction::DirectionClassifier`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetadata {
    /// Flattened line ids, in wire order.
    pub lines: Vec<LineId>,
    /// Up to three candidate directions at the source endpoint, ordered
    /// by angular closeness to the edge's geographic bearing.
    #[serde(default, rename = "sourceDirections")]
    pub source_directions: Vec<u8>,
    /// `(d + 4) mod 8` of each source direction, i.e. the same
    /// candidates viewed from the target endpoint.
    #[serde(default, rename = "targetDirections")]
    pub target_directions: Vec<u8>,
}

/// A connection between two stations, carrying one or more lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// Line membership and (once prepared) candidate directions.
    pub metadata: EdgeMetadata,
}

impl Edge {
    /// The two endpoints as an unordered pair, for adjacency checks.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source.clone(), self.target.clone())
    }

    /// Whether this edge shares at least one node with `other`.
    pub fn is_adjacent_to(&self, other: &Edge) -> bool {
        self.source == other.source
            || self.source == other.target
            || self.target == other.source
            || self.target == other.target
    }

    /// Whether this edge shares at least one line with `other`.
    pub fn shares_line_with(&self, other: &Edge) -> bool {
        self.metadata
            .lines
            .iter()
            .any(|l| other.metadata.lines.contains(l))
    }
}

/// The wire-format graph: a list of nodes and a list of edges, as read
/// directly from JSON. `metadata` on edges is the raw, un-prepared
/// form — see [`crate::prepare::prepare_graph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGraph {
    /// Stations.
    pub nodes: Vec<Node>,
    /// Connections, with un-flattened `lines` metadata.
    pub edges: Vec<RawEdge>,
}

/// An edge as read from JSON, before line-flattening and direction
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEdge {
    /// Source node id.
    pub source: NodeId,
    /// Target node id.
    pub target: NodeId,
    /// Raw metadata, possibly containing `{"id": ...}` line objects.
    #[serde(default)]
    pub metadata: EdgeMetadataInput,
}

/// A graph that has been through [`crate::prepare::prepare_graph`]:
/// every edge has flattened `lines` and populated direction candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Stations. Node 0 is the anchor: its layout coordinates are
    /// pinned by [`crate::emit::LpEmitter`].
    pub nodes: Vec<Node>,
    /// Connections, with flattened lines and populated directions.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// The degree (number of incident edges) of the node at graph index
    /// `n`.
    pub fn degree(&self, n: usize) -> usize {
        let id = &self.nodes[n].id;
        self.edges
            .iter()
            .filter(|e| &e.source == id || &e.target == id)
            .count()
    }

    /// The degree of a node identified by id.
    pub fn degree_of(&self, id: &NodeId) -> usize {
        self.edges
            .iter()
            .filter(|e| &e.source == id || &e.target == id)
            .count()
    }
}

/// Stable integer indices for nodes and edges, with adjacency-free O(1)
/// id lookups. Built once per [`crate::prepare::prepare_graph`] call.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    node_index: HashMap<NodeId, usize>,
    edge_index: HashMap<(NodeId, NodeId, Vec<LineId>), usize>,
}

impl GraphIndex {
    /// Build stable indices over `graph`.
    ///
    /// # Errors
    /// Returns [`FormulationError::InvalidInput`] if an edge references
    /// a node id that isn't in `graph.nodes`.
    pub fn build(graph: &Graph) -> Result<Self> {
        let mut node_index = HashMap::with_capacity(graph.nodes.len());
        for (i, node) in graph.nodes.iter().enumerate() {
            node_index.insert(node.id.clone(), i);
        }

        let mut edge_index = HashMap::with_capacity(graph.edges.len());
        for (i, edge) in graph.edges.iter().enumerate() {
            if !node_index.contains_key(&edge.source) {
                return Err(FormulationError::InvalidInput(format!(
                    "edge references unknown source node {}",
                    edge.source
                )));
            }
            if !node_index.contains_key(&edge.target) {
                return Err(FormulationError::InvalidInput(format!(
                    "edge references unknown target node {}",
                    edge.target
                )));
            }
            let key = (
                edge.source.clone(),
                edge.target.clone(),
                edge.metadata.lines.clone(),
            );
            edge_index.insert(key, i);
        }

        Ok(Self {
            node_index,
            edge_index,
        })
    }

    /// The stable integer index of a node id.
    pub fn node_index(&self, id: &NodeId) -> Result<usize> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| FormulationError::InvalidInput(format!("unknown node id {id}")))
    }

    /// The stable integer index of an edge, matched by
    /// `(source, target, lines)`.
    pub fn edge_index(&self, edge: &Edge) -> Result<usize> {
        let key = (
            edge.source.clone(),
            edge.target.clone(),
            edge.metadata.lines.clone(),
        );
        self.edge_index
            .get(&key)
            .copied()
            .ok_or_else(|| FormulationError::InvalidInput("edge not found in graph".to_string()))
    }

    /// Number of indexed nodes.
    pub fn num_nodes(&self) -> usize {
        self.node_index.len()
    }

    /// Number of indexed edges.
    pub fn num_edges(&self) -> usize {
        self.edge_index.len()
    }
}
