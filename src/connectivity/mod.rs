//! Qubit connectivity graphs.
//!
//! An edge `(i, j)` means qubit `i` may interact with, or control, qubit `j`.
//! Edges are directed; symmetric couplings list both pairs.

pub mod rigetti;

use std::io;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{HardwareError, HardwareResult};

/// Directed coupling map over a fixed number of qubits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ConnectivityRecord", into = "ConnectivityRecord")]
pub struct QubitConnectivity {
    name: String,
    num_qubits: usize,
    /// Nodes are physical qubits, edges allowed two-qubit interactions.
    graph: DiGraph<(), ()>,
}

/// Serialized form of a [`QubitConnectivity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityRecord {
    pub name: String,
    pub num_qubits: usize,
    pub edges: Vec<(usize, usize)>,
}

impl QubitConnectivity {
    /// Builds a connectivity, rejecting out-of-range indices and self-loops.
    /// Repeated edges collapse into one.
    pub fn new(
        name: impl Into<String>,
        num_qubits: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> HardwareResult<Self> {
        let name = name.into();
        let mut checked = Vec::new();
        for (control, target) in edges {
            if control >= num_qubits || target >= num_qubits {
                return Err(HardwareError::QubitOutOfRange {
                    name,
                    control,
                    target,
                    num_qubits,
                });
            }
            if control == target {
                return Err(HardwareError::SelfLoop {
                    name,
                    qubit: control,
                });
            }
            checked.push((control, target));
        }
        Ok(Self::from_valid_edges(name, num_qubits, checked))
    }

    /// Edges must already be in range and loop-free.
    fn from_valid_edges(
        name: impl Into<String>,
        num_qubits: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut graph = DiGraph::with_capacity(num_qubits, 0);
        for _ in 0..num_qubits {
            graph.add_node(());
        }
        for (u, v) in edges {
            graph.update_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        let name = name.into();
        trace!(
            name = %name,
            num_qubits,
            edges = graph.edge_count(),
            "built qubit connectivity"
        );
        Self {
            name,
            num_qubits,
            graph,
        }
    }

    /// Every ordered pair of distinct qubits.
    pub fn all_to_all(num_qubits: usize) -> Self {
        let edges = (0..num_qubits)
            .flat_map(|i| (0..num_qubits).filter(move |&j| j != i).map(move |j| (i, j)));
        Self::from_valid_edges("all2all", num_qubits, edges)
    }

    /// Nearest neighbours on a line, both directions.
    pub fn line(num_qubits: usize) -> Self {
        let edges = (1..num_qubits).flat_map(|i| [(i - 1, i), (i, i - 1)]);
        Self::from_valid_edges("line", num_qubits, edges)
    }

    /// Reads a headerless `control,target` CSV edge list. Lines starting with
    /// `#` are ignored.
    pub fn from_csv<R: io::Read>(
        name: impl Into<String>,
        num_qubits: usize,
        reader: R,
    ) -> HardwareResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);
        let mut edges = Vec::new();
        for record in rdr.deserialize::<(usize, usize)>() {
            edges.push(record?);
        }
        Self::new(name, num_qubits, edges)
    }

    /// Same qubits with every edge also present in the reverse direction.
    pub fn symmetrized(&self, name: impl Into<String>) -> Self {
        let edges = self
            .edges()
            .into_iter()
            .flat_map(|(u, v)| [(u, v), (v, u)]);
        Self::from_valid_edges(name, self.num_qubits, edges)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Whether qubit `i` may interact with qubit `j`. Out-of-range indices are
    /// never connected.
    pub fn connected(&self, i: usize, j: usize) -> bool {
        i < self.num_qubits
            && j < self.num_qubits
            && self
                .graph
                .contains_edge(NodeIndex::new(i), NodeIndex::new(j))
    }

    /// Qubits reachable from `i` by one edge, ascending.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        if i >= self.num_qubits {
            return Vec::new();
        }
        let mut neighbors: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(i))
            .map(|n| n.index())
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// All edges, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether every edge has its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.graph
            .edge_references()
            .all(|e| self.graph.contains_edge(e.target(), e.source()))
    }

    /// Underlying graph, for routing algorithms.
    pub fn graph(&self) -> &DiGraph<(), ()> {
        &self.graph
    }
}

impl PartialEq for QubitConnectivity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.num_qubits == other.num_qubits
            && self.edges() == other.edges()
    }
}

impl TryFrom<ConnectivityRecord> for QubitConnectivity {
    type Error = HardwareError;

    fn try_from(record: ConnectivityRecord) -> HardwareResult<Self> {
        Self::new(record.name, record.num_qubits, record.edges)
    }
}

impl From<QubitConnectivity> for ConnectivityRecord {
    fn from(connectivity: QubitConnectivity) -> Self {
        Self {
            edges: connectivity.edges(),
            name: connectivity.name,
            num_qubits: connectivity.num_qubits,
        }
    }
}
