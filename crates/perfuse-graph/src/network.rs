use std::collections::BTreeSet;

use perfuse_core::errors::{ErrorInfo, PerfuseError};
use perfuse_core::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Role tag assigned to every node at construction time.
///
/// Roles control edge direction during lattice synthesis and select the
/// anchor sets used by distance ranking. They are distinct from the
/// network's designated aggregate [`source`](VesselNetwork::source) and
/// [`sink`](VesselNetwork::sink), which are single node identifiers set by
/// simulation prep and consumed by the flow metric and the switch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A bulk grid node.
    Interior,
    /// An inlet node on the entry face.
    Source,
    /// An outlet node on the exit face.
    Sink,
}

/// Scalar attributes attached to a vessel.
///
/// Every field starts unset; each pipeline stage fills in the attributes it
/// owns. Reading an unset attribute through the typed accessors fails with a
/// `missing-attribute` error rather than defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VesselAttributes {
    /// Euclidean length between endpoint positions.
    pub length: Option<f64>,
    /// Vessel radius.
    pub radius: Option<f64>,
    /// Cylinder volume, set by simulation prep.
    pub volume: Option<f64>,
    /// Reciprocal of the transit time through the vessel, set by prep.
    pub inverse_transit_time: Option<f64>,
    /// Index of this vessel within the external simulation state vector.
    pub state_index: Option<usize>,
    /// Hop distance from the nearest source-role node to the vessel tail.
    pub src_dist: Option<usize>,
    /// Hop distance from the vessel head to the nearest sink-role node.
    pub sink_dist: Option<usize>,
    /// Absolute difference of `src_dist` and `sink_dist`.
    pub center_dist: Option<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeRecord {
    pub(crate) position: [f64; 3],
    pub(crate) role: Role,
    pub(crate) in_edges: BTreeSet<EdgeId>,
    pub(crate) out_edges: BTreeSet<EdgeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct VesselRecord {
    pub(crate) tail: NodeId,
    pub(crate) head: NodeId,
    pub(crate) attrs: VesselAttributes,
}

/// Directed vessel network over positioned, role-tagged nodes.
///
/// The network is the single mutable aggregate of the pipeline: lattice
/// synthesis builds it, the geometry, ranking, radius, and prep stages
/// annotate it, and the metric functions read it.
#[derive(Debug, Clone)]
pub struct VesselNetwork {
    pub(crate) resolution: usize,
    pub(crate) spacing: f64,
    pub(crate) source: Option<NodeId>,
    pub(crate) sink: Option<NodeId>,
    pub(crate) nodes: Vec<NodeRecord>,
    pub(crate) edges: Vec<VesselRecord>,
}

impl VesselNetwork {
    /// Creates an empty network for the given lattice resolution.
    pub fn new(resolution: usize) -> Result<Self, PerfuseError> {
        if resolution == 0 {
            return Err(PerfuseError::Parameter(
                ErrorInfo::new(
                    "non-positive-resolution",
                    "lattice resolution must be at least one",
                )
                .with_context("resolution", resolution.to_string()),
            ));
        }
        Ok(Self {
            resolution,
            spacing: 1.0 / (resolution as f64 + 1.0),
            source: None,
            sink: None,
            nodes: Vec::new(),
            edges: Vec::new(),
        })
    }

    /// Returns the lattice resolution `N`.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns the grid spacing `1 / (N + 1)`.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the designated aggregate source, if prep has set one.
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// Returns the designated aggregate sink, if prep has set one.
    pub fn sink(&self) -> Option<NodeId> {
        self.sink
    }

    /// Returns the designated source or a precondition error when unset.
    pub fn designated_source(&self) -> Result<NodeId, PerfuseError> {
        self.source.ok_or_else(|| {
            PerfuseError::Precondition(
                ErrorInfo::new(
                    "missing-source-anchor",
                    "the aggregate source has not been designated",
                )
                .with_hint("run prep_for_simulation before anchor-based operations"),
            )
        })
    }

    /// Returns the designated sink or a precondition error when unset.
    pub fn designated_sink(&self) -> Result<NodeId, PerfuseError> {
        self.sink.ok_or_else(|| {
            PerfuseError::Precondition(
                ErrorInfo::new(
                    "missing-sink-anchor",
                    "the aggregate sink has not been designated",
                )
                .with_hint("run prep_for_simulation before anchor-based operations"),
            )
        })
    }

    /// Designates the aggregate source and sink anchors.
    pub fn set_anchors(&mut self, source: NodeId, sink: NodeId) -> Result<(), PerfuseError> {
        self.node(source)?;
        self.node(sink)?;
        self.source = Some(source);
        self.sink = Some(sink);
        Ok(())
    }

    /// Adds a node with the given position and role, returning its id.
    pub fn add_node(&mut self, position: [f64; 3], role: Role) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u64);
        self.nodes.push(NodeRecord {
            position,
            role,
            in_edges: BTreeSet::new(),
            out_edges: BTreeSet::new(),
        });
        id
    }

    /// Adds a directed vessel from `tail` to `head`.
    pub fn add_edge(&mut self, tail: NodeId, head: NodeId) -> Result<EdgeId, PerfuseError> {
        if tail == head {
            return Err(graph_error("self-loop", "vessels must join distinct nodes")
                .with_context("node", tail.as_raw()));
        }
        self.node(head)?;
        for existing in &self.node(tail)?.out_edges {
            if self.edges[edge_index(*existing)].head == head {
                return Err(graph_error("duplicate-edge", "vessel already exists")
                    .with_context("tail", tail.as_raw())
                    .with_context("head", head.as_raw()));
            }
        }
        let id = EdgeId::from_raw(self.edges.len() as u64);
        self.edges.push(VesselRecord {
            tail,
            head,
            attrs: VesselAttributes::default(),
        });
        self.node_mut(tail)?.out_edges.insert(id);
        self.node_mut(head)?.in_edges.insert(id);
        Ok(id)
    }

    /// Reverses the direction of a vessel in place, keeping its attributes.
    pub fn reverse_edge(&mut self, edge: EdgeId) -> Result<(), PerfuseError> {
        let (tail, head) = self.endpoints(edge)?;
        self.node_mut(tail)?.out_edges.remove(&edge);
        self.node_mut(head)?.in_edges.remove(&edge);
        let record = &mut self.edges[edge_index(edge)];
        record.tail = head;
        record.head = tail;
        self.node_mut(head)?.out_edges.insert(edge);
        self.node_mut(tail)?.in_edges.insert(edge);
        Ok(())
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of vessels.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns all node identifiers in id order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(|idx| NodeId::from_raw(idx as u64))
            .collect()
    }

    /// Returns all vessel identifiers in id order.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        (0..self.edges.len())
            .map(|idx| EdgeId::from_raw(idx as u64))
            .collect()
    }

    /// Returns the `(tail, head)` endpoints of a vessel.
    pub fn endpoints(&self, edge: EdgeId) -> Result<(NodeId, NodeId), PerfuseError> {
        let record = self.edge(edge)?;
        Ok((record.tail, record.head))
    }

    /// Returns the position of a node.
    pub fn position(&self, node: NodeId) -> Result<[f64; 3], PerfuseError> {
        Ok(self.node(node)?.position)
    }

    /// Returns the role of a node.
    pub fn role(&self, node: NodeId) -> Result<Role, PerfuseError> {
        Ok(self.node(node)?.role)
    }

    /// Returns every node carrying the given role, in id order.
    pub fn nodes_with_role(&self, role: Role) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, record)| record.role == role)
            .map(|(idx, _)| NodeId::from_raw(idx as u64))
            .collect()
    }

    /// Returns the vessels leaving a node.
    pub fn out_edges(&self, node: NodeId) -> Result<Vec<EdgeId>, PerfuseError> {
        Ok(self.node(node)?.out_edges.iter().copied().collect())
    }

    /// Returns the vessels entering a node.
    pub fn in_edges(&self, node: NodeId) -> Result<Vec<EdgeId>, PerfuseError> {
        Ok(self.node(node)?.in_edges.iter().copied().collect())
    }

    /// Returns true when two vessels share a tail or share a head.
    pub fn edges_share_endpoint(
        &self,
        first: EdgeId,
        second: EdgeId,
    ) -> Result<bool, PerfuseError> {
        let a = self.edge(first)?;
        let b = self.edge(second)?;
        Ok(a.tail == b.tail || a.head == b.head)
    }

    /// Returns the vessel length.
    pub fn length(&self, edge: EdgeId) -> Result<f64, PerfuseError> {
        require_attr(edge, self.edge(edge)?.attrs.length, "length")
    }

    /// Returns the vessel radius.
    pub fn radius(&self, edge: EdgeId) -> Result<f64, PerfuseError> {
        require_attr(edge, self.edge(edge)?.attrs.radius, "radius")
    }

    /// Returns the vessel volume.
    pub fn volume(&self, edge: EdgeId) -> Result<f64, PerfuseError> {
        require_attr(edge, self.edge(edge)?.attrs.volume, "volume")
    }

    /// Returns the reciprocal transit time of the vessel.
    pub fn inverse_transit_time(&self, edge: EdgeId) -> Result<f64, PerfuseError> {
        require_attr(
            edge,
            self.edge(edge)?.attrs.inverse_transit_time,
            "inverse_transit_time",
        )
    }

    /// Returns the vessel's index into the external state vector.
    pub fn state_index(&self, edge: EdgeId) -> Result<usize, PerfuseError> {
        require_attr(edge, self.edge(edge)?.attrs.state_index, "state_index")
    }

    /// Returns the hop distance from the nearest source-role node.
    pub fn src_dist(&self, edge: EdgeId) -> Result<usize, PerfuseError> {
        require_attr(edge, self.edge(edge)?.attrs.src_dist, "src_dist")
    }

    /// Returns the hop distance to the nearest sink-role node.
    pub fn sink_dist(&self, edge: EdgeId) -> Result<usize, PerfuseError> {
        require_attr(edge, self.edge(edge)?.attrs.sink_dist, "sink_dist")
    }

    /// Returns the vessel's center distance.
    pub fn center_dist(&self, edge: EdgeId) -> Result<usize, PerfuseError> {
        require_attr(edge, self.edge(edge)?.attrs.center_dist, "center_dist")
    }

    /// Sets the vessel length.
    pub fn set_length(&mut self, edge: EdgeId, length: f64) -> Result<(), PerfuseError> {
        self.edge_mut(edge)?.attrs.length = Some(length);
        Ok(())
    }

    /// Sets the vessel radius.
    pub fn set_radius(&mut self, edge: EdgeId, radius: f64) -> Result<(), PerfuseError> {
        self.edge_mut(edge)?.attrs.radius = Some(radius);
        Ok(())
    }

    /// Sets the vessel volume.
    pub fn set_volume(&mut self, edge: EdgeId, volume: f64) -> Result<(), PerfuseError> {
        self.edge_mut(edge)?.attrs.volume = Some(volume);
        Ok(())
    }

    /// Sets the reciprocal transit time of the vessel.
    pub fn set_inverse_transit_time(
        &mut self,
        edge: EdgeId,
        value: f64,
    ) -> Result<(), PerfuseError> {
        self.edge_mut(edge)?.attrs.inverse_transit_time = Some(value);
        Ok(())
    }

    /// Sets the vessel's index into the external state vector.
    pub fn set_state_index(&mut self, edge: EdgeId, index: usize) -> Result<(), PerfuseError> {
        self.edge_mut(edge)?.attrs.state_index = Some(index);
        Ok(())
    }

    /// Records the ranking distances for a vessel.
    ///
    /// `center_dist` is derived here as `|src_dist - sink_dist|` so the
    /// identity between the three attributes holds by construction.
    pub fn set_rank_distances(
        &mut self,
        edge: EdgeId,
        src_dist: usize,
        sink_dist: usize,
    ) -> Result<(), PerfuseError> {
        let attrs = &mut self.edge_mut(edge)?.attrs;
        attrs.src_dist = Some(src_dist);
        attrs.sink_dist = Some(sink_dist);
        attrs.center_dist = Some(src_dist.abs_diff(sink_dist));
        Ok(())
    }

    /// Exchanges the radii of two vessels.
    pub fn swap_radii(&mut self, first: EdgeId, second: EdgeId) -> Result<(), PerfuseError> {
        let r_first = self.radius(first)?;
        let r_second = self.radius(second)?;
        self.edge_mut(first)?.attrs.radius = Some(r_second);
        self.edge_mut(second)?.attrs.radius = Some(r_first);
        Ok(())
    }

    /// Returns a clone of a vessel's full attribute set.
    pub fn attributes(&self, edge: EdgeId) -> Result<VesselAttributes, PerfuseError> {
        Ok(self.edge(edge)?.attrs.clone())
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&NodeRecord, PerfuseError> {
        self.nodes.get(node_index(id)).ok_or_else(|| {
            graph_error("unknown-node", "node does not exist").with_context("node", id.as_raw())
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeRecord, PerfuseError> {
        self.nodes.get_mut(node_index(id)).ok_or_else(|| {
            graph_error("unknown-node", "node does not exist").with_context("node", id.as_raw())
        })
    }

    pub(crate) fn edge(&self, id: EdgeId) -> Result<&VesselRecord, PerfuseError> {
        self.edges.get(edge_index(id)).ok_or_else(|| {
            graph_error("unknown-edge", "vessel does not exist").with_context("edge", id.as_raw())
        })
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Result<&mut VesselRecord, PerfuseError> {
        self.edges.get_mut(edge_index(id)).ok_or_else(|| {
            graph_error("unknown-edge", "vessel does not exist").with_context("edge", id.as_raw())
        })
    }
}

pub(crate) fn node_index(id: NodeId) -> usize {
    id.as_raw() as usize
}

pub(crate) fn edge_index(id: EdgeId) -> usize {
    id.as_raw() as usize
}

fn require_attr<T>(edge: EdgeId, value: Option<T>, attribute: &str) -> Result<T, PerfuseError> {
    value.ok_or_else(|| {
        graph_error("missing-attribute", "vessel attribute has not been assigned")
            .with_context("edge", edge.as_raw())
            .with_context("attribute", attribute)
    })
}

fn graph_error(code: impl Into<String>, message: impl Into<String>) -> PerfuseError {
    PerfuseError::Graph(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> PerfuseError;
}

impl ContextExt for PerfuseError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> PerfuseError {
        match self {
            PerfuseError::Graph(info) => {
                PerfuseError::Graph(info.with_context(key, value.to_string()))
            }
            other => other,
        }
    }
}
