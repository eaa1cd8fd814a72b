use perfuse_core::errors::{ErrorInfo, PerfuseError};
use perfuse_core::NodeId;
use serde::{Deserialize, Serialize};

use crate::network::{Role, VesselAttributes, VesselNetwork};

/// Serializes the network to a compact binary representation using `bincode`.
pub fn network_to_bytes(net: &VesselNetwork) -> Result<Vec<u8>, PerfuseError> {
    let serializable = SerializableNetwork::from_network(net);
    bincode::serialize(&serializable)
        .map_err(|err| PerfuseError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a network from its binary representation.
pub fn network_from_bytes(bytes: &[u8]) -> Result<VesselNetwork, PerfuseError> {
    let serializable: SerializableNetwork = bincode::deserialize(bytes)
        .map_err(|err| PerfuseError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_network()
}

/// Serializes the network to a JSON string.
pub fn network_to_json(net: &VesselNetwork) -> Result<String, PerfuseError> {
    let serializable = SerializableNetwork::from_network(net);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| PerfuseError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a network from a JSON string.
pub fn network_from_json(json: &str) -> Result<VesselNetwork, PerfuseError> {
    let serializable: SerializableNetwork = serde_json::from_str(json)
        .map_err(|err| PerfuseError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_network()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableNetwork {
    resolution: usize,
    spacing: f64,
    source: Option<u64>,
    sink: Option<u64>,
    nodes: Vec<SerializableNode>,
    edges: Vec<SerializableVessel>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableNode {
    position: [f64; 3],
    role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableVessel {
    tail: u64,
    head: u64,
    attrs: VesselAttributes,
}

impl SerializableNetwork {
    fn from_network(net: &VesselNetwork) -> Self {
        let nodes = net
            .nodes
            .iter()
            .map(|record| SerializableNode {
                position: record.position,
                role: record.role,
            })
            .collect();
        let edges = net
            .edges
            .iter()
            .map(|record| SerializableVessel {
                tail: record.tail.as_raw(),
                head: record.head.as_raw(),
                attrs: record.attrs.clone(),
            })
            .collect();
        Self {
            resolution: net.resolution,
            spacing: net.spacing,
            source: net.source.map(|id| id.as_raw()),
            sink: net.sink.map(|id| id.as_raw()),
            nodes,
            edges,
        }
    }

    fn into_network(self) -> Result<VesselNetwork, PerfuseError> {
        let mut net = VesselNetwork::new(self.resolution)?;
        net.spacing = self.spacing;
        for node in self.nodes {
            net.add_node(node.position, node.role);
        }
        for edge in self.edges {
            let id = net.add_edge(NodeId::from_raw(edge.tail), NodeId::from_raw(edge.head))?;
            net.edge_mut(id)?.attrs = edge.attrs;
        }
        net.source = self.source.map(NodeId::from_raw);
        net.sink = self.sink.map(NodeId::from_raw);
        if let Some(anchor) = net.source {
            net.node(anchor)?;
        }
        if let Some(anchor) = net.sink {
            net.node(anchor)?;
        }
        Ok(net)
    }
}
