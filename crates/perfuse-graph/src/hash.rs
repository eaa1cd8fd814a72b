use perfuse_core::PerfuseError;
use sha2::{Digest, Sha256};

use crate::network::{Role, VesselNetwork};

/// Computes the canonical structural hash for the provided network.
///
/// Covers the graph-level attributes, every node position and role, and
/// every vessel's endpoints and scalar attributes (floats by bit pattern),
/// so two networks hash equal exactly when they are attribute-for-attribute
/// identical.
pub fn canonical_hash(net: &VesselNetwork) -> Result<String, PerfuseError> {
    let mut hasher = Sha256::new();
    hasher.update((net.resolution() as u64).to_le_bytes());
    hasher.update(net.spacing().to_bits().to_le_bytes());
    encode_option_u64("source", net.source().map(|id| id.as_raw()), &mut hasher);
    encode_option_u64("sink", net.sink().map(|id| id.as_raw()), &mut hasher);

    hasher.update((net.node_count() as u64).to_le_bytes());
    for node in net.node_ids() {
        for coordinate in net.position(node)? {
            hasher.update(coordinate.to_bits().to_le_bytes());
        }
        hasher.update([role_tag(net.role(node)?)]);
    }

    hasher.update((net.edge_count() as u64).to_le_bytes());
    for edge in net.edge_ids() {
        let (tail, head) = net.endpoints(edge)?;
        hasher.update(tail.as_raw().to_le_bytes());
        hasher.update(head.as_raw().to_le_bytes());
        let attrs = net.attributes(edge)?;
        encode_option_f64("length", attrs.length, &mut hasher);
        encode_option_f64("radius", attrs.radius, &mut hasher);
        encode_option_f64("volume", attrs.volume, &mut hasher);
        encode_option_f64("itt", attrs.inverse_transit_time, &mut hasher);
        encode_option_u64("idx", attrs.state_index.map(|v| v as u64), &mut hasher);
        encode_option_u64("src", attrs.src_dist.map(|v| v as u64), &mut hasher);
        encode_option_u64("sink", attrs.sink_dist.map(|v| v as u64), &mut hasher);
        encode_option_u64("center", attrs.center_dist.map(|v| v as u64), &mut hasher);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

fn role_tag(role: Role) -> u8 {
    match role {
        Role::Interior => 0,
        Role::Source => 1,
        Role::Sink => 2,
    }
}

fn encode_option_u64(label: &str, value: Option<u64>, hasher: &mut Sha256) {
    match value {
        Some(v) => {
            hasher.update(label.as_bytes());
            hasher.update(b":some");
            hasher.update(v.to_le_bytes());
        }
        None => {
            hasher.update(label.as_bytes());
            hasher.update(b":none");
        }
    }
}

fn encode_option_f64(label: &str, value: Option<f64>, hasher: &mut Sha256) {
    encode_option_u64(label, value.map(f64::to_bits), hasher)
}
