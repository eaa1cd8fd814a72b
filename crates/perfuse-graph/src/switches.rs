//! Anchor-based radius refinement.
//!
//! This pass ranks vessels by their distance balance relative to the
//! network's single designated source and sink anchors, not the source/sink
//! node sets used by distance ranking. The two notions are deliberately
//! separate: ranking runs before prep on role sets, this pass runs after
//! prep on the consolidated anchors.

use perfuse_core::{EdgeId, NodeId, PerfuseError};

use crate::network::VesselNetwork;
use crate::paths::hop_distance;

/// Computes how far a vessel sits from the center of the prepared network.
///
/// Measures the hop distance from the vessel tail to the designated source
/// and from the vessel head to the designated sink, and returns the absolute
/// difference. When a direct query has no path, the distance from the anchor
/// to the vessel's other endpoint is substituted; when that also has no
/// path, the side contributes zero.
pub fn central_difference(net: &VesselNetwork, edge: EdgeId) -> Result<usize, PerfuseError> {
    let source = net.designated_source()?;
    let sink = net.designated_sink()?;
    let (tail, head) = net.endpoints(edge)?;
    let to_source = anchor_distance(net, tail, head, source)?;
    let to_sink = anchor_distance(net, tail, head, sink)?;
    Ok(to_source.abs_diff(to_sink))
}

fn anchor_distance(
    net: &VesselNetwork,
    tail: NodeId,
    head: NodeId,
    anchor: NodeId,
) -> Result<usize, PerfuseError> {
    if let Some(direct) = hop_distance(net, tail, anchor)? {
        return Ok(direct);
    }
    Ok(hop_distance(net, anchor, head)?.unwrap_or(0))
}

/// Greedy single pass exchanging radii so central vessels end up thinner.
///
/// Visits every ordered pair of vessels that do not share a tail or a head;
/// the first partner with strictly larger central difference and strictly
/// smaller radius takes the swap, after which scanning for that vessel
/// stops. Explicitly first-match rather than best-match, and run once
/// rather than iterated to a fixed point.
///
/// Fails with a precondition error when the designated anchors are unset.
pub fn make_switches(net: &mut VesselNetwork) -> Result<(), PerfuseError> {
    net.designated_source()?;
    net.designated_sink()?;

    let edges = net.edge_ids();
    // Central differences depend only on topology, so one evaluation per
    // vessel serves the whole pass.
    let centrality: Vec<usize> = edges
        .iter()
        .map(|&edge| central_difference(net, edge))
        .collect::<Result<_, _>>()?;

    for (i, &first) in edges.iter().enumerate() {
        for (j, &second) in edges.iter().enumerate() {
            if i == j || net.edges_share_endpoint(first, second)? {
                continue;
            }
            if centrality[i] < centrality[j] && net.radius(first)? > net.radius(second)? {
                net.swap_radii(first, second)?;
                break;
            }
        }
    }
    Ok(())
}
