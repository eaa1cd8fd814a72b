//! Distance ranking of vessels relative to the source and sink node sets.

use perfuse_core::PerfuseError;

use crate::network::{node_index, Role, VesselNetwork};
use crate::paths::{distances_from, distances_to};

/// Annotates every vessel with `src_dist`, `sink_dist`, and `center_dist`.
///
/// `src_dist` is the minimum hop distance from any source-role node to the
/// vessel tail; `sink_dist` is the minimum hop distance from the vessel head
/// to any sink-role node. A side with no reachable anchor falls back to
/// zero. One distance map is computed per anchor node and shared across all
/// vessels.
pub fn assign_center_distances(net: &mut VesselNetwork) -> Result<(), PerfuseError> {
    let source_maps: Vec<Vec<Option<usize>>> = net
        .nodes_with_role(Role::Source)
        .into_iter()
        .map(|anchor| distances_from(net, anchor))
        .collect::<Result<_, _>>()?;
    let sink_maps: Vec<Vec<Option<usize>>> = net
        .nodes_with_role(Role::Sink)
        .into_iter()
        .map(|anchor| distances_to(net, anchor))
        .collect::<Result<_, _>>()?;

    for edge in net.edge_ids() {
        let (tail, head) = net.endpoints(edge)?;
        let src_dist = nearest(&source_maps, node_index(tail));
        let sink_dist = nearest(&sink_maps, node_index(head));
        net.set_rank_distances(edge, src_dist, sink_dist)?;
    }
    Ok(())
}

fn nearest(maps: &[Vec<Option<usize>>], node: usize) -> usize {
    maps.iter()
        .filter_map(|map| map[node])
        .min()
        .unwrap_or(0)
}
