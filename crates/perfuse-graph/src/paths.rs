//! Hop-distance queries over the directed network.
//!
//! Unreachable pairs are an expected outcome in a directed lattice (every
//! sink-to-source query is one), so all lookups return `Option<usize>` and
//! leave the fallback policy to the caller.

use std::collections::VecDeque;

use perfuse_core::{NodeId, PerfuseError};

use crate::network::{node_index, VesselNetwork};

/// Computes hop distances from `anchor` to every node along edge direction.
///
/// The returned vector is indexed by raw node id; `None` marks nodes the
/// anchor cannot reach.
pub fn distances_from(
    net: &VesselNetwork,
    anchor: NodeId,
) -> Result<Vec<Option<usize>>, PerfuseError> {
    bfs(net, anchor, Direction::Forward)
}

/// Computes hop distances from every node to `anchor` along edge direction.
pub fn distances_to(
    net: &VesselNetwork,
    anchor: NodeId,
) -> Result<Vec<Option<usize>>, PerfuseError> {
    bfs(net, anchor, Direction::Reverse)
}

/// Returns the hop distance from `from` to `to`, or `None` when no directed
/// path exists.
pub fn hop_distance(
    net: &VesselNetwork,
    from: NodeId,
    to: NodeId,
) -> Result<Option<usize>, PerfuseError> {
    net.node(to)?;
    Ok(distances_from(net, from)?[node_index(to)])
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

fn bfs(
    net: &VesselNetwork,
    anchor: NodeId,
    direction: Direction,
) -> Result<Vec<Option<usize>>, PerfuseError> {
    net.node(anchor)?;
    let mut dist: Vec<Option<usize>> = vec![None; net.node_count()];
    dist[node_index(anchor)] = Some(0);
    let mut queue = VecDeque::from([anchor]);
    while let Some(current) = queue.pop_front() {
        let here = dist[node_index(current)].unwrap_or(0);
        let edges = match direction {
            Direction::Forward => net.out_edges(current)?,
            Direction::Reverse => net.in_edges(current)?,
        };
        for edge in edges {
            let (tail, head) = net.endpoints(edge)?;
            let next = match direction {
                Direction::Forward => head,
                Direction::Reverse => tail,
            };
            let slot = &mut dist[node_index(next)];
            if slot.is_none() {
                *slot = Some(here + 1);
                queue.push_back(next);
            }
        }
    }
    Ok(dist)
}
