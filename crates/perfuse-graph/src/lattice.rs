//! Cubic lattice synthesis and the full generation pipeline.

use perfuse_core::{derive_substream_seed, NodeId, PerfuseError, Physiology, RngHandle};
use serde::{Deserialize, Serialize};

use crate::geometry::assign_lengths;
use crate::network::{Role, VesselNetwork};
use crate::prep::prep_for_simulation;
use crate::radii::{assign_gamma_radii, assign_uniform_radii, repair_radius_ordering};
use crate::ranking::assign_center_distances;

/// How radii are assigned during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RadiusPolicy {
    /// Every vessel gets the symmetric radius. Deterministic.
    Symmetric,
    /// Independent gamma draws followed by bounded ordering repair sweeps.
    Gamma {
        /// Number of full repair sweeps over vessel pairs.
        #[serde(default = "default_repair_passes")]
        repair_passes: usize,
    },
}

fn default_repair_passes() -> usize {
    2
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        RadiusPolicy::Gamma {
            repair_passes: default_repair_passes(),
        }
    }
}

/// Parameters governing vascular network generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeConfig {
    /// Lattice resolution `N`; the grid holds `N^3` interior nodes.
    pub resolution: usize,
    /// Radius assignment policy.
    #[serde(default)]
    pub policy: RadiusPolicy,
}

/// Builds the bare cubic lattice with roles assigned and edges oriented.
///
/// `N^3` nodes sit on a regular grid inside the unit cube at spacing
/// `1 / (N + 1)`, each connected to its positive-direction neighbour along
/// every axis. On the entry face (`z` layer 0) the checkerboard of nodes
/// whose `(x, y)` grid indices share parity become sources; the matching
/// `(x, y)` columns on the exit face become sinks. Any edge that would point
/// into a source or out of a sink is reversed, so flow leaves sources and
/// enters sinks.
pub fn gen_cubic_lattice(resolution: usize) -> Result<VesselNetwork, PerfuseError> {
    let mut net = VesselNetwork::new(resolution)?;
    let spacing = net.spacing();
    let n = resolution;

    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let position = [
                    spacing * (x as f64 + 1.0),
                    spacing * (y as f64 + 1.0),
                    spacing * (z as f64 + 1.0),
                ];
                net.add_node(position, Role::Interior);
            }
        }
    }

    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let here = grid_node(n, x, y, z);
                if x + 1 < n {
                    net.add_edge(here, grid_node(n, x + 1, y, z))?;
                }
                if y + 1 < n {
                    net.add_edge(here, grid_node(n, x, y + 1, z))?;
                }
                if z + 1 < n {
                    net.add_edge(here, grid_node(n, x, y, z + 1))?;
                }
            }
        }
    }

    for x in 0..n {
        for y in 0..n {
            if x % 2 != y % 2 {
                continue;
            }
            net.node_mut(grid_node(n, x, y, 0))?.role = Role::Source;
            net.node_mut(grid_node(n, x, y, n - 1))?.role = Role::Sink;
        }
    }

    for edge in net.edge_ids() {
        let (tail, head) = net.endpoints(edge)?;
        if net.role(head)? == Role::Source || net.role(tail)? == Role::Sink {
            net.reverse_edge(edge)?;
        }
    }

    Ok(net)
}

/// Runs the full generation pipeline and returns a simulation-ready network.
///
/// Build, lengths, then radii per the configured policy (the gamma policy
/// ranks vessels first so the repair sweeps have center distances to order
/// by), and finally simulation prep. The anchor-based switch pass is left to
/// the caller; it needs the prepared anchors and is an optional refinement.
pub fn gen_vascular_network(
    config: &LatticeConfig,
    physiology: &Physiology,
    rng: &mut RngHandle,
) -> Result<VesselNetwork, PerfuseError> {
    let mut net = gen_cubic_lattice(config.resolution)?;
    assign_lengths(&mut net)?;
    match config.policy {
        RadiusPolicy::Symmetric => assign_uniform_radii(&mut net)?,
        RadiusPolicy::Gamma { repair_passes } => {
            assign_center_distances(&mut net)?;
            assign_gamma_radii(&mut net, rng)?;
            repair_radius_ordering(&mut net, repair_passes)?;
        }
    }
    prep_for_simulation(&mut net, physiology)?;
    Ok(net)
}

/// Generates `count` independent networks from one master seed.
///
/// Instance `k` draws from the substream seed `derive_substream_seed(seed, k)`,
/// so a batch is reproducible as a whole and each member individually.
pub fn gen_batch(
    config: &LatticeConfig,
    physiology: &Physiology,
    master_seed: u64,
    count: usize,
) -> Result<Vec<VesselNetwork>, PerfuseError> {
    (0..count)
        .map(|instance| {
            let seed = derive_substream_seed(master_seed, instance as u64);
            let mut rng = RngHandle::from_seed(seed);
            gen_vascular_network(config, physiology, &mut rng)
        })
        .collect()
}

fn grid_node(resolution: usize, x: usize, y: usize, z: usize) -> NodeId {
    NodeId::from_raw(((x * resolution + y) * resolution + z) as u64)
}
