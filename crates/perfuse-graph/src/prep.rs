//! Simulation preparation: anchor consolidation and per-vessel state.
//!
//! The direction rule of lattice synthesis binds the synthesized grid; the
//! consolidation edges added here exist purely to attach the aggregate
//! anchors that the flow metric and the switch pass operate on.

use std::f64::consts::PI;

use perfuse_core::errors::ErrorInfo;
use perfuse_core::{PerfuseError, Physiology};

use crate::network::{Role, VesselNetwork};
use crate::radii::symmetric_radius;

/// Converts an annotated network into a simulation-ready one.
///
/// Adds a super-source feeding every source-role node and a super-sink
/// drained by every sink-role node, designates the pair as the network's
/// aggregate anchors, then fills in per-vessel `volume`,
/// `inverse_transit_time`, and a contiguous `state_index` covering every
/// vessel, consolidation edges included. Requires radii and lengths to be
/// assigned; fails fast on a network that already has anchors.
pub fn prep_for_simulation(
    net: &mut VesselNetwork,
    physiology: &Physiology,
) -> Result<(), PerfuseError> {
    if net.source().is_some() || net.sink().is_some() {
        return Err(PerfuseError::Precondition(ErrorInfo::new(
            "already-prepared",
            "the network already has designated anchors",
        )));
    }

    let inlets = net.nodes_with_role(Role::Source);
    let outlets = net.nodes_with_role(Role::Sink);
    let spacing = net.spacing();
    let feed_radius = symmetric_radius(net.resolution());

    let source = net.add_node([0.5, 0.5, 0.0], Role::Source);
    let sink = net.add_node([0.5, 0.5, 1.0], Role::Sink);
    for inlet in inlets {
        let edge = net.add_edge(source, inlet)?;
        net.set_length(edge, spacing)?;
        net.set_radius(edge, feed_radius)?;
    }
    for outlet in outlets {
        let edge = net.add_edge(outlet, sink)?;
        net.set_length(edge, spacing)?;
        net.set_radius(edge, feed_radius)?;
    }
    net.set_anchors(source, sink)?;

    let pressure_drop = physiology.pressure_drop();
    for (index, edge) in net.edge_ids().into_iter().enumerate() {
        let radius = net.radius(edge)?;
        let length = net.length(edge)?;
        net.set_volume(edge, PI * radius * radius * length)?;
        // Plug flow at the Poiseuille mean velocity v = r^2 dp / (8 mu L),
        // hence 1/tau = v / L.
        net.set_inverse_transit_time(
            edge,
            radius * radius * pressure_drop / (8.0 * physiology.viscosity * length * length),
        )?;
        net.set_state_index(edge, index)?;
    }
    Ok(())
}
