//! Volumetric flow and lumped resistance.

use perfuse_core::errors::ErrorInfo;
use perfuse_core::{PerfuseError, Physiology};
use perfuse_graph::VesselNetwork;

/// Total volumetric flow rate leaving the designated aggregate source.
///
/// Sums `inverse_transit_time * volume` over the source's outgoing vessels.
/// Requires the network to be prepared (anchors designated, per-vessel
/// volume and transit time assigned).
pub fn total_flow(net: &VesselNetwork) -> Result<f64, PerfuseError> {
    let source = net.designated_source()?;
    let mut flow = 0.0;
    for edge in net.out_edges(source)? {
        flow += net.inverse_transit_time(edge)? * net.volume(edge)?;
    }
    Ok(flow)
}

/// Lumped network resistance: configured pressure drop over total flow.
///
/// A network with exactly zero flow has no defined resistance; that case is
/// surfaced as a `zero-flow` metric error rather than an infinity.
pub fn total_resistance(
    net: &VesselNetwork,
    physiology: &Physiology,
) -> Result<f64, PerfuseError> {
    let flow = total_flow(net)?;
    if flow == 0.0 {
        return Err(PerfuseError::Metric(
            ErrorInfo::new(
                "zero-flow",
                "total resistance is undefined when total flow is zero",
            )
            .with_hint("check that the network is connected and prepared"),
        ));
    }
    Ok(physiology.pressure_drop() / flow)
}
