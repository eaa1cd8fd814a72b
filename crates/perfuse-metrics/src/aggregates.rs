//! Geometric aggregates over all vessels.

use std::f64::consts::PI;

use perfuse_core::PerfuseError;
use perfuse_graph::VesselNetwork;

/// Sum of `radius * length` over all vessels, proportional to the lateral
/// surface area of the vasculature.
pub fn surface_area(net: &VesselNetwork) -> Result<f64, PerfuseError> {
    let mut area = 0.0;
    for edge in net.edge_ids() {
        area += net.radius(edge)? * net.length(edge)?;
    }
    Ok(area)
}

/// Total cylindrical volume `pi * radius^2 * length` over all vessels.
pub fn total_volume(net: &VesselNetwork) -> Result<f64, PerfuseError> {
    let mut volume = 0.0;
    for edge in net.edge_ids() {
        let radius = net.radius(edge)?;
        volume += PI * radius * radius * net.length(edge)?;
    }
    Ok(volume)
}
