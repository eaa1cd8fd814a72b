//! Edge lengths from node positions.

use perfuse_core::PerfuseError;

use crate::network::VesselNetwork;

/// Sets every vessel's length to the Euclidean distance between its
/// endpoint positions. Pure function of positions, no other side effects.
pub fn assign_lengths(net: &mut VesselNetwork) -> Result<(), PerfuseError> {
    for edge in net.edge_ids() {
        let (tail, head) = net.endpoints(edge)?;
        let a = net.position(tail)?;
        let b = net.position(head)?;
        let length = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt();
        net.set_length(edge, length)?;
    }
    Ok(())
}
