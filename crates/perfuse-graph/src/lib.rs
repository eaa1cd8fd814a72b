#![deny(missing_docs)]
//! Vessel network synthesis.
//!
//! Builds 3D cubic-lattice vascular networks with distributed sources and
//! sinks, ranks vessels by their distance balance between the two faces,
//! assigns radii (uniform or gamma-distributed with ordering repair),
//! refines radii against the prepared aggregate anchors, and prepares the
//! network for an external transport simulation. Networks persist to JSON
//! or compact bytes with full attribute fidelity.

mod geometry;
mod hash;
mod lattice;
mod network;
mod paths;
mod prep;
mod radii;
mod ranking;
mod serialization;
mod switches;

pub use geometry::assign_lengths;
pub use hash::canonical_hash;
pub use lattice::{
    gen_batch, gen_cubic_lattice, gen_vascular_network, LatticeConfig, RadiusPolicy,
};
pub use network::{Role, VesselAttributes, VesselNetwork};
pub use paths::{distances_from, distances_to, hop_distance};
pub use prep::prep_for_simulation;
pub use radii::{
    assign_gamma_radii, assign_uniform_radii, repair_radius_ordering, symmetric_radius,
};
pub use ranking::assign_center_distances;
pub use serialization::{
    network_from_bytes, network_from_json, network_to_bytes, network_to_json,
};
pub use switches::{central_difference, make_switches};
