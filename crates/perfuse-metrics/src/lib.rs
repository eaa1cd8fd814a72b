#![deny(missing_docs)]
//! Aggregate hemodynamic metrics over a simulation-ready vessel network.
//!
//! Every function here is a pure read of the network (and, for the tracer
//! curve, of an externally integrated solution array). Missing edge
//! attributes and undefined quotients surface as errors; nothing defaults
//! silently.

mod aggregates;
mod flow;
mod tracer;

pub use aggregates::{surface_area, total_volume};
pub use flow::{total_flow, total_resistance};
pub use tracer::{tracer_mass_curve, Solution, TracerPool};
