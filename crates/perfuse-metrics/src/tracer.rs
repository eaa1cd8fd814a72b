//! Tracer mass accumulation from an external simulation solution.

use perfuse_core::errors::ErrorInfo;
use perfuse_core::{PerfuseError, Physiology};
use perfuse_graph::VesselNetwork;
use serde::{Deserialize, Serialize};

/// Which segment of the simulation state vector to accumulate.
///
/// The external transport system lays its state out as `[0, E)` free
/// tracer, `[E, 2E)` bound tracer, and optionally `[2E, 3E)` liposome-borne
/// tracer, where `E` is the vessel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TracerPool {
    /// The bound-tracer segment starting at offset `E`.
    Bound,
    /// The liposome segment starting at offset `2E`.
    Liposome,
}

/// Dense row-major solution array produced by an external integrator.
///
/// Row `t` holds the full state vector at `times[t]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    times: Vec<f64>,
    states: Vec<f64>,
    state_width: usize,
}

impl Solution {
    /// Wraps a flat state array, validating its shape.
    pub fn new(
        times: Vec<f64>,
        states: Vec<f64>,
        state_width: usize,
    ) -> Result<Self, PerfuseError> {
        if times.len() * state_width != states.len() {
            return Err(PerfuseError::Parameter(
                ErrorInfo::new(
                    "solution-shape-mismatch",
                    "state array length must equal time steps times state width",
                )
                .with_context("time_steps", times.len().to_string())
                .with_context("state_width", state_width.to_string())
                .with_context("states", states.len().to_string()),
            ));
        }
        Ok(Self {
            times,
            states,
            state_width,
        })
    }

    /// Returns the time values, one per solution row.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of time steps.
    pub fn step_count(&self) -> usize {
        self.times.len()
    }

    /// Returns the width of each state row.
    pub fn state_width(&self) -> usize {
        self.state_width
    }

    fn value(&self, step: usize, state: usize) -> f64 {
        self.states[step * self.state_width + state]
    }
}

/// Computes the tracer mass curve W(t) across the whole network.
///
/// For every time step, accumulates `tracer_weight * volume * state` over
/// all vessels, reading each vessel's entry of the selected pool through
/// its `state_index`. The output has one value per solution time step.
pub fn tracer_mass_curve(
    net: &VesselNetwork,
    physiology: &Physiology,
    soln: &Solution,
    pool: TracerPool,
) -> Result<Vec<f64>, PerfuseError> {
    let edge_total = net.edge_count();
    let offset = match pool {
        TracerPool::Bound => edge_total,
        TracerPool::Liposome => 2 * edge_total,
    };
    if soln.state_width() < offset + edge_total {
        return Err(PerfuseError::Metric(
            ErrorInfo::new(
                "state-width-mismatch",
                "solution rows are too narrow for the selected tracer pool",
            )
            .with_context("state_width", soln.state_width().to_string())
            .with_context("required", (offset + edge_total).to_string()),
        ));
    }

    let mut curve = vec![0.0; soln.step_count()];
    for edge in net.edge_ids() {
        let volume = net.volume(edge)?;
        let index = net.state_index(edge)?;
        if index >= edge_total {
            return Err(PerfuseError::Metric(
                ErrorInfo::new(
                    "state-index-out-of-range",
                    "vessel state index exceeds the per-pool segment length",
                )
                .with_context("edge", edge.as_raw().to_string())
                .with_context("state_index", index.to_string())
                .with_context("edges", edge_total.to_string()),
            ));
        }
        for (step, value) in curve.iter_mut().enumerate() {
            *value += physiology.tracer_weight * volume * soln.value(step, offset + index);
        }
    }
    Ok(curve)
}
