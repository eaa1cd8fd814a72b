//! Physical constants threaded through preparation and metric functions.

use serde::{Deserialize, Serialize};

/// Physical constants in cgs-consistent units.
///
/// Every function that needs a physical constant receives one of these
/// explicitly; there is no module-level mutable state. The defaults describe
/// the perfusion regime the synthesizer was built for: a 25 mmHg pressure
/// drop across the network and whole-blood viscosity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physiology {
    /// Pressure drop across the network, in mmHg.
    #[serde(default = "default_pressure_drop_mmhg")]
    pub pressure_drop_mmhg: f64,
    /// Conversion factor from mmHg to barye (dyn/cm^2).
    #[serde(default = "default_barye_per_mmhg")]
    pub barye_per_mmhg: f64,
    /// Dynamic viscosity of blood, in poise.
    #[serde(default = "default_viscosity")]
    pub viscosity: f64,
    /// Weight applied per unit volume when accumulating tracer mass.
    #[serde(default = "default_tracer_weight")]
    pub tracer_weight: f64,
}

fn default_pressure_drop_mmhg() -> f64 {
    25.0
}

fn default_barye_per_mmhg() -> f64 {
    133.322_387_415
}

fn default_viscosity() -> f64 {
    0.035
}

fn default_tracer_weight() -> f64 {
    65.0
}

impl Default for Physiology {
    fn default() -> Self {
        Self {
            pressure_drop_mmhg: default_pressure_drop_mmhg(),
            barye_per_mmhg: default_barye_per_mmhg(),
            viscosity: default_viscosity(),
            tracer_weight: default_tracer_weight(),
        }
    }
}

impl Physiology {
    /// Returns the pressure drop across the network in barye.
    pub fn pressure_drop(&self) -> f64 {
        self.pressure_drop_mmhg * self.barye_per_mmhg
    }
}
