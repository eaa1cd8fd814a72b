#![deny(missing_docs)]
//! Core identifiers, structured errors, physical configuration, and
//! deterministic randomness shared by the perfuse network-synthesis crates.

use serde::{Deserialize, Serialize};

pub mod config;
pub mod errors;
pub mod lookup;
pub mod rng;

pub use config::Physiology;
pub use errors::{ErrorInfo, PerfuseError};
pub use lookup::find_path;
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a node within a vessel network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Identifier for a vessel (directed edge) within a vessel network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}
