//! Transport commands sent from the UI layer to the playback loop.
//!
//! Commands are queued and take effect at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::entities::EntitySet;
use crate::oracle::SimulationOutcome;

/// All transport-level actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransportCommand {
    /// Load a fresh layout and oracle outcome, rewound to the start.
    LoadOutcome {
        layout: EntitySet,
        outcome: SimulationOutcome,
    },
    /// Begin automatic playback; restarts from 0 when already finished.
    Play,
    /// Stop at the current position. No-op while already stopped.
    Pause,
    /// Jump to an absolute progress value; out-of-range values clamp.
    Seek { progress: f64 },
    /// Discard the loaded sequence, keeping the layout as a static frame.
    ClearOutcome,
}
