//! Playback snapshot — the complete per-tick view sent to the transport UI.

use serde::{Deserialize, Serialize};

use crate::entities::EntitySet;
use crate::enums::{TransportPhase, Verdict};

/// Everything the transport UI needs to draw one frame: the interpolated
/// entity layout plus the cursor state behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Playback position in [0, 100].
    pub progress: f64,
    pub phase: TransportPhase,
    /// Index of the keyframe step at or below the current position.
    pub step_index: usize,
    /// Interpolation fraction toward the next step, in [0, 1).
    pub fraction: f64,
    pub verdict: Verdict,
    /// Fully-resolved entity layout at the current position.
    pub entities: EntitySet,
}
