//! Keyframe sequences: sparse cumulative position updates from the oracle.

use serde::{Deserialize, Serialize};

/// Cumulative target position for one entity at one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// One discrete step of the predicted play: targets for the entities that
/// move during this step. Entities not listed keep their position from the
/// prior step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeStep {
    /// 1-based step index. Steps are ordered and contiguous with no gaps.
    pub step: u32,
    pub updates: Vec<PositionUpdate>,
}

/// Ordered sequence of keyframe steps, immutable once decoded.
///
/// May be empty (N = 0) — the canonical shape of a failed or inconclusive
/// prediction, which plays back as a single static frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyframeSequence {
    steps: Vec<KeyframeStep>,
}

impl KeyframeSequence {
    pub fn new(steps: Vec<KeyframeStep>) -> Self {
        Self { steps }
    }

    /// Number of steps (N).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[KeyframeStep] {
        &self.steps
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyframeStep> {
        self.steps.iter()
    }
}

impl From<Vec<KeyframeStep>> for KeyframeSequence {
    fn from(steps: Vec<KeyframeStep>) -> Self {
        Self { steps }
    }
}
