//! Enumeration types used throughout the playback stack.
//!
//! Serde rename attributes pin the wire strings of the oracle contract,
//! so these round-trip against the external service's JSON unchanged.

use serde::{Deserialize, Serialize};

/// What a tracked entity is. Decides rendering style and simulation role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[default]
    Player,
    Ball,
    GoalNet,
}

/// Team assignment. Only meaningful for players; balls and goals are neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
    #[default]
    Neutral,
}

/// Transport state of the playback engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportPhase {
    /// Not advancing; progress may be anywhere below the end.
    #[default]
    Stopped,
    /// Progress advances automatically each animation tick.
    Playing,
    /// Progress pinned at the end, playback stopped.
    Finished,
}

/// Tactical verdict attached to a prediction by the oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Goal Likely")]
    GoalLikely,
    #[serde(rename = "Defense Likely")]
    DefenseLikely,
    #[serde(rename = "No Immediate Threat")]
    NoImmediateThreat,
    /// Sentinel for oracle failure or an undecidable play.
    #[default]
    Inconclusive,
}
