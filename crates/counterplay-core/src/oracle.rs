//! Decode boundary for the prediction oracle's JSON result.
//!
//! The oracle (an external generative service) returns a complete simulation
//! outcome as JSON. Failures never propagate into the playback core: a
//! malformed response decodes to the canonical inconclusive outcome with an
//! empty sequence, which plays back as a single static frame.

use serde::{Deserialize, Serialize};

use crate::enums::Verdict;
use crate::sequence::KeyframeSequence;

/// Complete oracle result for one counterfactual simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    /// Tactical breakdown prose.
    pub analysis: String,
    pub verdict: Verdict,
    /// How the edited positions cascade through the play.
    pub butterfly_effect: String,
    #[serde(default)]
    pub original_win_probability: f64,
    #[serde(default)]
    pub new_win_probability: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grounding_urls: Vec<String>,
    /// Predicted keyframe steps. Empty on failure or an undecidable play.
    #[serde(default)]
    pub prediction_sequence: KeyframeSequence,
}

impl SimulationOutcome {
    /// Canonical substitute when the oracle fails or returns garbage.
    pub fn inconclusive() -> Self {
        Self {
            analysis: "Error analyzing the simulation.".to_string(),
            verdict: Verdict::Inconclusive,
            butterfly_effect: "The simulation engine encountered a data mismatch.".to_string(),
            original_win_probability: 0.0,
            new_win_probability: 0.0,
            grounding_urls: Vec::new(),
            prediction_sequence: KeyframeSequence::default(),
        }
    }
}

/// Decode an oracle response. Never fails: malformed JSON or a schema
/// violation yields the canonical inconclusive outcome.
pub fn decode_outcome(json: &str) -> SimulationOutcome {
    match serde_json::from_str(json) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("failed to decode oracle response, substituting inconclusive: {err}");
            SimulationOutcome::inconclusive()
        }
    }
}
