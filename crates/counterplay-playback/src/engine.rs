//! The playback engine: owns animation time and produces interpolated frames.
//!
//! `PlaybackEngine` owns the playback cursor (progress in [0, 100] plus a
//! playing flag), maps progress onto a (step index, fraction) pair, and
//! interpolates between the two bracketing reconstructed snapshots. It never
//! panics and never returns errors: every input is clamped or absorbed.
//!
//! The engine has no notion of wall-clock time — the owner calls [`tick`]
//! once per rendered frame. Seeks and pauses between ticks take effect
//! before the next tick because each tick re-reads the cursor rather than
//! carrying captured state.
//!
//! [`tick`]: PlaybackEngine::tick

use counterplay_core::constants::{PROGRESS_MAX, PROGRESS_PER_TICK};
use counterplay_core::entities::{Entity, EntitySet};
use counterplay_core::enums::{TransportPhase, Verdict};
use counterplay_core::oracle::SimulationOutcome;
use counterplay_core::state::PlaybackSnapshot;

use crate::reconstruct::SnapshotTable;

/// Drives one loaded prediction sequence over an initial layout.
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    table: SnapshotTable,
    verdict: Verdict,
    progress: f64,
    playing: bool,
}

impl PlaybackEngine {
    /// Create an engine over an initial layout and a completed oracle
    /// outcome. The layout is taken by value and clamped; the caller's data
    /// is never mutated and never aliased.
    pub fn new(layout: EntitySet, outcome: &SimulationOutcome) -> Self {
        let mut layout = layout;
        layout.clamp_all();
        Self {
            table: SnapshotTable::build(&layout, &outcome.prediction_sequence),
            verdict: outcome.verdict,
            progress: 0.0,
            playing: false,
        }
    }

    /// Engine with no sequence loaded: every frame is the layout itself.
    pub fn idle(layout: EntitySet) -> Self {
        Self::new(layout, &SimulationOutcome::inconclusive())
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Number of keyframe steps loaded (N).
    pub fn step_count(&self) -> usize {
        self.table.step_count()
    }

    /// The step-0 snapshot (the initial layout).
    pub fn initial(&self) -> &EntitySet {
        self.table.at(0)
    }

    /// Transport state. `Finished` is derived: progress pinned at the end
    /// while stopped.
    pub fn phase(&self) -> TransportPhase {
        if self.playing {
            TransportPhase::Playing
        } else if self.progress >= PROGRESS_MAX {
            TransportPhase::Finished
        } else {
            TransportPhase::Stopped
        }
    }

    /// Start playback. When already at the end, restarts from 0 rather than
    /// being a no-op.
    pub fn play(&mut self) {
        if self.progress >= PROGRESS_MAX {
            self.progress = 0.0;
        }
        self.playing = true;
    }

    /// Stop at the current position. No-op while already stopped.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Jump to an absolute progress value and stop, cancelling any in-flight
    /// automatic advance. Out-of-range values clamp; NaN is treated as 0.
    pub fn seek(&mut self, progress: f64) {
        self.playing = false;
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, PROGRESS_MAX)
        };
    }

    /// Advance one animation tick. Moves time only while playing; reaching
    /// the end clamps at 100 and stops.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.progress = (self.progress + PROGRESS_PER_TICK).min(PROGRESS_MAX);
        if self.progress >= PROGRESS_MAX {
            self.playing = false;
        }
    }

    /// Map current progress to (step index, next step index, fraction).
    /// At the exact end this yields (N, N, 0) so the final frame is the
    /// step-N snapshot with no interpolation.
    fn cursor(&self) -> (usize, usize, f64) {
        let steps = self.table.step_count();
        if steps == 0 {
            return (0, 0, 0.0);
        }
        let scaled = self.progress / PROGRESS_MAX * steps as f64;
        let step_index = (scaled.floor() as usize).min(steps);
        let next_index = (step_index + 1).min(steps);
        let fraction = scaled - step_index as f64;
        (step_index, next_index, fraction)
    }

    /// The interpolated frame at the current position. Always a fresh copy;
    /// mutating it never affects engine state.
    pub fn current_frame(&self) -> EntitySet {
        let (step_index, next_index, fraction) = self.cursor();
        let start = self.table.at(step_index);
        if fraction == 0.0 || step_index == next_index {
            return start.clone();
        }
        let end = self.table.at(next_index);
        start
            .iter()
            .map(|entity| {
                // Sets are compatible across steps, so the id is normally
                // present in both; hold the start position if it is not.
                let target = end.find(&entity.id).unwrap_or(entity);
                Entity {
                    position: entity.position.lerp(target.position, fraction),
                    ..entity.clone()
                }
            })
            .collect()
    }

    /// Build the transport-facing snapshot for the current tick.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let (step_index, _, fraction) = self.cursor();
        PlaybackSnapshot {
            progress: self.progress,
            phase: self.phase(),
            step_index,
            fraction,
            verdict: self.verdict,
            entities: self.current_frame(),
        }
    }
}
