//! State reconstruction: fold sparse cumulative updates into full snapshots.
//!
//! Read-only with respect to its inputs — every snapshot handed out is a
//! fresh copy of the initial layout with updates applied.

use counterplay_core::entities::EntitySet;
use counterplay_core::sequence::{KeyframeSequence, KeyframeStep};
use counterplay_core::types::Position;

/// Apply one step's updates in place. Updates naming ids absent from the
/// working set are skipped; target coordinates clamp to [0, 100].
fn apply_step(state: &mut EntitySet, step: &KeyframeStep) {
    for update in &step.updates {
        match state.find_mut(&update.id) {
            Some(entity) => entity.position = Position::new(update.x, update.y),
            None => log::debug!(
                "keyframe step {} update for unknown entity {:?} skipped",
                step.step,
                update.id
            ),
        }
    }
}

/// Compute the full entity snapshot after `at_step` keyframe steps.
///
/// `at_step` clamps to `[0, N]`. Step 0 is the initial layout itself,
/// returned as a fresh copy. Entities not named by any applied step keep
/// their prior position. Pure: repeated calls with the same arguments yield
/// bit-identical results.
pub fn reconstruct(initial: &EntitySet, sequence: &KeyframeSequence, at_step: usize) -> EntitySet {
    let at_step = at_step.min(sequence.len());
    let mut state = initial.clone();
    for step in &sequence.steps()[..at_step] {
        apply_step(&mut state, step);
    }
    state
}

/// Cumulative snapshots for every step of a loaded sequence.
///
/// `at(i)` is equal to `reconstruct(initial, sequence, i)` for every `i`;
/// the table just avoids re-folding the whole prefix on each animation
/// frame. Built once when a sequence is loaded, immutable afterwards.
#[derive(Debug, Clone)]
pub struct SnapshotTable {
    /// `snapshots[i]` = world state after step `i`; length N + 1.
    snapshots: Vec<EntitySet>,
}

impl SnapshotTable {
    pub fn build(initial: &EntitySet, sequence: &KeyframeSequence) -> Self {
        let mut current = initial.clone();
        let mut snapshots = Vec::with_capacity(sequence.len() + 1);
        snapshots.push(current.clone());
        for step in sequence.iter() {
            apply_step(&mut current, step);
            snapshots.push(current.clone());
        }
        Self { snapshots }
    }

    /// Number of steps covered (N).
    pub fn step_count(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot after `at_step` steps; out-of-range indices clamp to the end.
    pub fn at(&self, at_step: usize) -> &EntitySet {
        &self.snapshots[at_step.min(self.step_count())]
    }
}
