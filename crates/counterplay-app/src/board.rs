//! Tactical-board editing session — the provider of the initial layout.
//!
//! The board keeps the detected layout and a working copy the user edits by
//! dragging markers (the pointer arithmetic happens in the UI; the board
//! receives already-computed percent coordinates). Playback always receives
//! a fresh value copy, and resetting restores the original detection — the
//! original and the working set never share mutable state.

use counterplay_core::entities::EntitySet;

#[derive(Debug, Clone, Default)]
pub struct TacticalBoard {
    original: EntitySet,
    working: EntitySet,
}

impl TacticalBoard {
    /// Start a session from a detected layout.
    pub fn new(detected: EntitySet) -> Self {
        let mut detected = detected;
        detected.clamp_all();
        Self {
            working: detected.clone(),
            original: detected,
        }
    }

    /// The current edited layout.
    pub fn working(&self) -> &EntitySet {
        &self.working
    }

    /// The layout as detected, before any edits.
    pub fn original(&self) -> &EntitySet {
        &self.original
    }

    /// Move one entity to an edited position; components clamp to [0, 100].
    /// Returns false when the id is unknown.
    pub fn move_entity(&mut self, id: &str, x: f64, y: f64) -> bool {
        self.working.move_entity(id, x, y)
    }

    /// Discard edits and restore the original detection.
    pub fn reset(&mut self) {
        self.working = self.original.clone();
    }

    /// Owned copy of the edited layout, ready to hand to the engine.
    pub fn layout(&self) -> EntitySet {
        self.working.clone()
    }
}
