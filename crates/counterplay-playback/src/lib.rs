//! Playback engine for COUNTERPLAY.
//!
//! Reconstructs world snapshots from sparse cumulative keyframes and drives
//! a scrubbable, interpolated animation over them. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod reconstruct;

pub use engine::PlaybackEngine;
pub use reconstruct::reconstruct;
