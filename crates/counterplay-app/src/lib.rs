//! COUNTERPLAY application shell.
//!
//! Wires the playback engine to a transport loop thread and provides the
//! tactical-board editing session that owns the initial layout.

pub mod board;
pub mod playback_loop;
pub mod state;
