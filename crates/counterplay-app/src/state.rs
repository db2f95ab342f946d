//! UI-side session over the playback loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use counterplay_core::commands::TransportCommand;
use counterplay_core::state::PlaybackSnapshot;

use crate::playback_loop::spawn_playback_loop;

/// Commands sent from the UI layer to the playback loop thread.
#[derive(Debug)]
pub enum PlaybackLoopCommand {
    /// A transport command to forward to the engine.
    Transport(TransportCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Owns the playback loop from the UI side: spawns it, forwards transport
/// commands, and exposes the latest frame for synchronous polling.
///
/// Everything here is Send + Sync. The `mpsc::Sender` is Mutex-wrapped
/// (Sender is Send but not Sync) and absent until the loop is started; the
/// latest snapshot is shared with the loop thread through an `Arc`.
pub struct AppState {
    command_tx: Mutex<Option<mpsc::Sender<PlaybackLoopCommand>>>,
    latest_snapshot: Arc<Mutex<Option<PlaybackSnapshot>>>,
    running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the playback loop thread. Frames additionally stream out over
    /// `frame_tx`. No-op while a loop is already running.
    pub fn start(&self, frame_tx: mpsc::Sender<PlaybackSnapshot>) {
        let Ok(mut running) = self.running.lock() else {
            return;
        };
        if *running {
            return;
        }
        let tx = spawn_playback_loop(frame_tx, self.latest_snapshot.clone());
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = Some(tx);
        }
        *running = true;
    }

    /// Forward a transport command to the loop. Returns false when no loop
    /// is running or the loop thread has gone away.
    pub fn send(&self, command: TransportCommand) -> bool {
        match self.command_tx.lock() {
            Ok(slot) => slot
                .as_ref()
                .is_some_and(|tx| tx.send(PlaybackLoopCommand::Transport(command)).is_ok()),
            Err(_) => false,
        }
    }

    /// The most recent frame the loop published, if any yet.
    pub fn latest(&self) -> Option<PlaybackSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|flag| *flag).unwrap_or(false)
    }

    /// Stop the loop thread and drop the command channel. Subsequent sends
    /// report failure until `start` is called again.
    pub fn shutdown(&self) {
        if let Ok(mut slot) = self.command_tx.lock() {
            if let Some(tx) = slot.take() {
                let _ = tx.send(PlaybackLoopCommand::Shutdown);
            }
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }
}
