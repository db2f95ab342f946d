//! Playback loop thread — advances the engine at 60Hz and publishes frames.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel and take effect before the
//! next tick. Frames go out over a frame channel and are stored in shared
//! state for synchronous polling. Dropping either channel end tears the
//! loop down, so no tick ever runs against a disposed owner.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use counterplay_core::commands::TransportCommand;
use counterplay_core::constants::TICK_RATE;
use counterplay_core::entities::EntitySet;
use counterplay_core::state::PlaybackSnapshot;
use counterplay_playback::PlaybackEngine;

use crate::state::PlaybackLoopCommand;

/// Nominal duration of one animation tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the playback loop in a new thread.
///
/// Returns the command sender for the UI layer to use.
pub fn spawn_playback_loop(
    frame_tx: mpsc::Sender<PlaybackSnapshot>,
    latest_snapshot: Arc<Mutex<Option<PlaybackSnapshot>>>,
) -> mpsc::Sender<PlaybackLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<PlaybackLoopCommand>();

    std::thread::Builder::new()
        .name("counterplay-playback-loop".into())
        .spawn(move || {
            run_playback_loop(frame_tx, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn playback loop thread");

    cmd_tx
}

/// The playback loop. Runs until Shutdown or channel disconnect.
fn run_playback_loop(
    frame_tx: mpsc::Sender<PlaybackSnapshot>,
    cmd_rx: mpsc::Receiver<PlaybackLoopCommand>,
    latest_snapshot: &Mutex<Option<PlaybackSnapshot>>,
) {
    let mut engine = PlaybackEngine::idle(EntitySet::default());
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands — they apply before this tick.
        loop {
            match cmd_rx.try_recv() {
                Ok(PlaybackLoopCommand::Transport(cmd)) => apply_command(&mut engine, cmd),
                Ok(PlaybackLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one animation tick.
        engine.tick();

        // 3. Publish the frame. A dropped receiver means the owning view is
        //    gone, so the loop ends instead of ticking a disposed engine.
        let snapshot = engine.snapshot();
        if frame_tx.send(snapshot.clone()).is_err() {
            log::debug!("frame receiver dropped, stopping playback loop");
            return;
        }
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Apply one transport command to the engine.
fn apply_command(engine: &mut PlaybackEngine, command: TransportCommand) {
    match command {
        TransportCommand::LoadOutcome { layout, outcome } => {
            log::info!(
                "loaded outcome: {} steps, verdict {:?}",
                outcome.prediction_sequence.len(),
                outcome.verdict
            );
            *engine = PlaybackEngine::new(layout, &outcome);
        }
        TransportCommand::Play => engine.play(),
        TransportCommand::Pause => engine.pause(),
        TransportCommand::Seek { progress } => engine.seek(progress),
        TransportCommand::ClearOutcome => {
            *engine = PlaybackEngine::idle(engine.initial().clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counterplay_core::entities::Entity;
    use counterplay_core::enums::{EntityKind, TeamSide, TransportPhase, Verdict};
    use counterplay_core::oracle::SimulationOutcome;
    use counterplay_core::sequence::{KeyframeSequence, KeyframeStep, PositionUpdate};
    use counterplay_core::types::Position;

    fn layout() -> EntitySet {
        EntitySet::new(vec![Entity {
            id: "ball".to_string(),
            kind: EntityKind::Ball,
            side: TeamSide::Neutral,
            position: Position::new(50.0, 50.0),
            label: "BALL".to_string(),
        }])
    }

    fn outcome() -> SimulationOutcome {
        SimulationOutcome {
            verdict: Verdict::GoalLikely,
            prediction_sequence: KeyframeSequence::new(vec![KeyframeStep {
                step: 1,
                updates: vec![PositionUpdate {
                    id: "ball".to_string(),
                    x: 70.0,
                    y: 40.0,
                }],
            }]),
            ..SimulationOutcome::inconclusive()
        }
    }

    #[test]
    fn test_drained_commands_apply_in_send_order() {
        let (tx, rx) = mpsc::channel::<PlaybackLoopCommand>();
        let mut engine = PlaybackEngine::idle(EntitySet::default());

        // Everything queued during one UI interaction lands before the next
        // tick, in send order: the trailing pause wins over the play.
        tx.send(PlaybackLoopCommand::Transport(TransportCommand::LoadOutcome {
            layout: layout(),
            outcome: outcome(),
        }))
        .unwrap();
        tx.send(PlaybackLoopCommand::Transport(TransportCommand::Seek {
            progress: 80.0,
        }))
        .unwrap();
        tx.send(PlaybackLoopCommand::Transport(TransportCommand::Play))
            .unwrap();
        tx.send(PlaybackLoopCommand::Transport(TransportCommand::Pause))
            .unwrap();

        while let Ok(PlaybackLoopCommand::Transport(cmd)) = rx.try_recv() {
            apply_command(&mut engine, cmd);
        }

        assert_eq!(engine.progress(), 80.0);
        assert_eq!(engine.phase(), TransportPhase::Stopped);
        assert_eq!(engine.verdict(), Verdict::GoalLikely);
    }

    #[test]
    fn test_apply_command_load_play_seek() {
        let mut engine = PlaybackEngine::idle(EntitySet::default());

        apply_command(
            &mut engine,
            TransportCommand::LoadOutcome {
                layout: layout(),
                outcome: outcome(),
            },
        );
        assert_eq!(engine.step_count(), 1);
        assert_eq!(engine.verdict(), Verdict::GoalLikely);

        apply_command(&mut engine, TransportCommand::Play);
        assert_eq!(engine.phase(), TransportPhase::Playing);

        apply_command(&mut engine, TransportCommand::Seek { progress: 150.0 });
        assert_eq!(engine.progress(), 100.0);
        assert_eq!(engine.phase(), TransportPhase::Finished);

        apply_command(&mut engine, TransportCommand::ClearOutcome);
        assert_eq!(engine.step_count(), 0);
        // The layout survives a clear as the static frame.
        assert!(engine.initial().find("ball").is_some());
    }

    #[test]
    fn test_loop_plays_and_shuts_down() {
        let (frame_tx, frame_rx) = mpsc::channel();
        let latest = Arc::new(Mutex::new(None));
        let cmd_tx = spawn_playback_loop(frame_tx, latest.clone());

        cmd_tx
            .send(PlaybackLoopCommand::Transport(TransportCommand::LoadOutcome {
                layout: layout(),
                outcome: outcome(),
            }))
            .unwrap();
        cmd_tx
            .send(PlaybackLoopCommand::Transport(TransportCommand::Play))
            .unwrap();

        // Progress must be non-decreasing and eventually move while playing.
        let mut last = -1.0f64;
        let mut moved = false;
        for _ in 0..20 {
            let frame = frame_rx
                .recv_timeout(Duration::from_secs(2))
                .expect("loop should keep emitting frames");
            assert!(frame.progress >= last);
            if frame.progress > 0.0 {
                moved = true;
            }
            last = frame.progress;
        }
        assert!(moved, "playback never advanced");

        cmd_tx.send(PlaybackLoopCommand::Shutdown).unwrap();
        // After shutdown the sender side goes away and recv eventually fails.
        while frame_rx.recv_timeout(Duration::from_secs(2)).is_ok() {}
        assert!(latest.lock().unwrap().is_some());
    }
}
