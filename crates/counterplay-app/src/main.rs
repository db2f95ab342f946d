//! Headless demo: decode an oracle outcome and dump replay frames as PNGs.
//!
//! Usage: `counterplay <layout.json> <outcome.json> [out-dir]`
//!
//! The layout is the detection oracle's entity array; the outcome is the
//! prediction oracle's JSON result. One frame is written per 10 progress
//! units, scrubbed via the same seek path the transport UI uses.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use counterplay_core::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use counterplay_core::entities::EntitySet;
use counterplay_core::oracle;
use counterplay_playback::PlaybackEngine;
use counterplay_render::{render, style, DrawSurface, Pixmap};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(layout_path), Some(outcome_path)) = (args.next(), args.next()) else {
        eprintln!("usage: counterplay <layout.json> <outcome.json> [out-dir]");
        return ExitCode::FAILURE;
    };
    let out_dir = args.next().unwrap_or_else(|| "frames".to_string());

    match run(&layout_path, &outcome_path, &out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("counterplay: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(layout_path: &str, outcome_path: &str, out_dir: &str) -> Result<(), Box<dyn Error>> {
    let layout: EntitySet = serde_json::from_str(&fs::read_to_string(layout_path)?)?;
    let outcome = oracle::decode_outcome(&fs::read_to_string(outcome_path)?);
    log::info!(
        "loaded {} entities, {} keyframe steps, verdict {:?}",
        layout.len(),
        outcome.prediction_sequence.len(),
        outcome.verdict
    );

    let accent = style::accent_for(outcome.verdict);
    let mut engine = PlaybackEngine::new(layout, &outcome);
    fs::create_dir_all(out_dir)?;

    let mut surface = Pixmap::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    for station in 0..=10u32 {
        engine.seek(f64::from(station) * 10.0);
        render(&mut surface, &engine.current_frame(), accent);

        let path = PathBuf::from(out_dir).join(format!("frame_{station:02}.png"));
        let frame = image::RgbaImage::from_raw(
            surface.width(),
            surface.height(),
            surface.data().to_vec(),
        )
        .ok_or("frame buffer size mismatch")?;
        frame.save(&path)?;
    }
    log::info!("wrote 11 frames to {out_dir}");
    Ok(())
}
