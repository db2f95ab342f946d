//! Core types and definitions for the COUNTERPLAY playback stack.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, keyframe sequences, oracle outcomes, transport commands,
//! snapshots, and constants. It has no dependency on any rendering or
//! windowing framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod oracle;
pub mod sequence;
pub mod state;
pub mod types;
