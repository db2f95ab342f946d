//! Colors and per-entity styling.
//!
//! The palette matches the tactical dark view: zinc field, emerald home,
//! blue away. The accent color follows the oracle's verdict and tints the
//! goal net.

use counterplay_core::enums::{TeamSide, Verdict};

/// RGBA color, 8 bits per channel, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The same color at a different opacity (for translucent fills).
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Field background (zinc-900).
pub const FIELD_BG: Color = Color::rgb(0x18, 0x18, 0x1b);

/// Grid lines (zinc-800).
pub const GRID_LINE: Color = Color::rgb(0x27, 0x27, 0x2a);

/// Ball, marker rings and labels.
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

/// Emerald: home markers and the goal-likely accent.
pub const EMERALD: Color = Color::rgb(0x10, 0xb9, 0x81);

/// Blue: away markers and the neutral accent.
pub const BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);

/// Rose: the defense-likely accent.
pub const ROSE: Color = Color::rgb(0xf4, 0x3f, 0x5e);

/// Zinc: neutral player markers.
pub const NEUTRAL_GRAY: Color = Color::rgb(0x71, 0x71, 0x7a);

/// Opacity of the goal net's translucent fill.
pub const GOAL_FILL_ALPHA: u8 = 0x33;

/// Marker color for a player's side.
pub fn side_color(side: TeamSide) -> Color {
    match side {
        TeamSide::Home => EMERALD,
        TeamSide::Away => BLUE,
        TeamSide::Neutral => NEUTRAL_GRAY,
    }
}

/// Accent color derived from the oracle's verdict.
pub fn accent_for(verdict: Verdict) -> Color {
    match verdict {
        Verdict::GoalLikely => EMERALD,
        Verdict::DefenseLikely => ROSE,
        Verdict::NoImmediateThreat | Verdict::Inconclusive => BLUE,
    }
}
