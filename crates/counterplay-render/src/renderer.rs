//! Stateless frame rendering.
//!
//! `render` paints one fully-resolved snapshot: field background, grid,
//! then entities. Players draw first and balls/goal nets after, so the ball
//! stays visible when coincident with a marker.

use counterplay_core::constants::{
    BALL_RADIUS_PX, COORD_MAX, GOAL_HEIGHT_PX, GOAL_STROKE_PX, GOAL_WIDTH_PX, GRID_CELL_PX,
    LABEL_OFFSET_PX, PLAYER_RADIUS_PX,
};
use counterplay_core::entities::{Entity, EntitySet};
use counterplay_core::enums::EntityKind;

use crate::style::{self, Color};
use crate::surface::DrawSurface;

/// Draw a snapshot onto the surface. Stateless: the only effect is drawing,
/// and the snapshot is never mutated.
pub fn render(surface: &mut dyn DrawSurface, snapshot: &EntitySet, accent: Color) {
    draw_field(surface);
    for entity in snapshot.iter().filter(|e| e.kind == EntityKind::Player) {
        draw_entity(surface, entity, accent);
    }
    for entity in snapshot.iter().filter(|e| e.kind != EntityKind::Player) {
        draw_entity(surface, entity, accent);
    }
}

/// Percent coordinates to surface pixels.
fn to_pixels(surface: &dyn DrawSurface, entity: &Entity) -> (i32, i32) {
    let x = entity.position.x / COORD_MAX * surface.width() as f64;
    let y = entity.position.y / COORD_MAX * surface.height() as f64;
    (x.round() as i32, y.round() as i32)
}

fn draw_field(surface: &mut dyn DrawSurface) {
    surface.clear(style::FIELD_BG);

    let (w, h) = (surface.width(), surface.height());
    let mut x = 0;
    while x <= w {
        surface.fill_rect(x as i32, 0, 1, h, style::GRID_LINE);
        x += GRID_CELL_PX;
    }
    let mut y = 0;
    while y <= h {
        surface.fill_rect(0, y as i32, w, 1, style::GRID_LINE);
        y += GRID_CELL_PX;
    }
}

fn draw_entity(surface: &mut dyn DrawSurface, entity: &Entity, accent: Color) {
    let (x, y) = to_pixels(surface, entity);
    match entity.kind {
        EntityKind::Ball => {
            surface.fill_circle(x, y, BALL_RADIUS_PX, style::WHITE);
        }
        EntityKind::GoalNet => {
            let left = x - GOAL_WIDTH_PX as i32 / 2;
            let top = y - GOAL_HEIGHT_PX as i32 / 2;
            surface.fill_rect(
                left,
                top,
                GOAL_WIDTH_PX,
                GOAL_HEIGHT_PX,
                accent.with_alpha(style::GOAL_FILL_ALPHA),
            );
            surface.stroke_rect(left, top, GOAL_WIDTH_PX, GOAL_HEIGHT_PX, GOAL_STROKE_PX, accent);
        }
        EntityKind::Player => {
            let color = style::side_color(entity.side);
            surface.fill_circle(x, y, PLAYER_RADIUS_PX, color);
            surface.stroke_circle(x, y, PLAYER_RADIUS_PX, style::WHITE);
            surface.draw_text(x, y + LABEL_OFFSET_PX, &entity.label, style::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::Pixmap;
    use counterplay_core::enums::{TeamSide, Verdict};
    use counterplay_core::types::Position;

    fn entity(id: &str, kind: EntityKind, side: TeamSide, x: f64, y: f64) -> Entity {
        Entity {
            id: id.to_string(),
            kind,
            side,
            position: Position::new(x, y),
            label: "ST".to_string(),
        }
    }

    #[test]
    fn test_render_paints_background_and_grid() {
        let mut surface = Pixmap::new(200, 100);
        render(&mut surface, &EntitySet::default(), style::BLUE);
        // Grid line at x = 40, background just beside it.
        assert_eq!(surface.get(40, 10), Some(style::GRID_LINE));
        assert_eq!(surface.get(41, 10), Some(style::FIELD_BG));
    }

    #[test]
    fn test_player_marker_uses_side_color() {
        let snapshot = EntitySet::new(vec![entity(
            "p1",
            EntityKind::Player,
            TeamSide::Home,
            50.0,
            50.0,
        )]);
        let mut surface = Pixmap::new(200, 100);
        render(&mut surface, &snapshot, style::BLUE);
        // Marker center: (50% of 200, 50% of 100) = (100, 50).
        assert_eq!(surface.get(100, 50), Some(style::EMERALD));
    }

    #[test]
    fn test_ball_draws_on_top_of_coincident_player() {
        let snapshot = EntitySet::new(vec![
            entity("ball", EntityKind::Ball, TeamSide::Neutral, 50.0, 50.0),
            entity("p1", EntityKind::Player, TeamSide::Home, 50.0, 50.0),
        ]);
        let mut surface = Pixmap::new(200, 100);
        render(&mut surface, &snapshot, style::BLUE);
        // Ball listed before the player still wins the center pixel.
        assert_eq!(surface.get(100, 50), Some(style::WHITE));
    }

    #[test]
    fn test_goal_net_strokes_with_accent() {
        let snapshot = EntitySet::new(vec![entity(
            "goal",
            EntityKind::GoalNet,
            TeamSide::Neutral,
            50.0,
            50.0,
        )]);
        let accent = style::accent_for(Verdict::DefenseLikely);
        let mut surface = Pixmap::new(200, 100);
        render(&mut surface, &snapshot, accent);
        // Left edge of the 40x20 rect centered at (100, 50).
        assert_eq!(surface.get(80, 50), Some(style::ROSE));
        // Interior is a translucent accent wash, not the raw background.
        let interior = surface.get(100, 50).unwrap();
        assert_ne!(interior, style::FIELD_BG);
        assert_ne!(interior, style::ROSE);
    }

    #[test]
    fn test_render_does_not_mutate_snapshot() {
        let snapshot = EntitySet::new(vec![entity(
            "p1",
            EntityKind::Player,
            TeamSide::Away,
            25.0,
            75.0,
        )]);
        let before = snapshot.clone();
        let mut surface = Pixmap::new(80, 45);
        render(&mut surface, &snapshot, style::BLUE);
        assert_eq!(snapshot, before);
    }
}
