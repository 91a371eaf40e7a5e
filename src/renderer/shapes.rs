//! Layout for the 2D primitives and HUD text
//!
//! Pure geometry and colors; `scene` turns these into draw calls.

use glam::Vec2;

use crate::consts::WIDTH;
use crate::sim::{GameSession, SessionSummary, Tank};

pub type Rgb = [u8; 3];

/// Palette
pub mod colors {
    use super::Rgb;

    pub const WHITE: Rgb = [255, 255, 255];
    pub const BLACK: Rgb = [0, 0, 0];
    pub const RED: Rgb = [255, 0, 0];
    pub const GREEN: Rgb = [0, 180, 0];
    pub const BLUE: Rgb = [30, 30, 150];
    pub const YELLOW: Rgb = [255, 255, 0];
    pub const ORANGE: Rgb = [255, 165, 0];
    pub const GRAY: Rgb = [80, 80, 80];
    pub const DARK_GRAY: Rgb = [40, 40, 40];
}

/// Tank sprite edge length
pub const TANK_SPRITE_SIZE: f32 = 45.0;

pub const BOT_PROJECTILE_RADIUS: f32 = 4.0;
pub const PLAYER_PROJECTILE_RADIUS: f32 = 6.0;

const HEALTH_BAR_WIDTH: f32 = 40.0;
const HEALTH_BAR_HEIGHT: f32 = 5.0;
/// Bar sits this far above the tank center
const HEALTH_BAR_RISE: f32 = 35.0;

pub const HUD_FONT_SIZE: f32 = 28.0;
pub const BUTTON_FONT_SIZE: f32 = 32.0;
pub const TITLE_FONT_SIZE: f32 = 48.0;
pub const TITLE_Y: f32 = 100.0;
/// Label offset inside a button
pub const BUTTON_LABEL_INSET: Vec2 = Vec2::new(20.0, 15.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Health bar as (background, fill). The fill is empty at or below zero health.
pub fn health_bar(tank: &Tank) -> (Rect, Rect) {
    let x = tank.pos.x - HEALTH_BAR_WIDTH / 2.0;
    let y = tank.pos.y - HEALTH_BAR_RISE;
    let back = Rect {
        x,
        y,
        w: HEALTH_BAR_WIDTH,
        h: HEALTH_BAR_HEIGHT,
    };
    let fill = Rect {
        w: HEALTH_BAR_WIDTH * tank.health_fraction().clamp(0.0, 1.0),
        ..back
    };
    (back, fill)
}

/// Top-left corner for a sprite centred on `center`
pub fn sprite_origin(center: Vec2) -> Vec2 {
    center - Vec2::splat(TANK_SPRITE_SIZE / 2.0)
}

/// Sprite rotation in radians, clockwise on screen.
///
/// Facing angles turn counter-clockwise, so the sign flips.
pub fn sprite_rotation(angle_deg: f32) -> f32 {
    -angle_deg.to_radians()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    /// Top-left of the text
    pub pos: Vec2,
    pub color: Rgb,
}

/// HUD text block: left column for the player, right column for the run
pub fn hud_lines(session: &GameSession) -> Vec<HudLine> {
    let params = &session.player.params;
    let right = WIDTH - 200.0;
    let line = |text: String, x: f32, y: f32, color: Rgb| HudLine {
        text,
        pos: Vec2::new(x, y),
        color,
    };
    vec![
        line(format!("Level: {}", session.level), 20.0, 20.0, colors::YELLOW),
        line(
            format!("Health: {}/{}", params.health.max(0), params.max_health),
            20.0,
            50.0,
            colors::GREEN,
        ),
        line(format!("Score: {}", session.score), right, 20.0, colors::WHITE),
        line(format!("Upgrades: {}", params.upgrades), 20.0, 80.0, colors::ORANGE),
        line(format!("Damage: {}", params.damage), 20.0, 110.0, colors::RED),
        line(format!("Kills: {}", session.kills), right, 50.0, colors::BLUE),
    ]
}

pub fn game_over_title(summary: &SessionSummary) -> String {
    format!("Game over! Levels cleared: {}", summary.levels_cleared)
}

/// Hovered buttons light up
pub fn button_color(hovered: bool) -> Rgb {
    if hovered { colors::GREEN } else { colors::GRAY }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameSession;

    #[test]
    fn test_health_bar_geometry() {
        let mut tank = Tank::player(Vec2::new(100.0, 200.0));
        tank.params.health = 50;
        let (back, fill) = health_bar(&tank);
        assert_eq!(
            back,
            Rect {
                x: 80.0,
                y: 165.0,
                w: 40.0,
                h: 5.0
            }
        );
        assert_eq!(fill.w, 20.0);
        assert_eq!((fill.x, fill.y), (back.x, back.y));
    }

    #[test]
    fn test_health_bar_empty_when_dead() {
        let mut tank = Tank::player(Vec2::ZERO);
        tank.params.health = -12;
        assert_eq!(health_bar(&tank).1.w, 0.0);
    }

    #[test]
    fn test_sprite_helpers() {
        assert_eq!(sprite_origin(Vec2::new(100.0, 100.0)), Vec2::new(77.5, 77.5));
        assert!((sprite_rotation(90.0) + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_hud_lines() {
        let mut s = GameSession::new(3);
        s.score = 130;
        s.kills = 2;
        s.player.params.health = -3;
        let lines = hud_lines(&s);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].text, "Level: 1");
        assert_eq!(lines[1].text, "Health: 0/100");
        assert_eq!(lines[2].text, "Score: 130");
        assert_eq!(lines[2].pos, Vec2::new(1080.0, 20.0));
        assert_eq!(lines[5].text, "Kills: 2");
        assert_eq!(lines[4].color, colors::RED);
    }

    #[test]
    fn test_game_over_text() {
        let mut s = GameSession::new(1);
        s.level = 3;
        let summary = s.summary();
        assert_eq!(game_over_title(&summary), "Game over! Levels cleared: 2");
    }

    #[test]
    fn test_button_color() {
        assert_eq!(button_color(true), colors::GREEN);
        assert_eq!(button_color(false), colors::GRAY);
    }
}
