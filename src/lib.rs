//! Tank Battle - A wave-based arcade tank shooter
//!
//! Core modules:
//! - `sim`: Simulation (movement, shooting, collisions, leveling, upgrades)
//! - `ui`: Screen routing and menu buttons
//! - `renderer`: Drawing the playfield, HUD and menus
//! - `audio`: Sound effects and the engine loop
//! - `assets`: Startup asset loading

pub mod assets;
pub mod audio;
pub mod frame_pacer;
pub mod renderer;
pub mod sim;
pub mod ui;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const WIDTH: f32 = 1280.0;
    pub const HEIGHT: f32 = 720.0;

    /// Target frame rate
    pub const FPS: u32 = 60;
    /// Nominal frame duration in milliseconds
    pub const FRAME_MS: f32 = 1000.0 / FPS as f32;

    /// Tank movement speed (units per frame) before multipliers
    pub const BASE_TANK_SPEED: f32 = 2.5;
    /// Projectile speed (units per frame) before multipliers
    pub const BASE_BULLET_SPEED: f32 = 8.0;

    /// Player defaults
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_FIRE_DELAY_MS: f32 = 600.0;
    pub const BASE_DAMAGE: i32 = 20;
    /// Fire delay never drops below this after upgrades
    pub const MIN_FIRE_DELAY_MS: f32 = 200.0;

    /// Bots move at 80% of base speed before the level multiplier
    pub const BOT_SPEED_FACTOR: f32 = 0.8;
    pub const BOT_BULLET_SPEED_FACTOR: f32 = 1.1;
    /// Base bot fire delay, divided by the level fire-rate multiplier
    pub const BOT_BASE_FIRE_DELAY_MS: f32 = 1500.0;

    /// Fan spread between projectiles (degrees)
    pub const SPREAD_DEG: f32 = 15.0;
    /// Projectiles spawn this far ahead of the tank center
    pub const MUZZLE_OFFSET: f32 = 30.0;

    /// Distance from the canvas edge tanks must keep
    pub const FIELD_MARGIN: f32 = 30.0;
    /// Circle-circle hit distance between projectile and tank
    pub const HIT_RADIUS: f32 = 30.0;

    /// Bots close in until they are this near, then stop and shoot
    pub const BOT_ENGAGE_RANGE: f32 = 400.0;
    /// Per-frame fire chance per level while engaging
    pub const BOT_FIRE_CHANCE_PER_LEVEL: f32 = 0.02;

    /// Scoring
    pub const HIT_SCORE: u64 = 10;
    pub const KILL_BONUS: u64 = 50;

    /// Flat heal when a level is cleared
    pub const LEVEL_CLEAR_HEAL: i32 = 20;

    /// Spawn layout
    pub const PLAYER_SPAWN_Y_OFFSET: f32 = 100.0;
    pub const BOT_SPAWN_INSET: i32 = 100;

    /// Playback volumes (0.0 - 1.0)
    pub const SFX_VOLUME: f32 = 1.0;
    pub const ENGINE_VOLUME: f32 = 1.0;
}

/// Unit vector for a facing angle in degrees.
///
/// Screen space has y growing downward, so positive angles turn
/// counter-clockwise on screen.
#[inline]
pub fn heading_vector(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Clamp a position to a rectangle given as (min, max) corners
#[inline]
pub fn clamp_to_rect(pos: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    pos.max(min).min(max)
}

/// Whether a point lies inside the canvas (edges included)
#[inline]
pub fn in_canvas(pos: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= consts::WIDTH && pos.y >= 0.0 && pos.y <= consts::HEIGHT
}
