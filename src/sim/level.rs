//! Level difficulty curve
//!
//! Everything a level changes is derived here from the level number alone.

use serde::Serialize;

/// Hard cap on bots per level
pub const MAX_ENEMIES: u32 = 15;

/// Difficulty parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelParams {
    /// Bots spawned at level start
    pub enemy_count: u32,
    /// Starting (and maximum) bot health
    pub enemy_health: i32,
    /// Multiplier on bot movement speed
    pub enemy_speed_mult: f32,
    /// Divisor on the bot base fire delay
    pub enemy_fire_rate_mult: f32,
    /// Health restored to the player per kill
    pub player_heal: i32,
}

impl LevelParams {
    /// Parameters for a level (1-based)
    pub fn for_level(level: u32) -> Self {
        let l = level as f32;
        Self {
            enemy_count: (3 + level).min(MAX_ENEMIES),
            enemy_health: 50 + level as i32 * 10,
            enemy_speed_mult: 0.8 + l * 0.1,
            enemy_fire_rate_mult: 0.5 + l * 0.1,
            player_heal: 20 + level as i32 * 2,
        }
    }
}
