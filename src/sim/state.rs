//! Session state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::level::LevelParams;
use super::tank::Tank;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player destroyed
    GameOver,
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A tank fired a volley
    Shot { bot: bool },
    /// Projectile impact on the player or a bot kill
    Explosion,
    /// A bot was destroyed
    BotDestroyed,
    /// All bots cleared, new level started
    LevelUp { level: u32 },
    /// Player health reached zero
    PlayerDestroyed,
}

/// End-of-run statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub level: u32,
    pub levels_cleared: u32,
    pub score: u64,
    pub kills: u32,
    pub upgrades: u32,
}

/// One run of the game, from spawn to player death
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    /// Current level (1-based)
    pub level: u32,
    pub player: Tank,
    /// Living bots of the current level
    pub bots: Vec<Tank>,
    pub phase: GamePhase,
    pub score: u64,
    pub kills: u32,
    /// Whether the player moved during the last tick (drives the engine loop)
    pub player_moving: bool,
    /// Frames simulated so far
    pub time_ticks: u64,
    /// Events from the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    rng: Pcg32,
}

impl GameSession {
    /// Start a session at level 1 with a full wave of bots
    pub fn new(seed: u64) -> Self {
        let mut session = Self::empty(seed);
        session.spawn_bots();
        session
    }

    /// A session with no bots spawned yet
    pub(crate) fn empty(seed: u64) -> Self {
        Self {
            level: 1,
            player: Tank::player(Vec2::new(WIDTH / 2.0, HEIGHT - PLAYER_SPAWN_Y_OFFSET)),
            bots: Vec::new(),
            phase: GamePhase::Playing,
            score: 0,
            kills: 0,
            player_moving: false,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn this level's wave at random points in the upper half
    pub fn spawn_bots(&mut self) {
        let params = LevelParams::for_level(self.level);
        let max_x = WIDTH as i32 - BOT_SPAWN_INSET;
        let max_y = (HEIGHT / 2.0) as i32;
        for _ in 0..params.enemy_count {
            let x = self.rng.random_range(BOT_SPAWN_INSET..=max_x);
            let y = self.rng.random_range(BOT_SPAWN_INSET..=max_y);
            self.bots.push(Tank::bot(Vec2::new(x as f32, y as f32), self.level));
        }
        log::info!(
            "Level {}: spawned {} bots ({} hp)",
            self.level,
            params.enemy_count,
            params.enemy_health
        );
    }

    /// Difficulty parameters for the current level
    pub fn level_params(&self) -> LevelParams {
        LevelParams::for_level(self.level)
    }

    /// Roll a uniform value in [0, 1)
    pub(crate) fn roll(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver || self.player.is_dead()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            level: self.level,
            levels_cleared: self.level.saturating_sub(1),
            score: self.score,
            kills: self.kills,
            upgrades: self.player.params.upgrades,
        }
    }
}
