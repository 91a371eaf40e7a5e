//! Simulation module
//!
//! All gameplay logic lives here:
//! - One frame per `tick`, shot cooldowns driven by the caller's frame delta
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tank;
pub mod tick;

pub use collision::{CollisionReport, resolve_collisions, within_hit_radius};
pub use level::{LevelParams, MAX_ENEMIES};
pub use state::{GameEvent, GamePhase, GameSession, SessionSummary};
pub use tank::{Projectile, Tank, TankParams, UpgradeEffects};
pub use tick::{TickInput, advance_level_if_cleared, tick};
