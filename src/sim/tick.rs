//! Per-frame simulation step
//!
//! One call advances the session by one frame: input, bot AI, collisions,
//! then projectile flight. The level-clear check runs separately, after the
//! frame has been drawn.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::*;
use crate::{clamp_to_rect, in_canvas};

/// Player commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire key pressed this frame
    pub fire: bool,
}

impl TickInput {
    /// Raw axis vector from the held keys, components in {-1, 0, 1}
    pub fn move_vector(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        v
    }
}

/// Advance the session by one frame. `dt_ms` feeds the shot cooldowns.
pub fn tick(session: &mut GameSession, input: &TickInput, dt_ms: f32) {
    session.events.clear();

    if session.phase == GamePhase::GameOver {
        return;
    }
    if session.player.is_dead() {
        session.phase = GamePhase::GameOver;
        session.player_moving = false;
        session.events.push(GameEvent::PlayerDestroyed);
        log::info!(
            "Player destroyed on level {} (score {}, kills {})",
            session.level,
            session.score,
            session.kills
        );
        return;
    }

    session.time_ticks += 1;

    session.player.advance_clock(dt_ms);
    for bot in session.bots.iter_mut() {
        bot.advance_clock(dt_ms);
    }

    update_player(session, input);
    update_bots(session);
    resolve_collisions(session);
    advance_projectiles(session);
}

fn update_player(session: &mut GameSession, input: &TickInput) {
    if input.fire && session.player.shoot() {
        session.events.push(GameEvent::Shot { bot: false });
    }

    let raw = input.move_vector();
    if raw == Vec2::ZERO {
        session.player_moving = false;
        return;
    }

    // Direction only; diagonals move at full speed
    let direction = raw.y.atan2(raw.x);
    let player = &mut session.player;
    player.angle = direction.to_degrees() - 90.0;
    player.drive(direction);
    player.pos = clamp_to_rect(
        player.pos,
        Vec2::splat(FIELD_MARGIN),
        Vec2::new(WIDTH - FIELD_MARGIN, HEIGHT - FIELD_MARGIN),
    );
    session.player_moving = true;
}

fn update_bots(session: &mut GameSession) {
    let player_pos = session.player.pos;
    let fire_chance = BOT_FIRE_CHANCE_PER_LEVEL * session.level as f32;
    let min = Vec2::splat(FIELD_MARGIN);
    let max = Vec2::new(WIDTH - FIELD_MARGIN, HEIGHT / 2.0);

    for i in 0..session.bots.len() {
        let to_player = player_pos - session.bots[i].pos;
        let distance = to_player.length();
        let engaging = distance <= BOT_ENGAGE_RANGE;
        let wants_fire = engaging && session.roll() < fire_chance;

        let bot = &mut session.bots[i];
        if engaging {
            // Aim straight at the player
            bot.angle = (-to_player.y).atan2(to_player.x).to_degrees();
            if wants_fire && bot.shoot() {
                session.events.push(GameEvent::Shot { bot: true });
            }
        } else {
            bot.angle = to_player.y.atan2(to_player.x).to_degrees() + 90.0;
            bot.pos += to_player / distance * bot.params.speed;
        }
        // Bots hold the upper half
        bot.pos = clamp_to_rect(bot.pos, min, max);
    }
}

fn advance_projectiles(session: &mut GameSession) {
    let tanks = std::iter::once(&mut session.player).chain(session.bots.iter_mut());
    for tank in tanks {
        for p in tank.projectiles.iter_mut() {
            p.advance();
        }
        tank.projectiles.retain(|p| in_canvas(p.pos));
    }
}

/// Start the next level once every bot is gone.
///
/// Runs after the frame is drawn, so the cleared field shows for one frame.
/// Returns `true` when a new level started.
pub fn advance_level_if_cleared(session: &mut GameSession) -> bool {
    if session.phase == GamePhase::GameOver || !session.bots.is_empty() {
        return false;
    }
    session.level += 1;
    session.spawn_bots();
    session.player.heal(LEVEL_CLEAR_HEAL);
    session.events.push(GameEvent::LevelUp {
        level: session.level,
    });
    true
}
