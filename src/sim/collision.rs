//! Projectile hits
//!
//! Hits are simple circle tests against [`HIT_RADIUS`]. Removals are
//! mark-then-compact so nothing is removed while its collection is scanned.

use glam::Vec2;

use super::state::{GameEvent, GameSession};
use crate::consts::*;

/// Whether a projectile at `a` hits a tank centered at `b`
#[inline]
pub fn within_hit_radius(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < HIT_RADIUS
}

/// Tallies from one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub bot_hits: u32,
    pub bots_destroyed: u32,
    pub player_hits: u32,
}

/// Resolve player shots against bots, then bot shots against the player.
pub fn resolve_collisions(session: &mut GameSession) -> CollisionReport {
    let mut report = CollisionReport::default();
    let heal = session.level_params().player_heal;

    // (a) player projectiles vs bots
    let mut projectiles = std::mem::take(&mut session.player.projectiles);
    let mut consumed = vec![false; projectiles.len()];
    let mut dead = vec![false; session.bots.len()];

    for (pi, projectile) in projectiles.iter().enumerate() {
        // A projectile keeps checking the remaining bots after a hit
        for (bi, bot) in session.bots.iter_mut().enumerate() {
            if dead[bi] || !within_hit_radius(projectile.pos, bot.pos) {
                continue;
            }

            bot.take_damage(projectile.damage);
            session.score += HIT_SCORE;
            report.bot_hits += 1;

            if bot.is_dead() {
                dead[bi] = true;
                session.score += KILL_BONUS;
                session.kills += 1;
                report.bots_destroyed += 1;

                session.player.heal(heal);
                let fx = session.player.upgrade_weapon();
                log::debug!(
                    "Bot destroyed (kills={}, upgrades={}, effects={:?})",
                    session.kills,
                    session.player.params.upgrades,
                    fx
                );
                session.events.push(GameEvent::BotDestroyed);
                session.events.push(GameEvent::Explosion);
            }

            // Consuming twice is a no-op
            consumed[pi] = true;
        }
    }

    retain_unmarked(&mut projectiles, &consumed);
    session.player.projectiles = projectiles;
    retain_unmarked(&mut session.bots, &dead);

    // (b) bot projectiles vs player
    let damage = 5 + session.level as i32;
    let player_pos = session.player.pos;
    for bot in session.bots.iter_mut() {
        let before = bot.projectiles.len();
        bot.projectiles.retain(|p| !within_hit_radius(p.pos, player_pos));
        let hits = (before - bot.projectiles.len()) as u32;
        for _ in 0..hits {
            session.player.take_damage(damage);
            session.events.push(GameEvent::Explosion);
        }
        report.player_hits += hits;
    }

    report
}

/// Drop every element whose mark is set
fn retain_unmarked<T>(items: &mut Vec<T>, marks: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !marks[idx];
        idx += 1;
        keep
    });
}
