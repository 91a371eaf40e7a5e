//! Tanks and their projectiles

use glam::Vec2;
use serde::Serialize;

use super::level::LevelParams;
use crate::consts::*;
use crate::heading_vector;

/// A shot in flight. Damage is fixed when fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
}

impl Projectile {
    /// Advance by one frame of velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Weapon and hull parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TankParams {
    /// Movement per frame
    pub speed: f32,
    /// Projectile movement per frame
    pub bullet_speed: f32,
    pub health: i32,
    pub max_health: i32,
    /// Minimum time between volleys
    pub fire_delay_ms: f32,
    /// Damage carried by each new projectile
    pub damage: i32,
    /// Kills converted into upgrades so far
    pub upgrades: u32,
}

impl Default for TankParams {
    fn default() -> Self {
        Self {
            speed: BASE_TANK_SPEED,
            bullet_speed: BASE_BULLET_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            fire_delay_ms: PLAYER_FIRE_DELAY_MS,
            damage: BASE_DAMAGE,
            upgrades: 0,
        }
    }
}

/// Which threshold improvements an upgrade step applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpgradeEffects {
    pub damage: bool,
    pub bullet_speed: bool,
    pub fire_rate: bool,
    pub armor: bool,
}

/// A player or bot tank
#[derive(Debug, Clone, Serialize)]
pub struct Tank {
    pub pos: Vec2,
    /// Facing angle in degrees (see [`heading_vector`])
    pub angle: f32,
    pub is_bot: bool,
    /// Time since the last volley, saturating at the fire delay
    pub since_last_shot_ms: f32,
    pub params: TankParams,
    /// Shots in flight, in firing order
    pub projectiles: Vec<Projectile>,
}

impl Tank {
    /// Player tank with default parameters, ready to fire
    pub fn player(pos: Vec2) -> Self {
        let params = TankParams::default();
        Self {
            pos,
            angle: 0.0,
            is_bot: false,
            since_last_shot_ms: params.fire_delay_ms,
            params,
            projectiles: Vec::new(),
        }
    }

    /// Bot tank scaled for the given level
    pub fn bot(pos: Vec2, level: u32) -> Self {
        let lp = LevelParams::for_level(level);
        let params = TankParams {
            speed: BASE_TANK_SPEED * BOT_SPEED_FACTOR * lp.enemy_speed_mult,
            bullet_speed: BASE_BULLET_SPEED * BOT_BULLET_SPEED_FACTOR,
            health: lp.enemy_health,
            max_health: lp.enemy_health,
            fire_delay_ms: BOT_BASE_FIRE_DELAY_MS / lp.enemy_fire_rate_mult,
            ..TankParams::default()
        };
        Self {
            pos,
            angle: 0.0,
            is_bot: true,
            since_last_shot_ms: params.fire_delay_ms,
            params,
            projectiles: Vec::new(),
        }
    }

    /// Advance the shot clock by an externally measured frame delta
    pub fn advance_clock(&mut self, dt_ms: f32) {
        self.since_last_shot_ms = (self.since_last_shot_ms + dt_ms.max(0.0))
            .min(self.params.fire_delay_ms);
    }

    pub fn can_fire(&self) -> bool {
        self.since_last_shot_ms >= self.params.fire_delay_ms
    }

    /// Projectiles per volley: one more for every three upgrades
    pub fn bullet_count(&self) -> u32 {
        1 + self.params.upgrades / 3
    }

    /// Fire a fanned volley if the cooldown allows.
    ///
    /// Returns `true` when projectiles were spawned; a volley during cooldown
    /// is silently dropped.
    pub fn shoot(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }

        let count = self.bullet_count();
        let center = (count as f32 - 1.0) / 2.0;
        for i in 0..count {
            let offset = SPREAD_DEG * (i as f32 - center);
            let dir = heading_vector(self.angle + offset);
            self.projectiles.push(Projectile {
                pos: self.pos + dir * MUZZLE_OFFSET,
                vel: dir * self.params.bullet_speed,
                damage: self.params.damage,
            });
        }

        self.since_last_shot_ms = 0.0;
        true
    }

    /// Move by `speed` along a direction in radians (screen space)
    pub fn drive(&mut self, direction: f32) {
        self.pos += Vec2::new(direction.cos(), direction.sin()) * self.params.speed;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.params.health -= amount;
    }

    /// Restore health up to the maximum
    pub fn heal(&mut self, amount: i32) {
        self.params.health = (self.params.health + amount).min(self.params.max_health);
    }

    pub fn is_dead(&self) -> bool {
        self.params.health <= 0
    }

    /// Health as a 0-1 fraction for the health bar
    pub fn health_fraction(&self) -> f32 {
        if self.params.max_health <= 0 {
            return 0.0;
        }
        (self.params.health as f32 / self.params.max_health as f32).clamp(0.0, 1.0)
    }

    /// Count one more upgrade and apply every threshold it reaches
    pub fn upgrade_weapon(&mut self) -> UpgradeEffects {
        let p = &mut self.params;
        p.upgrades += 1;
        let n = p.upgrades;
        let mut effects = UpgradeEffects::default();

        if n % 2 == 0 {
            p.damage += 3;
            effects.damage = true;
        }
        if n % 3 == 0 {
            p.bullet_speed *= 1.1;
            effects.bullet_speed = true;
        }
        if n % 5 == 0 {
            p.fire_delay_ms = (p.fire_delay_ms * 0.9).max(MIN_FIRE_DELAY_MS);
            effects.fire_rate = true;
        }
        if n % 4 == 0 {
            p.max_health += 10;
            p.health = (p.health + 10).min(p.max_health);
            effects.armor = true;
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn velocity_angle(p: &Projectile) -> f32 {
        (-p.vel.y).atan2(p.vel.x).to_degrees()
    }

    #[test]
    fn test_player_defaults() {
        let t = Tank::player(Vec2::new(640.0, 620.0));
        assert!(!t.is_bot);
        assert_eq!(t.params, TankParams::default());
        assert_eq!(t.params.health, 100);
        assert_eq!(t.params.damage, 20);
        assert!(t.can_fire());
    }

    #[test]
    fn test_bot_scaled_by_level() {
        let t = Tank::bot(Vec2::new(200.0, 200.0), 1);
        assert!(t.is_bot);
        assert_eq!(t.params.health, 60);
        assert_eq!(t.params.max_health, 60);
        assert!((t.params.speed - 2.5 * 0.8 * 0.9).abs() < 1e-5);
        assert!((t.params.fire_delay_ms - 2500.0).abs() < 0.01);
        assert!((t.params.bullet_speed - 8.8).abs() < 1e-5);
        assert_eq!(t.params.damage, BASE_DAMAGE);
        assert_eq!(t.params.upgrades, 0);
    }

    #[test]
    fn test_shoot_respects_fire_delay() {
        let mut t = Tank::player(Vec2::new(100.0, 100.0));
        assert!(t.shoot());
        t.advance_clock(300.0);
        assert!(!t.shoot());
        assert_eq!(t.projectiles.len(), 1);

        t.advance_clock(300.0);
        assert!(t.shoot());
        assert_eq!(t.projectiles.len(), 2);
    }

    #[test]
    fn test_single_shot_geometry() {
        let mut t = Tank::player(Vec2::new(100.0, 100.0));
        t.angle = 90.0;
        t.shoot();
        let p = t.projectiles[0];
        // Straight up the screen, spawned 30 units ahead
        assert!((p.pos.x - 100.0).abs() < 1e-4);
        assert!((p.pos.y - 70.0).abs() < 1e-4);
        assert!((p.vel.y + 8.0).abs() < 1e-4);
        assert_eq!(p.damage, 20);
    }

    #[test]
    fn test_fan_of_three_at_six_upgrades() {
        let mut t = Tank::player(Vec2::new(400.0, 400.0));
        t.angle = 30.0;
        t.params.upgrades = 6;
        assert_eq!(t.bullet_count(), 3);
        assert!(t.shoot());

        let offsets: Vec<f32> = t
            .projectiles
            .iter()
            .map(|p| velocity_angle(p) - 30.0)
            .collect();
        assert_eq!(offsets.len(), 3);
        for (got, want) in offsets.iter().zip([-15.0, 0.0, 15.0]) {
            assert!((got - want).abs() < 1e-3, "offset {got} != {want}");
        }
    }

    #[test]
    fn test_projectile_damage_fixed_at_fire_time() {
        let mut t = Tank::player(Vec2::ZERO);
        t.shoot();
        t.params.damage = 99;
        assert_eq!(t.projectiles[0].damage, 20);
    }

    #[test]
    fn test_upgrade_table_first_twelve_kills() {
        let mut t = Tank::player(Vec2::ZERO);
        let mut damage = 20;
        let mut speed = BASE_BULLET_SPEED;
        let mut delay = PLAYER_FIRE_DELAY_MS;
        let mut max_health = 100;

        for n in 1..=12u32 {
            let fx = t.upgrade_weapon();
            assert_eq!(fx.damage, n % 2 == 0, "kill {n}");
            assert_eq!(fx.bullet_speed, n % 3 == 0, "kill {n}");
            assert_eq!(fx.fire_rate, n % 5 == 0, "kill {n}");
            assert_eq!(fx.armor, n % 4 == 0, "kill {n}");

            if n % 2 == 0 {
                damage += 3;
            }
            if n % 3 == 0 {
                speed *= 1.1;
            }
            if n % 5 == 0 {
                delay = (delay * 0.9).max(200.0);
            }
            if n % 4 == 0 {
                max_health += 10;
            }
            assert_eq!(t.params.upgrades, n);
            assert_eq!(t.params.damage, damage);
            assert!((t.params.bullet_speed - speed).abs() < 1e-4);
            assert!((t.params.fire_delay_ms - delay).abs() < 1e-3);
            assert_eq!(t.params.max_health, max_health);
        }

        // Twelfth kill hits the %2, %3 and %4 branches together
        assert_eq!(t.params.damage, 38);
        assert_eq!(t.params.max_health, 130);
        assert!((t.params.fire_delay_ms - 486.0).abs() < 1e-3);
    }

    #[test]
    fn test_armor_upgrade_heal_is_capped() {
        let mut t = Tank::player(Vec2::ZERO);
        t.params.upgrades = 3;
        t.params.health = 105;
        t.params.max_health = 105;
        t.upgrade_weapon();
        assert_eq!(t.params.max_health, 115);
        assert_eq!(t.params.health, 115);

        t.params.upgrades = 7;
        t.params.health = 50;
        t.upgrade_weapon();
        assert_eq!(t.params.health, 60);
    }

    #[test]
    fn test_heal_capped_and_health_fraction() {
        let mut t = Tank::player(Vec2::ZERO);
        t.take_damage(30);
        t.heal(22);
        assert_eq!(t.params.health, 92);
        t.heal(50);
        assert_eq!(t.params.health, 100);
        t.take_damage(150);
        assert!(t.is_dead());
        assert_eq!(t.health_fraction(), 0.0);
    }

    proptest! {
        #[test]
        fn upgrades_are_a_function_of_kill_count(kills in 0u32..200) {
            let mut a = Tank::player(Vec2::ZERO);
            let mut b = Tank::player(Vec2::new(500.0, 500.0));
            for _ in 0..kills {
                a.upgrade_weapon();
                b.upgrade_weapon();
            }
            prop_assert_eq!(a.params, b.params);
        }

        #[test]
        fn fire_delay_never_below_floor(kills in 0u32..500) {
            let mut t = Tank::player(Vec2::ZERO);
            for _ in 0..kills {
                t.upgrade_weapon();
            }
            prop_assert!(t.params.fire_delay_ms >= MIN_FIRE_DELAY_MS);
            prop_assert!(t.params.health <= t.params.max_health);
        }
    }
}
