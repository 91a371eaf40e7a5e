//! Sound playback
//!
//! Effects are fired from the simulation's per-tick events. The engine
//! sound is a loop that runs while the player is driving.

use macroquad::audio::{PlaySoundParams, Sound, play_sound, stop_sound};

use crate::consts::{ENGINE_VOLUME, SFX_VOLUME};
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Any tank fired
    Shoot,
    /// Projectile hit or tank destroyed
    Explosion,
}

impl SoundEffect {
    /// The effect a simulation event should make, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shot { .. } => Some(Self::Shoot),
            GameEvent::Explosion => Some(Self::Explosion),
            GameEvent::BotDestroyed | GameEvent::LevelUp { .. } | GameEvent::PlayerDestroyed => None,
        }
    }
}

/// Change to apply to the engine loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    Start,
    Stop,
}

/// Start the loop on the first moving frame, stop it on the first idle one
pub fn engine_loop_command(playing: bool, moving: bool) -> Option<LoopCommand> {
    match (playing, moving) {
        (false, true) => Some(LoopCommand::Start),
        (true, false) => Some(LoopCommand::Stop),
        _ => None,
    }
}

/// Audio manager for the game
pub struct AudioManager {
    shoot: Sound,
    explosion: Sound,
    engine: Sound,
    engine_playing: bool,
}

impl AudioManager {
    pub fn new(shoot: Sound, explosion: Sound, engine: Sound) -> Self {
        Self {
            shoot,
            explosion,
            engine,
            engine_playing: false,
        }
    }

    /// Play a one-shot effect
    pub fn play(&self, effect: SoundEffect) {
        let sound = match effect {
            SoundEffect::Shoot => &self.shoot,
            SoundEffect::Explosion => &self.explosion,
        };
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: SFX_VOLUME,
            },
        );
    }

    /// Play the effects for one tick's events
    pub fn handle_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Keep the engine loop in step with player movement
    pub fn set_engine_loop(&mut self, moving: bool) {
        match engine_loop_command(self.engine_playing, moving) {
            Some(LoopCommand::Start) => {
                play_sound(
                    &self.engine,
                    PlaySoundParams {
                        looped: true,
                        volume: ENGINE_VOLUME,
                    },
                );
                self.engine_playing = true;
            }
            Some(LoopCommand::Stop) => {
                stop_sound(&self.engine);
                self.engine_playing = false;
            }
            None => {}
        }
    }
}
