//! Sound triggers for simulation events
//!
//! The simulation only emits [`GameEvent`]s. This module maps them to sound
//! cues and hands those to whatever backend the host provides.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Burger fires french fries
    BurgerShot,
    /// Burger hit by a bear or projectile
    BurgerDamage,
    /// Burger health reached zero
    BurgerDeath,
    /// A bear exploded
    Explosion,
    /// Two bears bounced
    TeddyBounce,
    /// A bear fired
    TeddyShot,
}

impl SoundEffect {
    /// Sound for an event, if it has one
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::BurgerShot => Some(SoundEffect::BurgerShot),
            GameEvent::BurgerDamaged => Some(SoundEffect::BurgerDamage),
            GameEvent::BurgerDied => Some(SoundEffect::BurgerDeath),
            GameEvent::BearDestroyed => Some(SoundEffect::Explosion),
            GameEvent::BearBounce => Some(SoundEffect::TeddyBounce),
            GameEvent::BearShot => Some(SoundEffect::TeddyShot),
            GameEvent::SpawnDeferred => None,
        }
    }

    /// Asset name the host loader uses for this sound
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::BurgerShot => "audio/BurgerShot",
            SoundEffect::BurgerDamage => "audio/BurgerDamage",
            SoundEffect::BurgerDeath => "audio/BurgerDeath",
            SoundEffect::Explosion => "audio/Explosion",
            SoundEffect::TeddyBounce => "audio/TeddyBounce",
            SoundEffect::TeddyShot => "audio/TeddyShot",
        }
    }

    /// Per-effect base volume (0.0 - 1.0)
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::BurgerDamage => 0.8,
            _ => 1.0,
        }
    }
}

/// Playback backend provided by the host
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sounds for a batch of events
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for effect in events.iter().copied().filter_map(SoundEffect::for_event) {
            self.sink.play(effect, vol * effect.base_volume());
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink {
    pub played: usize,
}

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        self.played += 1;
        log::trace!("play {} at {:.2}", effect.asset_name(), volume);
    }
}
