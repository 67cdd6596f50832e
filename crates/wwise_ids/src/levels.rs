//! Game-side volume state driving the volume parameters
//!
//! The sound project exposes two volume RTPCs, one for music and one
//! for sound effects. Channel values are authored on a 0..=100 scale;
//! the value pushed to each parameter is the product of the master
//! channel with the category channel, so pulling the master slider
//! down scales everything.

use crate::ids::game_parameters;
use crate::UniqueId;

/// Volume channels exposed to the options UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeChannel {
    /// Scales every other channel
    Master,
    /// Music tracks
    Music,
    /// Everything that is not music
    SoundEffects,
}

/// Current volume settings (0..=100 per channel)
#[derive(Debug, Clone)]
pub struct VolumeSettings {
    master: f32,
    music: f32,
    sound_effects: f32,
}

impl VolumeSettings {
    /// Upper end of the authored volume scale
    pub const MAX_VOLUME: f32 = 100.0;

    /// Create settings with every channel at full volume
    #[must_use]
    pub const fn new() -> Self {
        Self {
            master: Self::MAX_VOLUME,
            music: Self::MAX_VOLUME,
            sound_effects: Self::MAX_VOLUME,
        }
    }

    /// Set a channel volume, clamped into 0..=100
    pub fn set(&mut self, channel: VolumeChannel, volume: f32) {
        let clamped = volume.clamp(0.0, Self::MAX_VOLUME);
        match channel {
            VolumeChannel::Master => self.master = clamped,
            VolumeChannel::Music => self.music = clamped,
            VolumeChannel::SoundEffects => self.sound_effects = clamped,
        }
    }

    /// Get a channel volume
    #[must_use]
    pub const fn get(&self, channel: VolumeChannel) -> f32 {
        match channel {
            VolumeChannel::Master => self.master,
            VolumeChannel::Music => self.music,
            VolumeChannel::SoundEffects => self.sound_effects,
        }
    }

    /// Effective value for a channel with the master scale applied
    #[must_use]
    pub fn effective(&self, channel: VolumeChannel) -> f32 {
        match channel {
            VolumeChannel::Master => self.master,
            VolumeChannel::Music => self.master * self.music,
            VolumeChannel::SoundEffects => self.master * self.sound_effects,
        }
    }

    /// Parameter updates to push after a change
    ///
    /// Pairs of (game parameter ID, effective value) ready to hand to
    /// the integration's set-RTPC call.
    #[must_use]
    pub fn rtpc_updates(&self) -> [(UniqueId, f32); 2] {
        [
            (
                game_parameters::MUSICVOLUME,
                self.effective(VolumeChannel::Music),
            ),
            (
                game_parameters::SOUNDEFFECTVOLUME,
                self.effective(VolumeChannel::SoundEffects),
            ),
        ]
    }
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self::new()
    }
}
