//! Audio system
//!
//! Mixing is done by an external backend. The engine only owns the volume
//! settings, loaded from [`AudioConfig`], and derives effective gains from
//! them.

use crate::core::config::{AudioConfig, MAX_VOLUME};

/// Volume channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioChannel {
    /// Background music
    Music,
    /// Sound effects
    Sound,
}

/// Audio settings owned by the engine
#[derive(Debug, Clone)]
pub struct AudioSystem {
    master_volume: u8,
    music_volume: u8,
    sound_volume: u8,
    muted: bool,
}

impl AudioSystem {
    /// Create the audio system from configured volumes
    pub fn new(config: &AudioConfig) -> Self {
        log::debug!(
            "Audio volumes: master {} music {} sound {}",
            config.master_volume,
            config.music_volume,
            config.sound_volume
        );
        Self {
            master_volume: config.master_volume.min(MAX_VOLUME),
            music_volume: config.music_volume.min(MAX_VOLUME),
            sound_volume: config.sound_volume.min(MAX_VOLUME),
            muted: false,
        }
    }

    /// Set the master volume, clamped to `0..=100`
    pub fn set_master_volume(&mut self, volume: u8) {
        self.master_volume = volume.min(MAX_VOLUME);
    }

    /// Set a channel volume, clamped to `0..=100`
    pub fn set_volume(&mut self, channel: AudioChannel, volume: u8) {
        let volume = volume.min(MAX_VOLUME);
        match channel {
            AudioChannel::Music => self.music_volume = volume,
            AudioChannel::Sound => self.sound_volume = volume,
        }
    }

    /// Mute or unmute all output
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Configured volume of a channel
    pub fn volume(&self, channel: AudioChannel) -> u8 {
        match channel {
            AudioChannel::Music => self.music_volume,
            AudioChannel::Sound => self.sound_volume,
        }
    }

    /// Master volume
    pub fn master_volume(&self) -> u8 {
        self.master_volume
    }

    /// Linear gain in `0.0..=1.0` for a channel after master and mute
    pub fn gain(&self, channel: AudioChannel) -> f32 {
        if self.muted {
            return 0.0;
        }
        let max = f32::from(MAX_VOLUME);
        f32::from(self.master_volume) / max * f32::from(self.volume(channel)) / max
    }
}

impl Default for AudioSystem {
    fn default() -> Self {
        Self::new(&AudioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gain_combines_master_and_channel() {
        let audio = AudioSystem::new(&AudioConfig {
            master_volume: 50,
            music_volume: 50,
            sound_volume: 100,
        });

        assert_relative_eq!(audio.gain(AudioChannel::Music), 0.25);
        assert_relative_eq!(audio.gain(AudioChannel::Sound), 0.5);
    }

    #[test]
    fn test_volumes_are_clamped() {
        let mut audio = AudioSystem::default();
        audio.set_volume(AudioChannel::Sound, 250);
        audio.set_master_volume(101);

        assert_eq!(audio.volume(AudioChannel::Sound), 100);
        assert_eq!(audio.master_volume(), 100);
    }

    #[test]
    fn test_mute_silences_everything() {
        let mut audio = AudioSystem::default();
        audio.set_muted(true);
        assert_relative_eq!(audio.gain(AudioChannel::Music), 0.0);
    }
}
