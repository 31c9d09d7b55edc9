//! Sound effects and background music
//!
//! Sounds are loaded from `assets/` at startup. A missing or undecodable
//! file is logged and that cue simply stays silent.

use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};

use crate::config::GameConfig;
use crate::game::SoundCue;
use crate::texture::ASSET_DIR;

const MUSIC_FILE: &str = "music.mp3";

/// Which file to play and how
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub file: &'static str,
    pub volume: f32,
    pub looped: bool,
}

impl Playback {
    fn params(&self) -> PlaySoundParams {
        PlaySoundParams {
            looped: self.looped,
            volume: self.volume,
        }
    }
}

/// How each cue is played. Only the star bell is turned down.
pub fn cue_playback(cue: SoundCue, config: &GameConfig) -> Playback {
    let (file, volume) = match cue {
        SoundCue::Bell => ("ding.mp3", 1.0),
        SoundCue::Bell2 => ("ding2.mp3", config.star_volume),
        SoundCue::Dead => ("dead.mp3", 1.0),
    };
    Playback { file, volume, looped: false }
}

pub fn music_playback(config: &GameConfig) -> Playback {
    Playback {
        file: MUSIC_FILE,
        volume: config.music_volume,
        looped: true,
    }
}

/// A loaded sound and the way it is played
struct Track {
    sound: Sound,
    playback: Playback,
}

async fn load_track(playback: Playback) -> Option<Track> {
    let path = format!("{}/{}", ASSET_DIR, playback.file);
    match load_sound(&path).await {
        Ok(sound) => Some(Track { sound, playback }),
        Err(e) => {
            log::warn!("Missing sound {}: {}", path, e);
            None
        }
    }
}

pub struct SoundBank {
    bell: Option<Track>,
    bell2: Option<Track>,
    dead: Option<Track>,
    music: Option<Track>,
    music_started: bool,
}

impl SoundBank {
    pub async fn load(config: &GameConfig) -> Self {
        Self {
            bell: load_track(cue_playback(SoundCue::Bell, config)).await,
            bell2: load_track(cue_playback(SoundCue::Bell2, config)).await,
            dead: load_track(cue_playback(SoundCue::Dead, config)).await,
            music: load_track(music_playback(config)).await,
            music_started: false,
        }
    }

    /// Start the looping soundtrack (once)
    pub fn start_music(&mut self) {
        if self.music_started {
            return;
        }
        if let Some(track) = &self.music {
            play_sound(&track.sound, track.playback.params());
            self.music_started = true;
        }
    }

    pub fn play(&self, cue: SoundCue) {
        let track = match cue {
            SoundCue::Bell => &self.bell,
            SoundCue::Bell2 => &self.bell2,
            SoundCue::Dead => &self.dead,
        };
        if let Some(track) = track {
            play_sound(&track.sound, track.playback.params());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_map_to_their_files() {
        let config = GameConfig::default();
        assert_eq!(cue_playback(SoundCue::Bell, &config).file, "ding.mp3");
        assert_eq!(cue_playback(SoundCue::Bell2, &config).file, "ding2.mp3");
        assert_eq!(cue_playback(SoundCue::Dead, &config).file, "dead.mp3");
    }

    #[test]
    fn test_star_bell_uses_star_volume() {
        let config = GameConfig {
            star_volume: 0.35,
            ..GameConfig::default()
        };
        let bell2 = cue_playback(SoundCue::Bell2, &config);
        assert_eq!(bell2.volume, 0.35);
        assert!(!bell2.looped);
        assert_eq!(cue_playback(SoundCue::Bell, &config).volume, 1.0);
        assert_eq!(cue_playback(SoundCue::Dead, &config).volume, 1.0);
    }

    #[test]
    fn test_music_loops_at_music_volume() {
        let config = GameConfig {
            music_volume: 0.25,
            ..GameConfig::default()
        };
        assert_eq!(
            music_playback(&config),
            Playback { file: "music.mp3", volume: 0.25, looped: true }
        );
        let params = music_playback(&config).params();
        assert!(params.looped);
        assert_eq!(params.volume, 0.25);
    }
}
