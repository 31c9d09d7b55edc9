//! Game configuration
//!
//! Tunables live in `assets/config.ron` (Rusty Object Notation) so the game
//! can be rebalanced without a rebuild. Every field has a default, so a
//! config file only needs the values it overrides.

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// Path of the config file, relative to the working directory (or the web root)
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Widest world (per half, in screens) the spawners and camera are tuned for
pub const MAX_WORLD_SCREENS: u32 = 100;

/// How many of each entity the scene spawns at setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnCounts {
    pub clouds: usize,
    pub trees: usize,
    pub fires: usize,
    pub coins: usize,
    pub stars: usize,
    pub dragons: usize,
}

impl Default for SpawnCounts {
    fn default() -> Self {
        Self {
            clouds: 25,
            trees: 50,
            fires: 10,
            coins: 25,
            stars: 50,
            dragons: 25,
        }
    }
}

/// All gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub counts: SpawnCounts,
    /// Width of each world half, in screens
    pub world_screens: u32,
    pub start_lives: u32,
    /// Points awarded per coin or star
    pub pickup_score: u32,
    /// A life is granted whenever the score lands on a multiple of this
    pub life_bonus_every: u32,
    /// How long the hit/star tint stays on the player
    pub tint_seconds: f32,
    pub player_bounce: f32,
    pub music_volume: f32,
    pub star_volume: f32,
    /// Fraction of the remaining distance the camera covers per 1/60 s
    pub camera_lerp: f32,
    /// Draw physics body outlines
    pub debug_bodies: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            counts: SpawnCounts::default(),
            world_screens: 10,
            start_lives: 5,
            pickup_score: 10,
            life_bonus_every: 100,
            tint_seconds: 3.0,
            player_bounce: 0.2,
            music_volume: 0.5,
            star_volume: 0.2,
            camera_lerp: 0.05,
            debug_bodies: false,
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
            ConfigError::ValidationError(_) => None,
        }
    }
}

fn check_unit_range(name: &str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationError(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk (native only; WASM fetches it over HTTP)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Reject values that would break world layout or scoring
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_screens == 0 || self.world_screens > MAX_WORLD_SCREENS {
            return Err(ConfigError::ValidationError(format!(
                "world_screens must be within 1..={}, got {}",
                MAX_WORLD_SCREENS, self.world_screens
            )));
        }
        if self.start_lives == 0 {
            return Err(ConfigError::ValidationError("start_lives must be at least 1".into()));
        }
        if self.pickup_score == 0 {
            return Err(ConfigError::ValidationError("pickup_score must be at least 1".into()));
        }
        if self.life_bonus_every == 0 {
            return Err(ConfigError::ValidationError("life_bonus_every must be at least 1".into()));
        }
        if !self.tint_seconds.is_finite() || self.tint_seconds < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tint_seconds must be a non-negative number, got {}",
                self.tint_seconds
            )));
        }
        check_unit_range("player_bounce", self.player_bounce)?;
        check_unit_range("music_volume", self.music_volume)?;
        check_unit_range("star_volume", self.star_volume)?;
        if !(self.camera_lerp > 0.0 && self.camera_lerp <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "camera_lerp must be within (0, 1], got {}",
                self.camera_lerp
            )));
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_config() -> Result<GameConfig, ConfigError> {
    GameConfig::load(Path::new(CONFIG_PATH))
}

#[cfg(target_arch = "wasm32")]
async fn read_config() -> Result<GameConfig, ConfigError> {
    let contents = macroquad::file::load_string(CONFIG_PATH).await.map_err(|e| {
        ConfigError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))
    })?;
    GameConfig::from_ron_str(&contents)
}

/// Load `assets/config.ron`, falling back to defaults on any failure
pub async fn load_config() -> GameConfig {
    match read_config().await {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            log::warn!("Using default config, {} unusable: {}", CONFIG_PATH, e);
            GameConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = GameConfig::from_ron_str("(start_lives: 3, counts: (coins: 4))").unwrap();
        assert_eq!(config.start_lives, 3);
        assert_eq!(config.counts.coins, 4);
        assert_eq!(config.counts.dragons, 25);
        assert_eq!(config.pickup_score, 10);
        assert_eq!(config.life_bonus_every, 100);
    }

    #[test]
    fn test_empty_struct_is_default() {
        let config = GameConfig::from_ron_str("()").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron_str("(start_lives: \"five\")").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_rejects_zero_lives() {
        let err = GameConfig::from_ron_str("(start_lives: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("start_lives"));
    }

    #[test]
    fn test_validation_rejects_huge_world() {
        let err = GameConfig::from_ron_str("(world_screens: 1000000)").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(GameConfig::from_ron_str("(world_screens: 100)").is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_volume_and_lerp() {
        assert!(GameConfig::from_ron_str("(music_volume: 1.5)").is_err());
        assert!(GameConfig::from_ron_str("(camera_lerp: 0.0)").is_err());
        assert!(GameConfig::from_ron_str("(tint_seconds: -1.0)").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(world_screens: 2, debug_bodies: true)").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.world_screens, 2);
        assert!(config.debug_bodies);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = GameConfig::from_ron_str(include_str!("../assets/config.ron")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
