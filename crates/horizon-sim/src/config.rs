//! Runtime tuning and engine configuration.
//!
//! `TuningConfig` mirrors the gameplay tunables in `horizon_core::constants`.
//! Every field falls back to its constant when absent from the TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use horizon_core::constants::*;

use crate::error::ConfigError;

/// Gameplay tunables that may be overridden at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Large asteroids seeded when a run starts.
    pub asteroid_field_count: usize,
    /// Large asteroids seeded behind the main menu.
    pub menu_asteroid_count: usize,
    /// Normal enemies per wave.
    pub wave_enemy_count: u32,
    pub bullet_speed: f64,
    pub bullet_lifetime: f64,
    pub bullet_damage: f64,
    pub ram_damage: f64,
    pub ship_max_hits: u32,
    pub player_fire_cooldown: f64,
    pub boost_cooldown: f64,
    pub level_up_delay_secs: f64,
    pub max_level: u32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            asteroid_field_count: ASTEROID_FIELD_COUNT,
            menu_asteroid_count: ASTEROID_MENU_COUNT,
            wave_enemy_count: WAVE_ENEMY_COUNT,
            bullet_speed: BULLET_BASE_SPEED,
            bullet_lifetime: BULLET_LIFETIME,
            bullet_damage: BULLET_DAMAGE,
            ram_damage: RAM_DAMAGE_TO_ENEMY,
            ship_max_hits: SHIP_MAX_HITS,
            player_fire_cooldown: PLAYER_FIRE_COOLDOWN,
            boost_cooldown: BOOST_COOLDOWN,
            level_up_delay_secs: LEVEL_UP_DELAY_SECS,
            max_level: MAX_LEVEL,
        }
    }
}

impl TuningConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TuningConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("bullet_speed", self.bullet_speed)?;
        positive("bullet_lifetime", self.bullet_lifetime)?;
        positive("bullet_damage", self.bullet_damage)?;
        positive("ram_damage", self.ram_damage)?;
        non_negative("player_fire_cooldown", self.player_fire_cooldown)?;
        non_negative("boost_cooldown", self.boost_cooldown)?;
        non_negative("level_up_delay_secs", self.level_up_delay_secs)?;
        if self.ship_max_hits == 0 {
            return Err(invalid("ship_max_hits", "must be at least 1"));
        }
        if self.wave_enemy_count == 0 {
            return Err(invalid("wave_enemy_count", "must be at least 1"));
        }
        if self.max_level < STARTING_LEVEL {
            return Err(invalid("max_level", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be non-negative, got {value}")))
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs give the same run.
    pub seed: u64,
    pub tuning: TuningConfig,
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            tuning: TuningConfig::default(),
        }
    }
}
