//! Model dimensions for the ship and enemies.
//!
//! The simulation only needs each model's local half extents. Loading goes
//! through `AssetSource`; an engine is built from an `AssetCatalog`, so no
//! entity can be spawned before every model has loaded.

use std::collections::HashMap;
use std::path::Path;

use glam::DVec3;
use serde::Deserialize;

use horizon_core::constants::SHIP_DESIRED_SIZE;
use horizon_core::enums::EnemyKind;

use crate::error::AssetError;

pub const SHIP_MODEL: &str = "ship";
pub const ENEMY_MODEL: &str = "enemy";
pub const BOSS_MODEL: &str = "boss";

/// The part of a loaded model the simulation uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInfo {
    /// Half extents at scale 1, in model space.
    pub half_extents: DVec3,
}

/// Anything that can resolve a model name to its dimensions.
pub trait AssetSource {
    fn model(&self, name: &str) -> Result<ModelInfo, AssetError>;
}

/// Every model the simulation spawns, loaded together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetCatalog {
    ship: ModelInfo,
    enemy: ModelInfo,
    boss: ModelInfo,
}

impl AssetCatalog {
    /// Load the ship, enemy and boss models. The ship is normalized so its
    /// largest dimension is `SHIP_DESIRED_SIZE`.
    pub fn load(source: &dyn AssetSource) -> Result<Self, AssetError> {
        let ship = checked(SHIP_MODEL, source.model(SHIP_MODEL)?)?;
        let enemy = checked(ENEMY_MODEL, source.model(ENEMY_MODEL)?)?;
        let boss = checked(BOSS_MODEL, source.model(BOSS_MODEL)?)?;

        let largest = 2.0 * ship.half_extents.max_element();
        let ship = ModelInfo {
            half_extents: ship.half_extents * (SHIP_DESIRED_SIZE / largest),
        };

        log::info!(
            "Loaded models: ship {:?}, enemy {:?}, boss {:?}",
            ship.half_extents,
            enemy.half_extents,
            boss.half_extents
        );
        Ok(Self { ship, enemy, boss })
    }

    /// Normalized ship half extents.
    pub fn ship_half_extents(&self) -> DVec3 {
        self.ship.half_extents
    }

    /// Enemy half extents at scale 1.
    pub fn enemy_half_extents(&self, kind: EnemyKind) -> DVec3 {
        match kind {
            EnemyKind::Normal => self.enemy.half_extents,
            EnemyKind::Boss => self.boss.half_extents,
        }
    }
}

fn checked(name: &str, info: ModelInfo) -> Result<ModelInfo, AssetError> {
    let h = info.half_extents;
    if h.is_finite() && h.min_element() > 0.0 {
        Ok(info)
    } else {
        Err(AssetError::InvalidExtents {
            name: name.to_string(),
            extents: h.to_array(),
        })
    }
}

/// Dimensions of the stock models.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinModels;

impl AssetSource for BuiltinModels {
    fn model(&self, name: &str) -> Result<ModelInfo, AssetError> {
        let half_extents = match name {
            SHIP_MODEL => DVec3::new(1.6, 0.6, 2.5),
            ENEMY_MODEL => DVec3::new(1.2, 0.5, 1.4),
            BOSS_MODEL => DVec3::new(1.5, 0.7, 1.8),
            other => return Err(AssetError::NotFound(other.to_string())),
        };
        Ok(ModelInfo { half_extents })
    }
}

#[derive(Deserialize)]
struct Manifest {
    models: HashMap<String, ManifestEntry>,
}

#[derive(Deserialize)]
struct ManifestEntry {
    half_extents: [f64; 3],
}

/// Models described by a JSON manifest:
/// `{ "models": { "<name>": { "half_extents": [x, y, z] } } }`.
#[derive(Debug, Clone, Default)]
pub struct ManifestModels {
    models: HashMap<String, ModelInfo>,
}

impl ManifestModels {
    pub fn from_json_str(contents: &str) -> Result<Self, AssetError> {
        let manifest: Manifest = serde_json::from_str(contents)?;
        let models = manifest
            .models
            .into_iter()
            .map(|(name, entry)| {
                (
                    name,
                    ModelInfo {
                        half_extents: DVec3::from_array(entry.half_extents),
                    },
                )
            })
            .collect();
        Ok(Self { models })
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

impl AssetSource for ManifestModels {
    fn model(&self, name: &str) -> Result<ModelInfo, AssetError> {
        self.models
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}
