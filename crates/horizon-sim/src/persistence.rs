//! Persisted arcade progress: a single integer level under `PROGRESS_KEY`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use horizon_core::constants::PROGRESS_KEY;

use crate::error::StoreError;

/// Key-value access to the persisted arcade level.
pub trait ProgressStore: Send {
    /// The stored level, or `None` if nothing has been saved yet.
    fn load_level(&self) -> Result<Option<u32>, StoreError>;

    fn save_level(&mut self, level: u32) -> Result<(), StoreError>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    level: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(level: u32) -> Self {
        Self { level: Some(level) }
    }
}

impl ProgressStore for MemoryStore {
    fn load_level(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.level)
    }

    fn save_level(&mut self, level: u32) -> Result<(), StoreError> {
        self.level = Some(level);
        Ok(())
    }
}

/// A JSON object file. Keys other than the level are preserved on write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if contents.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => Ok(Some(map)),
            _ => Err(StoreError::NotAnObject),
        }
    }
}

impl ProgressStore for JsonFileStore {
    fn load_level(&self) -> Result<Option<u32>, StoreError> {
        let Some(map) = self.read_object()? else {
            return Ok(None);
        };
        match map.get(PROGRESS_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => parse_level(value).map(Some),
        }
    }

    fn save_level(&mut self, level: u32) -> Result<(), StoreError> {
        let mut map = self.read_object()?.unwrap_or_default();
        map.insert(PROGRESS_KEY.to_string(), Value::from(level));
        let contents = serde_json::to_string_pretty(&Value::Object(map))?;
        std::fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Accept numbers and numeric strings (key-value stores often hold strings).
fn parse_level(value: &Value) -> Result<u32, StoreError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| StoreError::InvalidValue {
        key: PROGRESS_KEY.to_string(),
        value: value.to_string(),
    })
}

/// Clamp a stored level into `[1, max_level]`, defaulting to 1.
pub fn clamp_level(stored: Option<u32>, max_level: u32) -> u32 {
    stored
        .unwrap_or(horizon_core::constants::STARTING_LEVEL)
        .clamp(horizon_core::constants::STARTING_LEVEL, max_level.max(1))
}
