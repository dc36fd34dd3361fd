use std::fs;
use std::path::Path;
use std::sync::RwLock;

use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<ConfigStore>> = OnceCell::new();

/// Parsed `config.toml`, read section by section.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    table: Table,
}

impl ConfigStore {
    /// Reads `path`. A missing file gives an empty store; so does a file that fails to parse.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::warn!("Config file not found at {:?}, using defaults.", path);
            return Ok(Self::default());
        }

        log::info!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let table = toml::from_str(content).unwrap_or_else(|e| {
            log::error!("Config syntax error: {}, using empty config.", e);
            Table::new()
        });
        Self { table }
    }

    pub fn has_section(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Deserializes section `[key]`, or `T::default()` when it is absent or malformed.
    pub fn section<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(value) = self.table.get(key) else {
            return T::default();
        };

        value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        })
    }
}

/// Loads the process-wide config. Only the first call succeeds.
pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let store = ConfigStore::load(path)?;

    GLOBAL_CONFIG.set(RwLock::new(store))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Reads a section of the process-wide config; defaults before [`init`] ran.
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("Config read of '[{}]' before init, using default.", key);
        return T::default();
    };

    let guard = store.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.section(key)
}
