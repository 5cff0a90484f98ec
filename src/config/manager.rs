use super::{search::SearchConfig, traits::ConfigSection};
use crate::error::CodonsearchError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `CODONSEARCH_SEARCH__POPULATION_SIZE=50`
pub const ENV_PREFIX: &str = "CODONSEARCH";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), CodonsearchError> {
        self.search.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CodonsearchError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CodonsearchError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| CodonsearchError::Configuration(format!("Failed to parse config: {}", e)))?;

        self.replace(config)
    }

    /// Defaults, then the optional TOML file, then `CODONSEARCH_*` environment variables.
    pub fn load_layered(&self, path: Option<&Path>) -> Result<(), CodonsearchError> {
        let defaults = Config::try_from(&AppConfig::default())
            .map_err(|e| CodonsearchError::Configuration(format!("Failed to build defaults: {}", e)))?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CodonsearchError::Configuration(format!("Failed to load config: {}", e)))?;

        self.replace(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CodonsearchError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| CodonsearchError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| CodonsearchError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Applies `f` to a copy and commits it only if the result validates.
    pub fn update<F>(&self, f: F) -> Result<(), CodonsearchError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.get();
        f(&mut config);
        self.replace(config)
    }

    fn replace(&self, config: AppConfig) -> Result<(), CodonsearchError> {
        config.validate()?;
        let mut guard = self
            .config
            .write()
            .map_err(|_| CodonsearchError::Configuration("Config lock poisoned".to_string()))?;
        *guard = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Layered loading reads the process environment, so tests touching it run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("codonsearch-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let manager = ConfigManager::new();
        manager
            .update(|c| {
                c.search.population_size = 64;
                c.search.seed = Some(11);
            })
            .unwrap();

        let path = temp_path("roundtrip");
        manager.save_to_file(&path).unwrap();

        let loaded = ConfigManager::new();
        loaded.load_from_file(&path).unwrap();
        assert_eq!(loaded.get(), manager.get());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_update_is_not_committed() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.search.mutation_rate = 2.0);
        assert!(result.is_err());
        assert_eq!(manager.get().search.mutation_rate, 0.01);
    }

    #[test]
    fn test_layered_file_overrides_defaults() {
        let _guard = env_lock();
        let path = temp_path("layered");
        std::fs::write(&path, "[search]\nmax_generations = 42\nmutation_rate = 0.2\n").unwrap();

        let manager = ConfigManager::new();
        manager.load_layered(Some(&path)).unwrap();
        let config = manager.get();
        assert_eq!(config.search.max_generations, 42);
        assert_eq!(config.search.mutation_rate, 0.2);
        assert_eq!(config.search.population_size, 200);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_layered_rejects_invalid_file() {
        let _guard = env_lock();
        let path = temp_path("invalid");
        std::fs::write(&path, "[search]\npopulation_size = 0\n").unwrap();

        let manager = ConfigManager::new();
        assert!(manager.load_layered(Some(&path)).is_err());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_layered_env_overrides_defaults() {
        let _guard = env_lock();
        std::env::set_var("CODONSEARCH_SEARCH__POPULATION_SIZE", "50");
        std::env::set_var("CODONSEARCH_SEARCH__SEED", "9");

        let manager = ConfigManager::new();
        let loaded = manager.load_layered(None);

        std::env::remove_var("CODONSEARCH_SEARCH__POPULATION_SIZE");
        std::env::remove_var("CODONSEARCH_SEARCH__SEED");

        loaded.unwrap();
        let config = manager.get();
        assert_eq!(config.search.population_size, 50);
        assert_eq!(config.search.seed, Some(9));
        assert_eq!(config.search.max_generations, 10_000);
    }

    #[test]
    fn test_layered_env_overrides_file() {
        let _guard = env_lock();
        let path = temp_path("env-over-file");
        std::fs::write(&path, "[search]\nmax_generations = 42\npopulation_size = 80\n").unwrap();
        std::env::set_var("CODONSEARCH_SEARCH__MAX_GENERATIONS", "7");

        let manager = ConfigManager::new();
        let loaded = manager.load_layered(Some(&path));

        std::env::remove_var("CODONSEARCH_SEARCH__MAX_GENERATIONS");
        let _ = std::fs::remove_file(path);

        loaded.unwrap();
        let config = manager.get();
        assert_eq!(config.search.max_generations, 7);
        assert_eq!(config.search.population_size, 80);
    }
}
