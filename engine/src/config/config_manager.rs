use std::io::ErrorKind;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::Validate;

/// File-backed YAML configuration with an in-memory cache. A missing file is
/// not an error: it yields the validated `Default` so a first run works
/// without any setup.
pub struct ConfigManager<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    file_path: String,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            config: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        if let Some(content) = content {
            let config: TConfig = serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to deserialize config: {}", e))?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&self.file_path, &serialized)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}
