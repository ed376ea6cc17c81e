use serde::{Deserialize, Serialize};
use snake_engine::config::{ConfigManager, Validate};
use snake_engine::game::GameSettings;

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<ClientConfig> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub game: GameSettings,
    /// Fixed RNG seed; `None` draws a fresh one per game.
    pub seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let config = ClientConfig {
            seed: Some(12345),
            ..ClientConfig::default()
        };

        let manager: ConfigManager<ClientConfig> =
            ConfigManager::from_yaml_file(&get_temp_file_path());

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_missing_config_file_yields_default() {
        let manager: ConfigManager<ClientConfig> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid = r#"
            game:
              surface_width: 600
              surface_height: 400
              cell_size: 0
              tick_interval_ms: 150
              start_length: 3
              level: 1
            seed: null
        "#;

        let file_path = get_temp_file_path();
        std::fs::write(&file_path, invalid).unwrap();

        let manager: ConfigManager<ClientConfig> = ConfigManager::from_yaml_file(&file_path);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_config_cant_be_written() {
        let config = ClientConfig {
            game: GameSettings {
                cell_size: 0,
                ..GameSettings::default()
            },
            seed: None,
        };

        let manager: ConfigManager<ClientConfig> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        assert!(manager.set_config(&config).is_err());
    }
}
