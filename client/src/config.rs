use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_common::snake::GameSettings;

pub const DEFAULT_CONFIG_FILE: &str = "snake_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

/// Player profile plus the last used game settings.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_name: Option<String>,
    #[serde(default)]
    pub high_score: u32,
    pub game: GameSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.player_name
            && name.trim().is_empty()
        {
            return Err("player_name must not be blank".to_string());
        }
        self.game.validate()?;
        Ok(())
    }
}
