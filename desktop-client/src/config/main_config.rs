use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{ClassicGameConfig, ExtendedGameConfig, GameType};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 10_000;

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub last_game: Option<GameType>,
    pub classic: ClassicGameConfig,
    pub extended: ExtendedGameConfig,
    /// Pause before the bot's mark appears, so the turn change is visible.
    #[serde(default = "default_bot_delay_ms")]
    pub bot_delay_ms: u64,
}

fn default_bot_delay_ms() -> u64 {
    900
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.classic.validate()?;
        self.extended.validate()?;
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_game: None,
            classic: ClassicGameConfig::default(),
            extended: ExtendedGameConfig::default(),
            bot_delay_ms: default_bot_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = Config {
            last_game: Some(GameType::Extended),
            extended: ExtendedGameConfig {
                player_count: 3,
                field_size: 6,
                cell_size: 40,
            },
            bot_delay_ms: 250,
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_default_config_path_points_at_config_file() {
        let path = default_config_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_bot_delay_uses_default() {
        let content = r#"
last_game: Classic
classic:
  vs_bot: true
extended:
  player_count: 2
  field_size: 3
  cell_size: 100
"#;
        let config: Config = serde_yaml_ng::from_str(content).unwrap();
        assert_eq!(config.bot_delay_ms, 900);
        assert!(config.classic.vs_bot);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
last_game: Extended
classic:
  vs_bot: false
extended:
  player_count: 5
  field_size: 4
  cell_size: 100
bot_delay_ms: 900
"#;
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ClientConfigManager =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }
}
