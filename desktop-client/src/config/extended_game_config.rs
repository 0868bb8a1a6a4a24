use common::config::Validate;
use common::games::tictactoe::{MatchSettings, MIN_FIELD_SIZE};
use serde::{Deserialize, Serialize};

pub const MIN_CELL_SIZE: u32 = 10;
pub const MAX_CELL_SIZE: u32 = 200;
pub const DEFAULT_CELL_SIZE: u32 = 100;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct ExtendedGameConfig {
    pub player_count: u32,
    pub field_size: u32,
    pub cell_size: u32,
}

impl ExtendedGameConfig {
    /// Same correction the settings form applies after every edit.
    pub fn normalized(self) -> Self {
        let settings = MatchSettings::extended(self.field_size as usize, self.player_count as usize)
            .normalized();
        Self {
            player_count: settings.player_count as u32,
            field_size: settings.field_size as u32,
            cell_size: self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE),
        }
    }

    pub fn to_match_settings(self) -> MatchSettings {
        MatchSettings::extended(self.field_size as usize, self.player_count as usize)
    }
}

impl Validate for ExtendedGameConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_match_settings()
            .validate()
            .map_err(|e| e.to_string())?;
        if self.cell_size < MIN_CELL_SIZE || self.cell_size > MAX_CELL_SIZE {
            return Err(format!(
                "Cell size must be between {} and {}, got {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE, self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for ExtendedGameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            field_size: MIN_FIELD_SIZE as u32,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}
