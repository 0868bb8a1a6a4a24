use common::config::Validate;
use common::games::tictactoe::MatchSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub struct ClassicGameConfig {
    pub vs_bot: bool,
}

impl ClassicGameConfig {
    pub fn to_match_settings(self) -> MatchSettings {
        MatchSettings::classic(self.vs_bot)
    }
}

impl Validate for ClassicGameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
