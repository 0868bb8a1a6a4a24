use super::error::GameError;
use super::types::PlayerMark;

pub const MIN_FIELD_SIZE: usize = 3;
pub const MAX_FIELD_SIZE: usize = 20;
pub const MIN_PLAYER_COUNT: usize = 2;
pub const CLASSIC_FIELD_SIZE: usize = 3;
pub const CLASSIC_PLAYER_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub field_size: usize,
    pub player_count: usize,
    pub vs_bot: bool,
}

impl MatchSettings {
    pub fn classic(vs_bot: bool) -> Self {
        Self {
            field_size: CLASSIC_FIELD_SIZE,
            player_count: CLASSIC_PLAYER_COUNT,
            vs_bot,
        }
    }

    pub fn extended(field_size: usize, player_count: usize) -> Self {
        Self {
            field_size,
            player_count,
            vs_bot: false,
        }
    }

    pub fn normalized(self) -> Self {
        let field_size = self.field_size.clamp(MIN_FIELD_SIZE, MAX_FIELD_SIZE);
        let mut player_count = self.player_count.max(MIN_PLAYER_COUNT);
        if player_count >= field_size {
            player_count = field_size - 1;
        }
        Self {
            field_size,
            player_count,
            vs_bot: self.vs_bot && player_count == CLASSIC_PLAYER_COUNT,
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        validate_dimensions(self.field_size, self.player_count)?;
        if self.field_size > MAX_FIELD_SIZE {
            return Err(GameError::Configuration(format!(
                "field size must not exceed {}, got {}",
                MAX_FIELD_SIZE, self.field_size
            )));
        }
        if self.vs_bot && self.player_count != 2 {
            return Err(GameError::Configuration(format!(
                "bot opponent requires exactly 2 players, got {}",
                self.player_count
            )));
        }
        Ok(())
    }

    pub fn player_marks(&self) -> Vec<PlayerMark> {
        if self.player_count == 2 {
            vec![PlayerMark::from("X"), PlayerMark::from("O")]
        } else {
            (0..self.player_count)
                .map(|i| PlayerMark::new(i.to_string()))
                .collect()
        }
    }

    pub fn validate_players(&self, players: &[PlayerMark]) -> Result<(), GameError> {
        if players.len() != self.player_count {
            return Err(GameError::Configuration(format!(
                "player count ({}) must equal the number of player marks ({})",
                self.player_count,
                players.len()
            )));
        }
        Ok(())
    }
}

pub(super) fn validate_dimensions(field_size: usize, player_count: usize) -> Result<(), GameError> {
    if field_size < MIN_FIELD_SIZE {
        return Err(GameError::Configuration(format!(
            "field size must be at least {}, got {}",
            MIN_FIELD_SIZE, field_size
        )));
    }
    if player_count < MIN_PLAYER_COUNT {
        return Err(GameError::Configuration(format!(
            "player count must be greater than 1, got {}",
            player_count
        )));
    }
    if player_count >= field_size {
        return Err(GameError::Configuration(format!(
            "player count ({}) must be less than field size ({})",
            player_count, field_size
        )));
    }
    Ok(())
}
