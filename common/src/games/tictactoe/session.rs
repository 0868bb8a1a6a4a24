use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{BotInput, BotType, calculate_move};
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::settings::MatchSettings;
use super::types::{GameStatus, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitHuman,
    AwaitBot,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotSeat {
    pub player_index: usize,
    pub bot_type: BotType,
}

/// Owns one match at a time and routes human and bot moves into it.
///
/// The session never waits: when it reports [`TurnPhase::AwaitBot`] the
/// caller decides when to call [`TicTacToeSession::play_bot_turn`].
pub struct TicTacToeSession {
    settings: MatchSettings,
    state: TicTacToeGameState,
    bot: Option<BotSeat>,
    rng: SessionRng,
    matches_started: usize,
}

impl TicTacToeSession {
    pub fn new(settings: MatchSettings, rng: SessionRng) -> Result<Self, GameError> {
        let state = Self::fresh_state(&settings)?;
        let bot = settings.vs_bot.then_some(BotSeat {
            player_index: 1,
            bot_type: BotType::LineHeuristic,
        });

        log!(
            "Match started: {}x{} field, {} players{}, seed {}",
            settings.field_size,
            settings.field_size,
            settings.player_count,
            if bot.is_some() { ", bot opponent" } else { "" },
            rng.seed()
        );

        Ok(Self {
            settings,
            state,
            bot,
            rng,
            matches_started: 1,
        })
    }

    pub fn with_bot_type(mut self, bot_type: BotType) -> Self {
        if let Some(seat) = self.bot.as_mut() {
            seat.bot_type = bot_type;
        }
        self
    }

    fn fresh_state(settings: &MatchSettings) -> Result<TicTacToeGameState, GameError> {
        settings.validate()?;
        let players = settings.player_marks();
        settings.validate_players(&players)?;
        TicTacToeGameState::new(settings.field_size, players)
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn bot_seat(&self) -> Option<BotSeat> {
        self.bot
    }

    pub fn matches_started(&self) -> usize {
        self.matches_started
    }

    pub fn phase(&self) -> TurnPhase {
        if self.state.status().is_over() {
            TurnPhase::Finished
        } else if self.is_bot_index(self.state.current_player_index()) {
            TurnPhase::AwaitBot
        } else {
            TurnPhase::AwaitHuman
        }
    }

    fn is_bot_index(&self, index: usize) -> bool {
        self.bot.is_some_and(|seat| seat.player_index == index)
    }

    pub fn handle_human_move(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        match self.phase() {
            TurnPhase::Finished => return Err(GameError::MatchOver),
            TurnPhase::AwaitBot => return Err(GameError::NotHumanTurn),
            TurnPhase::AwaitHuman => {}
        }

        let player = self.state.current_player().clone();
        let status = self.state.place_mark(pos)?;
        log!("Player {} marked {}", player, pos);
        self.log_outcome(&status);
        Ok(status)
    }

    pub fn play_bot_turn(&mut self) -> Result<(Position, GameStatus), GameError> {
        let seat = match (self.phase(), self.bot) {
            (TurnPhase::AwaitBot, Some(seat)) => seat,
            (TurnPhase::Finished, _) => return Err(GameError::MatchOver),
            _ => return Err(GameError::NotBotTurn),
        };

        let pos = {
            let input = BotInput::from_game_state(&self.state);
            calculate_move(seat.bot_type, &input, &mut self.rng)?
        };

        let player = self.state.current_player().clone();
        let status = self.state.place_mark(pos)?;
        log!("Bot {} marked {}", player, pos);
        self.log_outcome(&status);
        Ok((pos, status))
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.state = Self::fresh_state(&self.settings)?;
        self.matches_started += 1;
        log!("Match restarted (#{})", self.matches_started);
        Ok(())
    }

    fn log_outcome(&self, status: &GameStatus) {
        match status {
            GameStatus::Won(mark) => log!("Match over: player {} won", mark),
            GameStatus::Draw => log!("Match over: draw"),
            GameStatus::InProgress => {}
        }
    }
}
