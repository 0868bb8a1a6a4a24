use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{BotType, MatchSettings, TicTacToeSession, MAX_FIELD_SIZE, MIN_FIELD_SIZE, MIN_PLAYER_COUNT};
use common::{log, log_error};
use eframe::egui;

use super::game::{GameUiAction, TicTacToeGameUi};
use crate::config::{ClientConfigManager, Config, ExtendedGameConfig, GameType, MAX_CELL_SIZE, MIN_CELL_SIZE};

pub const MENU_WINDOW_SIZE: [f32; 2] = [420.0, 420.0];

const CELL_SIZE_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu,
    ClassicMenu,
    ExtendedMenu,
    Game,
}

/// Launch options that come from the command line rather than the config file.
#[derive(Debug, Clone, Copy)]
pub struct LaunchOptions {
    pub seed: Option<u64>,
    pub bot_type: BotType,
}

pub struct MenuApp {
    config_manager: ClientConfigManager,
    config: Config,
    launch: LaunchOptions,
    screen: Screen,
    extended_form: ExtendedGameConfig,
    game_ui: Option<TicTacToeGameUi>,
    pending_window_size: Option<egui::Vec2>,
    error: Option<String>,
}

impl MenuApp {
    pub fn new(config_manager: ClientConfigManager, launch: LaunchOptions) -> Self {
        let config = match config_manager.get_config() {
            Ok(config) => config,
            Err(e) => {
                log_error!("Failed to load config, using defaults: {}", e);
                Config::default()
            }
        };

        let screen = match config.last_game {
            Some(GameType::Classic) => Screen::ClassicMenu,
            Some(GameType::Extended) => Screen::ExtendedMenu,
            None => Screen::MainMenu,
        };

        Self {
            extended_form: config.extended.normalized(),
            config_manager,
            config,
            launch,
            screen,
            game_ui: None,
            pending_window_size: None,
            error: None,
        }
    }

    fn make_rng(&self) -> SessionRng {
        match self.launch.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log_error!("Failed to save config: {}", e);
        }
    }

    fn start_classic(&mut self, vs_bot: bool) {
        self.config.classic.vs_bot = vs_bot;
        self.config.last_game = Some(GameType::Classic);
        self.save_config();

        let cell_size = ExtendedGameConfig::default().cell_size;
        self.start_game(self.config.classic.to_match_settings(), cell_size);
    }

    fn start_extended(&mut self) {
        self.extended_form = self.extended_form.normalized();
        self.config.extended = self.extended_form;
        self.config.last_game = Some(GameType::Extended);
        self.save_config();

        self.start_game(self.extended_form.to_match_settings(), self.extended_form.cell_size);
    }

    fn start_game(&mut self, settings: MatchSettings, cell_size: u32) {
        let session = match TicTacToeSession::new(settings, self.make_rng()) {
            Ok(session) => session.with_bot_type(self.launch.bot_type),
            Err(e) => {
                log_error!("Failed to start match: {}", e);
                self.error = Some(e.to_string());
                return;
            }
        };

        let game_ui = TicTacToeGameUi::new(
            session,
            cell_size,
            Duration::from_millis(self.config.bot_delay_ms),
        );
        self.pending_window_size = Some(game_ui.desired_window_size());
        self.game_ui = Some(game_ui);
        self.error = None;
        self.screen = Screen::Game;
    }

    fn finish_game(&mut self) {
        log!("Returning to main menu");
        self.game_ui = None;
        self.screen = Screen::MainMenu;
        self.pending_window_size = Some(egui::vec2(MENU_WINDOW_SIZE[0], MENU_WINDOW_SIZE[1]));
    }

    fn render_main_menu(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Tic-Tac-Toe");
            ui.add_space(30.0);

            if ui.add_sized([200.0, 36.0], egui::Button::new("Classic game")).clicked() {
                self.screen = Screen::ClassicMenu;
            }
            ui.add_space(10.0);
            if ui.add_sized([200.0, 36.0], egui::Button::new("Extended game")).clicked() {
                self.screen = Screen::ExtendedMenu;
            }
        });
    }

    fn render_classic_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Classic game");
            ui.label("3×3 field, two players");
            ui.add_space(30.0);

            if ui.add_sized([200.0, 36.0], egui::Button::new("Play with a friend")).clicked() {
                self.start_classic(false);
            }
            ui.add_space(10.0);
            if ui.add_sized([200.0, 36.0], egui::Button::new("Play with the bot")).clicked() {
                self.start_classic(true);
            }
            ui.add_space(10.0);
            if ui.add_sized([200.0, 36.0], egui::Button::new("Back (Esc)")).clicked() {
                self.screen = Screen::MainMenu;
            }
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.screen = Screen::MainMenu;
        }
    }

    fn render_extended_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.heading("Extended game");
            ui.add_space(20.0);
        });

        let form = &mut self.extended_form;
        let max_players = form.field_size.saturating_sub(1).max(MIN_PLAYER_COUNT as u32);

        egui::Grid::new("extended_form")
            .num_columns(2)
            .spacing([20.0, 12.0])
            .show(ui, |ui| {
                ui.label("Players:");
                stepper(ui, &mut form.player_count, MIN_PLAYER_COUNT as u32, max_players, 1);
                ui.end_row();

                ui.label("Field size:");
                stepper(ui, &mut form.field_size, MIN_FIELD_SIZE as u32, MAX_FIELD_SIZE as u32, 1);
                ui.end_row();

                ui.label("Cell size:");
                stepper(ui, &mut form.cell_size, MIN_CELL_SIZE, MAX_CELL_SIZE, CELL_SIZE_STEP);
                ui.end_row();
            });

        // Shrinking the field can leave too many players.
        self.extended_form = self.extended_form.normalized();

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            if ui.add_sized([200.0, 36.0], egui::Button::new("Start (Enter)")).clicked() {
                self.start_extended();
            }
            ui.add_space(10.0);
            if ui.add_sized([200.0, 36.0], egui::Button::new("Back (Esc)")).clicked() {
                self.screen = Screen::MainMenu;
            }
        });

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                self.screen = Screen::MainMenu;
            }
        });
        if self.screen == Screen::ExtendedMenu && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.start_extended();
        }
    }
}

/// "-  value  +" control. The value is clamped into `min..=max`.
fn stepper(ui: &mut egui::Ui, value: &mut u32, min: u32, max: u32, step: u32) {
    ui.horizontal(|ui| {
        if ui.add_enabled(*value > min, egui::Button::new(" - ")).clicked() {
            *value = value.saturating_sub(step).max(min);
        }
        ui.add(egui::DragValue::new(value).range(min..=max));
        if ui.add_enabled(*value < max, egui::Button::new(" + ")).clicked() {
            *value = value.saturating_add(step).min(max);
        }
    });
}

impl eframe::App for MenuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(size) = self.pending_window_size.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        }

        if let Some(error) = self.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::MainMenu => self.render_main_menu(ui),
            Screen::ClassicMenu => self.render_classic_menu(ui, ctx),
            Screen::ExtendedMenu => self.render_extended_menu(ui, ctx),
            Screen::Game => {
                let action = match &mut self.game_ui {
                    Some(game_ui) => game_ui.render(ui, ctx),
                    None => GameUiAction::Close,
                };
                if let GameUiAction::Close = action {
                    self.finish_game();
                }
            }
        });
    }
}
