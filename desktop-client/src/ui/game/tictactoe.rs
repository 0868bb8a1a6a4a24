use std::time::{Duration, Instant};

use common::games::tictactoe::{GameError, GameStatus, Position, TicTacToeSession, TurnPhase};
use common::{log, log_error};
use eframe::egui;

use super::board_geometry::BoardGeometry;
use crate::colors::player_color;

const BACKGROUND: egui::Color32 = egui::Color32::WHITE;
const GRID_COLOR: egui::Color32 = egui::Color32::BLACK;
const HOVER_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 60, 100, 50);
const LAST_MOVE_COLOR: egui::Color32 = egui::Color32::from_rgb(250, 200, 60);
const WIN_LINE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 160, 40, 200);

pub enum GameUiAction {
    None,
    Close,
}

/// View state of a running match. Game state itself lives in the session.
pub struct TicTacToeGameUi {
    session: TicTacToeSession,
    geometry: BoardGeometry,
    bot_delay: Duration,
    bot_due: Option<Instant>,
    last_hover: Option<Position>,
    error_message: Option<String>,
}

impl TicTacToeGameUi {
    const PADDING: f32 = 20.0;
    const HEADER_HEIGHT: f32 = 110.0;

    pub fn new(session: TicTacToeSession, cell_size: u32, bot_delay: Duration) -> Self {
        let geometry = BoardGeometry::new(session.settings().field_size, cell_size as f32);
        Self {
            session,
            geometry,
            bot_delay,
            bot_due: None,
            last_hover: None,
            error_message: None,
        }
    }

    /// Window size that fits the board and the controls above it.
    pub fn desired_window_size(&self) -> egui::Vec2 {
        let canvas = self.geometry.canvas_size();
        egui::vec2(
            (canvas + Self::PADDING * 2.0).max(360.0),
            canvas + Self::HEADER_HEIGHT + Self::PADDING * 2.0,
        )
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> GameUiAction {
        self.drive_bot(ctx);

        let mut action = GameUiAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(egui::RichText::new(self.status_text()).size(20.0));

            if let Some(message) = &self.error_message {
                ui.colored_label(egui::Color32::RED, message);
            }

            if self.session.phase() == TurnPhase::Finished {
                ui.horizontal(|ui| {
                    let buttons_width = 220.0;
                    ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));
                    if ui.button("Finish game").clicked() {
                        action = GameUiAction::Close;
                    }
                    if ui.button("Play again").clicked() {
                        self.restart();
                    }
                });
            }

            ui.add_space(10.0);
            self.render_board(ui);
        });

        action
    }

    fn status_text(&self) -> String {
        let state = self.session.state();
        match state.status() {
            GameStatus::Won(mark) => format!("Winner: {}!", mark),
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress => match self.session.phase() {
                TurnPhase::AwaitBot => format!("Bot ({}) is thinking...", state.current_player()),
                _ => format!("Current player: {}", state.current_player()),
            },
        }
    }

    /// Applies the bot move once its delay has passed; otherwise schedules a
    /// repaint for when it is due.
    fn drive_bot(&mut self, ctx: &egui::Context) {
        if self.session.phase() != TurnPhase::AwaitBot {
            self.bot_due = None;
            return;
        }

        let now = Instant::now();
        let due = *self.bot_due.get_or_insert(now + self.bot_delay);
        if now < due {
            ctx.request_repaint_after(due - now);
            return;
        }

        self.bot_due = None;
        match self.session.play_bot_turn() {
            Ok(_) => self.error_message = None,
            Err(e) => self.report_error(e),
        }
    }

    fn restart(&mut self) {
        self.bot_due = None;
        self.last_hover = None;
        match self.session.restart() {
            Ok(()) => self.error_message = None,
            Err(e) => self.report_error(e),
        }
    }

    fn handle_click(&mut self, pos: Position) {
        match self.session.handle_human_move(pos) {
            Ok(_) => self.error_message = None,
            Err(GameError::CellOccupied(_)) => {}
            Err(e) => self.report_error(e),
        }
    }

    fn report_error(&mut self, error: GameError) {
        log_error!("Move failed: {}", error);
        self.error_message = Some(error.to_string());
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let canvas = self.geometry.canvas_size();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(canvas, canvas), egui::Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.draw_grid(&painter, rect);
        self.draw_marks(&painter, rect);

        let accepting_input = self.session.phase() == TurnPhase::AwaitHuman;
        self.last_hover = if accepting_input {
            response
                .hover_pos()
                .and_then(|p| self.geometry.cell_at(p.x - rect.left(), p.y - rect.top()))
                .filter(|pos| self.session.state().cell_at(*pos).is_none())
        } else {
            None
        };

        if let Some(pos) = self.session.state().last_move() {
            painter.rect_stroke(
                self.cell_rect(rect, pos),
                0.0,
                egui::Stroke::new(2.0, LAST_MOVE_COLOR),
                egui::StrokeKind::Inside,
            );
        }

        if let Some(pos) = self.last_hover {
            painter.rect_filled(self.cell_rect(rect, pos), 0.0, HOVER_COLOR);
        }

        if let Some(winning) = self.session.state().winning_line() {
            let (sx, sy) = self.geometry.cell_center(winning.start);
            let (ex, ey) = self.geometry.cell_center(winning.end);
            painter.line_segment(
                [rect.min + egui::vec2(sx, sy), rect.min + egui::vec2(ex, ey)],
                egui::Stroke::new(self.geometry.line_width.max(3.0), WIN_LINE_COLOR),
            );
        }

        if accepting_input
            && response.clicked()
            && let Some(pos) = response
                .interact_pointer_pos()
                .and_then(|p| self.geometry.cell_at(p.x - rect.left(), p.y - rect.top()))
        {
            log!("Clicked cell {}", pos);
            self.handle_click(pos);
        }
    }

    fn cell_rect(&self, board: egui::Rect, pos: Position) -> egui::Rect {
        let (x, y) = self.geometry.cell_origin(pos);
        egui::Rect::from_min_size(
            board.min + egui::vec2(x, y),
            egui::vec2(self.geometry.cell_size, self.geometry.cell_size),
        )
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: egui::Rect) {
        let stroke = egui::Stroke::new(self.geometry.line_width, GRID_COLOR);
        for offset in self.geometry.grid_line_offsets() {
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &egui::Painter, rect: egui::Rect) {
        let state = self.session.state();
        let players = state.players();
        let font = egui::FontId::proportional(self.geometry.cell_size / 2.0);

        for row in 0..state.size() {
            for col in 0..state.size() {
                let pos = Position::new(row, col);
                let Some(mark) = state.cell_at(pos) else {
                    continue;
                };
                let index = players.iter().position(|p| p == mark).unwrap_or(0);
                let (x, y) = self.geometry.cell_center(pos);
                painter.text(
                    rect.min + egui::vec2(x, y),
                    egui::Align2::CENTER_CENTER,
                    mark.as_str(),
                    font.clone(),
                    player_color(index, players.len()),
                );
            }
        }
    }
}
