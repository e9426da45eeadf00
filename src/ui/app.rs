//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::session::{outcome_message, Session};
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{Outcome, HUMAN};
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
    show_report: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            session: Session::new(),
            board_view: BoardView::default(),
            show_report: config.show_report,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_report, "Computer Report (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: Black  |  Computer: White");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if let Some(outcome) = self.session.state.winner() {
                    self.render_game_over_card(ui, outcome);
                } else {
                    self.render_message_card(ui);
                }
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_report {
                    ui.add_space(10.0);
                    self.render_report_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row vs the computer").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let state = &self.session.state;
            let (stone_color, name) = match state.turn() {
                Stone::White => (WHITE_STONE, "WHITE"),
                _ => (BLACK_STONE, "BLACK"),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, stone_color);

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if state.game_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if state.is_computer_turn() {
                        ("Computer thinking...", STATUS_WAIT)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new(&self.session.message).size(12.0).color(TEXT_PRIMARY));
        });
    }

    /// Outcome banner with a replay button
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let fill = match outcome {
            Outcome::Win(stone) if stone == HUMAN => WIN_BG,
            Outcome::Win(_) => LOSS_BG,
            Outcome::Draw => DRAW_BG,
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(outcome_message(outcome)).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("Play again").size(14.0)).clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let label = if self.session.state.game_over() { "Play again" } else { "New game" };
            if ui.button(label).clicked() {
                self.session.reset();
            }
        });
    }

    /// What the selector did on its last move
    fn render_report_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER REPORT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let pos = result.best_move;
            ui.label(
                RichText::new(format!("{:?} → {}{}", result.search_type, (b'A' + pos.col) as char, pos.row + 1))
                    .size(12.0)
                    .strong()
                    .color(STATUS_OK),
            );
            ui.label(
                RichText::new(format!(
                    "Offense {}  Defense {}",
                    result.offense_score, result.defense_score
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!(
                    "{} cells, {}µs",
                    result.cells_examined,
                    result.elapsed.as_micros()
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = self.board_view.show(ui, &self.session.state) {
                self.session.click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle report panel
            if i.key_pressed(egui::Key::D) {
                self.show_report = !self.show_report;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The reply lands one frame after the human's move
        let replying = self.session.state.is_computer_turn();
        if replying {
            self.session.play_computer_if_due();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if replying || self.session.state.is_computer_turn() {
            ctx.request_repaint();
        }
    }
}
