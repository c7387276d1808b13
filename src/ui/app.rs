//! Main window of the trainer

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::game_state::GameState;
use super::theme::*;
use crate::board::{format_coord, Stone};
use crate::trainer::{Pending, Trainer};

pub struct TrainerApp {
    state: GameState,
    board_view: BoardView,
}

impl TrainerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, trainer: Trainer, initial: Option<String>) -> Self {
        let mut state = GameState::new(trainer);
        let first = initial.or_else(|| state.trainer.list_patterns().first().map(|p| p.id.clone()));
        if let Some(id) = first {
            state.start(&id);
        }
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Patterns", |ui| {
                    let mut chosen = None;
                    for summary in self.state.trainer.list_patterns() {
                        let label = format!("{} ({})", summary.name, summary.difficulty);
                        let selected = self.state.selected.as_deref() == Some(summary.id.as_str());
                        if ui.selectable_label(selected, label).on_hover_text(&summary.description).clicked() {
                            chosen = Some(summary.id);
                            ui.close_menu();
                        }
                    }
                    if let Some(id) = chosen {
                        self.state.start(&id);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let human = self.state.trainer.session().human_color();
                    ui.label(format!("You play {}", human.name()));
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(320.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_pattern_card(ui);
                ui.add_space(10.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if !self.state.hint_log.is_empty() {
                    ui.add_space(10.0);
                    self.render_hint_card(ui);
                }

                if self.state.trainer.is_complete() {
                    ui.add_space(10.0);
                    self.render_analysis_card(ui);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_pattern_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PATTERN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(info) = self.state.trainer.pattern_info() else {
                ui.label(RichText::new("No pattern selected").size(12.0).color(TEXT_SECONDARY));
                return;
            };
            ui.label(RichText::new(&info.name).size(18.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new(info.difficulty.label()).size(11.0).color(STATUS_WARN));
            ui.add_space(4.0);
            ui.label(RichText::new(&info.description).size(11.0).color(TEXT_SECONDARY));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Step {}/{}", info.current_step, info.total_moves))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let human = self.state.trainer.session().human_color();
            let (stone_char, accent, glyph) = match human {
                Stone::Black => ("\u{25CF}", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                _ => ("\u{25CB}", egui::Color32::from_rgb(220, 220, 225), BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    let color = match self.state.trainer.pending() {
                        Pending::Nothing => STATUS_OK,
                        Pending::AutoReply => STATUS_WARN,
                        Pending::Demonstration => STATUS_ERROR,
                        Pending::Finished => WIN_HIGHLIGHT,
                    };
                    ui.label(RichText::new(self.state.trainer.status()).size(13.0).strong().color(color));

                    let errors = self.state.trainer.session().error_info();
                    ui.label(
                        RichText::new(format!("Mistakes {}/{}", errors.error_count, errors.max_errors))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                if ui.button("Restart").clicked() {
                    self.state.restart();
                }
                if ui.add_enabled(!self.state.is_busy(), egui::Button::new("Undo")).clicked() {
                    self.state.undo();
                }
                if ui.button("Show Answer").clicked() {
                    self.state.show_answer();
                }
                let sound = if self.state.trainer.sound_enabled() { "Sound: on" } else { "Sound: off" };
                if ui.button(sound).clicked() {
                    self.state.trainer.toggle_sound();
                }
            });

            if let Some(pos) = self.state.shown_answer {
                ui.add_space(6.0);
                ui.label(RichText::new(format!("Answer: {}", format_coord(pos))).size(12.0).color(ANSWER_RING));
            }
        });
    }

    fn render_hint_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HINTS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for line in &self.state.hint_log {
                ui.label(RichText::new(line).size(11.0).color(STATUS_ERROR));
            }
        });
    }

    fn render_analysis_card(&self, ui: &mut egui::Ui) {
        let Some(analysis) = self.state.trainer.analysis() else {
            return;
        };
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("ANALYSIS").size(10.0).color(egui::Color32::from_rgb(180, 255, 180)));
                ui.add_space(6.0);
                for (title, text) in [
                    ("Opening", &analysis.opening),
                    ("Strategy", &analysis.strategy),
                    ("Why it wins", &analysis.win_reason),
                ] {
                    if text.is_empty() {
                        continue;
                    }
                    ui.label(RichText::new(title).size(11.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(text).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(4.0);
                }
                for point in &analysis.key_points {
                    ui.label(RichText::new(format!("\u{2022} {point}")).size(11.0).color(TEXT_SECONDARY));
                }
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let trainer = &self.state.trainer;
            let overlay = Overlay {
                last_move: trainer.board().last_move().map(|m| m.pos),
                winning_line: trainer.winning_line(),
                rejected: trainer.session().last_rejected(),
                answer: self.state.shown_answer,
            };
            let to_move = (trainer.pending() == Pending::Nothing && !self.state.is_busy())
                .then(|| trainer.session().human_color());

            let clicked = self.board_view.show(ui, trainer.board(), to_move, &overlay);
            if let Some(pos) = clicked {
                self.state.click(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (undo, restart, answer) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::A),
            )
        });
        if undo && !self.state.is_busy() {
            self.state.undo();
        }
        if restart {
            self.state.restart();
        }
        if answer {
            self.state.show_answer();
        }
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.tick(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(scheduled) = self.state.scheduled {
            let wait = scheduled.due.saturating_duration_since(Instant::now());
            ctx.request_repaint_after(wait.max(Duration::from_millis(16)));
        }
    }
}
