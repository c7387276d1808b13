//! Board rendering and click handling

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::board::{Board, Pos, Stone};

/// Overlays drawn on top of the stones
#[derive(Debug, Default)]
pub struct Overlay<'a> {
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Last wrong submission
    pub rejected: Option<Pos>,
    /// Revealed or requested answer
    pub answer: Option<Pos>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
    lines: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            lines: crate::board::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked point, if any.
    ///
    /// `to_move` is the trainee's color while input is accepted, `None`
    /// while the board is locked.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        to_move: Option<Stone>,
        overlay: &Overlay<'_>,
    ) -> Option<Pos> {
        self.lines = board.size();
        let available_size = ui.available_size();

        let side = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (self.lines as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }
        if let Some(pos) = overlay.rejected {
            if board.get(pos) == Stone::Empty {
                self.draw_rejected(&painter, pos);
            }
        }
        if let Some(pos) = overlay.answer {
            self.draw_answer(&painter, pos);
        }

        let stone = to_move?;
        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;

        let is_valid = board.is_placeable(board_pos);
        self.draw_hover_preview(&painter, board_pos, stone, is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn line_end(&self) -> f32 {
        BOARD_MARGIN + (self.lines as f32 - 1.0) * self.cell_size
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let end_offset = self.line_end();

        for i in 0..self.lines {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, end_offset);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(end_offset, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in star_points(self.lines) {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters from A, row numbers from 1 at the top
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.lines {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let top = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            let bottom = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(bottom, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..self.lines {
            let label = (row + 1).to_string();
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let left = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            let right = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(right, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for mv in board.history() {
            self.draw_stone(painter, mv.pos, mv.stone);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Red cross on the last wrong point
    fn draw_rejected(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let arm = self.cell_size * 0.25;
        let stroke = Stroke::new(3.0, REJECTED_MARK);
        painter.line_segment([center + Vec2::new(-arm, -arm), center + Vec2::new(arm, arm)], stroke);
        painter.line_segment([center + Vec2::new(-arm, arm), center + Vec2::new(arm, -arm)], stroke);
    }

    fn draw_answer(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(3.0, ANSWER_RING));
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, stone: Stone, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match (is_valid, stone) {
            (false, _) => hover_invalid(),
            (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            (true, Stone::Empty) => hover_valid(),
        };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        Pos::checked(y.floor() as i32, x.floor() as i32, self.lines)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
