use tictactoe_common::games::tictactoe::{CELL_COUNT, Mark, Mode, SessionCommand, WinningLine};
use tokio::sync::mpsc;

use crate::colors::{BOARD_BACKGROUND, GRID_LINE, HOVER_FILL, tag_color};
use crate::confetti::Confetti;
use crate::state::{SharedState, ViewState};

const BOARD_SIDE: usize = 3;

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    confetti: Confetti,
}

impl TicTacToeApp {
    const CELL_SIZE: f32 = 110.0;
    const LINE_WIDTH: f32 = 3.0;
    const MARK_WIDTH: f32 = 6.0;
    const WINNING_LINE_WIDTH: f32 = 8.0;

    pub fn new(
        cc: &eframe::CreationContext<'_>,
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
    ) -> Self {
        shared_state.set_repaint_context(cc.egui_ctx.clone());
        Self {
            shared_state,
            command_tx,
            confetti: Confetti::new(),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.shared_state.snapshot();
        if self.shared_state.take_celebration() {
            self.confetti.burst();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Tic-Tac-Toe").size(28.0).strong());
                ui.add_space(8.0);

                if view.mode_selection_visible {
                    render_mode_selection(ui, &self.command_tx);
                } else {
                    render_match(ui, &view, &self.command_tx);
                }
            });

            let dt = ctx.input(|i| i.stable_dt);
            self.confetti.step(dt);
            self.confetti.paint(ui.painter(), ui.clip_rect());
        });

        if self.confetti.is_active() {
            ctx.request_repaint();
        }
    }
}

fn render_mode_selection(ui: &mut egui::Ui, command_tx: &mpsc::UnboundedSender<SessionCommand>) {
    ui.add_space(40.0);
    ui.label(egui::RichText::new("Choose a mode").size(18.0));
    ui.add_space(12.0);

    for mode in [Mode::Friend, Mode::Ai] {
        let button = egui::Button::new(egui::RichText::new(mode.select_label()).size(18.0))
            .min_size(egui::vec2(220.0, 40.0));
        if ui.add(button).clicked() {
            let _ = command_tx.send(SessionCommand::ModeSelected(mode));
        }
        ui.add_space(6.0);
    }
}

fn render_match(
    ui: &mut egui::Ui,
    view: &ViewState,
    command_tx: &mpsc::UnboundedSender<SessionCommand>,
) {
    if let Some(score) = &view.score {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{}: {}", score.left_label, score.left_score))
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new(format!("{}: {}", score.right_label, score.right_score))
                    .size(16.0)
                    .strong(),
            );
        });
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new(view.message.as_deref().unwrap_or(" ")).size(18.0));
    ui.add_space(6.0);

    render_board(ui, view, command_tx);

    if let Some((text, color)) = &view.banner {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(text)
                .size(26.0)
                .strong()
                .color(tag_color(*color)),
        );
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.button(egui::RichText::new("Reset").size(16.0)).clicked() {
            let _ = command_tx.send(SessionCommand::ResetActivated);
        }
        if let Some(switch) = &view.mode_switch
            && ui.button(egui::RichText::new(&switch.label).size(16.0)).clicked()
        {
            let _ = command_tx.send(SessionCommand::ModeSelected(switch.target));
        }
    });
}

fn render_board(
    ui: &mut egui::Ui,
    view: &ViewState,
    command_tx: &mpsc::UnboundedSender<SessionCommand>,
) {
    let side = TicTacToeApp::CELL_SIZE * BOARD_SIDE as f32;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, 0.0, BOARD_BACKGROUND);

    for i in 1..BOARD_SIDE {
        let offset = i as f32 * TicTacToeApp::CELL_SIZE;
        let stroke = egui::Stroke::new(TicTacToeApp::LINE_WIDTH, GRID_LINE);
        painter.line_segment(
            [
                egui::pos2(rect.left() + offset, rect.top()),
                egui::pos2(rect.left() + offset, rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left(), rect.top() + offset),
                egui::pos2(rect.right(), rect.top() + offset),
            ],
            stroke,
        );
    }

    for (index, cell) in view.cells.iter().enumerate() {
        let Some((mark, color)) = cell else {
            continue;
        };
        let cell = cell_rect(rect, index);
        let color = tag_color(*color);
        match mark {
            Mark::X => draw_x(painter, cell, color),
            Mark::O => draw_o(painter, cell, color),
            Mark::Empty => {}
        }
    }

    let hovered = response
        .hover_pos()
        .and_then(|pos| cell_at(rect, pos))
        .filter(|&index| view.cells[index].is_none() && view.highlight.is_none());
    if let Some(index) = hovered {
        painter.rect_filled(cell_rect(rect, index), 0.0, HOVER_FILL);
    }

    if let Some((line, color)) = view.highlight {
        draw_winning_line(painter, rect, line, tag_color(color));
    }

    if response.clicked()
        && let Some(pos) = response.interact_pointer_pos()
        && let Some(index) = cell_at(rect, pos)
    {
        let _ = command_tx.send(SessionCommand::CellActivated(index));
    }
}

fn cell_rect(board: egui::Rect, index: usize) -> egui::Rect {
    let row = (index / BOARD_SIDE) as f32;
    let col = (index % BOARD_SIDE) as f32;
    egui::Rect::from_min_size(
        egui::pos2(
            board.left() + col * TicTacToeApp::CELL_SIZE,
            board.top() + row * TicTacToeApp::CELL_SIZE,
        ),
        egui::vec2(TicTacToeApp::CELL_SIZE, TicTacToeApp::CELL_SIZE),
    )
}

fn cell_at(board: egui::Rect, pos: egui::Pos2) -> Option<usize> {
    if !board.contains(pos) {
        return None;
    }
    let col = ((pos.x - board.left()) / TicTacToeApp::CELL_SIZE) as usize;
    let row = ((pos.y - board.top()) / TicTacToeApp::CELL_SIZE) as usize;
    let index = row.min(BOARD_SIDE - 1) * BOARD_SIDE + col.min(BOARD_SIDE - 1);
    (index < CELL_COUNT).then_some(index)
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(TicTacToeApp::MARK_WIDTH, color);

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let padding = rect.width() * 0.2;
    let radius = rect.width() / 2.0 - padding;
    painter.circle_stroke(
        rect.center(),
        radius,
        egui::Stroke::new(TicTacToeApp::MARK_WIDTH, color),
    );
}

/// Strokes through the centers of the first and last cell, overshooting
/// a little into both end cells.
fn draw_winning_line(
    painter: &egui::Painter,
    board: egui::Rect,
    line: WinningLine,
    color: egui::Color32,
) {
    let start = cell_rect(board, line.start()).center();
    let end = cell_rect(board, line.end()).center();
    let overshoot = (end - start).normalized() * TicTacToeApp::CELL_SIZE * 0.3;

    painter.line_segment(
        [start - overshoot, end + overshoot],
        egui::Stroke::new(TicTacToeApp::WINNING_LINE_WIDTH, color),
    );
}
