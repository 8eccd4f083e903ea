use tictactoe_common::games::tictactoe::{
    CELL_COUNT, ColorTag, Mark, Mode, Renderer, WinningLine,
};

use crate::state::{ModeSwitch, ScoreLine, SharedState};

/// Publishes every instruction from the game into the shared view state.
pub struct SharedStateRenderer {
    shared_state: SharedState,
}

impl SharedStateRenderer {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl Renderer for SharedStateRenderer {
    fn render_board(&mut self, cells: &[Mark; CELL_COUNT]) {
        self.shared_state.update(|view| {
            for (slot, mark) in view.cells.iter_mut().zip(cells) {
                *slot = mark.side().map(|side| (*mark, side.color()));
            }
        });
    }

    fn set_cell_mark(&mut self, index: usize, mark: Mark, color: ColorTag) {
        self.shared_state.update(|view| {
            if let Some(slot) = view.cells.get_mut(index) {
                *slot = Some((mark, color));
            }
        });
    }

    fn set_turn_message(&mut self, text: &str) {
        self.shared_state
            .update(|view| view.message = Some(text.to_string()));
    }

    fn clear_message(&mut self) {
        self.shared_state.update(|view| view.message = None);
    }

    fn show_round_result(&mut self, text: &str) {
        self.shared_state
            .update(|view| view.message = Some(text.to_string()));
    }

    fn show_match_winner_banner(&mut self, text: &str, color: ColorTag) {
        self.shared_state
            .update(|view| view.banner = Some((text.to_string(), color)));
    }

    fn hide_match_winner_banner(&mut self) {
        self.shared_state.update(|view| view.banner = None);
    }

    fn trigger_celebration_effect(&mut self) {
        self.shared_state
            .update(|view| view.celebration_pending = true);
    }

    fn highlight_winning_line(&mut self, line: WinningLine, color: ColorTag) {
        self.shared_state
            .update(|view| view.highlight = Some((line, color)));
    }

    fn clear_winning_line_highlight(&mut self) {
        self.shared_state.update(|view| view.highlight = None);
    }

    fn update_score_display(
        &mut self,
        left_label: &str,
        left_score: u32,
        right_label: &str,
        right_score: u32,
    ) {
        self.shared_state.update(|view| {
            view.score = Some(ScoreLine {
                left_label: left_label.to_string(),
                left_score,
                right_label: right_label.to_string(),
                right_score,
            })
        });
    }

    fn show_mode_selection(&mut self) {
        self.shared_state
            .update(|view| view.mode_selection_visible = true);
    }

    fn hide_mode_selection(&mut self) {
        self.shared_state
            .update(|view| view.mode_selection_visible = false);
    }

    fn set_mode_switch_control(&mut self, label: &str, target: Mode) {
        self.shared_state.update(|view| {
            view.mode_switch = Some(ModeSwitch {
                label: label.to_string(),
                target,
            })
        });
    }
}
