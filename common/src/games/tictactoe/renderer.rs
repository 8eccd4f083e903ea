use super::types::{CELL_COUNT, ColorTag, Mark, Mode, WinningLine};

/// Presentation side of the game. The controller calls these in the order the
/// screen should change; implementations only draw what they are told.
pub trait Renderer {
    fn render_board(&mut self, cells: &[Mark; CELL_COUNT]);
    fn set_cell_mark(&mut self, index: usize, mark: Mark, color: ColorTag);

    fn set_turn_message(&mut self, text: &str);
    fn clear_message(&mut self);

    fn show_round_result(&mut self, text: &str);
    fn show_match_winner_banner(&mut self, text: &str, color: ColorTag);
    fn hide_match_winner_banner(&mut self);
    fn trigger_celebration_effect(&mut self);

    fn highlight_winning_line(&mut self, line: WinningLine, color: ColorTag);
    fn clear_winning_line_highlight(&mut self);

    fn update_score_display(
        &mut self,
        left_label: &str,
        left_score: u32,
        right_label: &str,
        right_score: u32,
    );

    fn show_mode_selection(&mut self);
    fn hide_mode_selection(&mut self);
    /// `target` is the mode the control starts when activated.
    fn set_mode_switch_control(&mut self, label: &str, target: Mode);
}
