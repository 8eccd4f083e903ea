use crate::config::GameConfig;
use crate::log;
use super::board::Board;
use super::error::GameError;
use super::evaluator::calculate_minimax_move;
use super::renderer::Renderer;
use super::types::{CELL_COUNT, Mode, RoundOutcome, Side};
use super::win_detector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub win_threshold: u32,
    pub player_one_starts: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            win_threshold: 5,
            player_one_starts: true,
        }
    }
}

impl From<&GameConfig> for MatchSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            win_threshold: config.win_threshold,
            player_one_starts: config.player_one_starts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    NotStarted,
    RoundInProgress,
    RoundOver(RoundOutcome),
    MatchOver(Side),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub player_one: u32,
    pub player_two: u32,
}

impl MatchScore {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::PlayerOne => self.player_one,
            Side::PlayerTwo => self.player_two,
        }
    }

    fn increment(&mut self, side: Side) {
        match side {
            Side::PlayerOne => self.player_one += 1,
            Side::PlayerTwo => self.player_two += 1,
        }
    }

    pub fn threshold_reached(&self, threshold: u32) -> bool {
        self.player_one >= threshold || self.player_two >= threshold
    }
}

/// Identifies one specific computer turn: the round it belongs to and how many
/// marks were on the board when it came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTicket {
    round_id: u64,
    pub(crate) ply: usize,
}

pub struct GameController<R: Renderer> {
    renderer: R,
    settings: MatchSettings,
    board: Board,
    phase: MatchPhase,
    mode: Option<Mode>,
    score: MatchScore,
    current_side: Side,
    player_one_starts: bool,
    round_id: u64,
}

impl<R: Renderer> GameController<R> {
    pub fn new(mut renderer: R, settings: MatchSettings) -> Self {
        renderer.show_mode_selection();
        Self {
            renderer,
            settings,
            board: Board::new(),
            phase: MatchPhase::NotStarted,
            mode: None,
            score: MatchScore::default(),
            current_side: Side::PlayerOne,
            player_one_starts: settings.player_one_starts,
            round_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn score(&self) -> MatchScore {
        self.score
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn player_one_starts(&self) -> bool {
        self.player_one_starts
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn outcome(&self) -> RoundOutcome {
        win_detector::evaluate_round(&self.board)
    }

    /// Begins a new match in `mode` with a zeroed tally.
    pub fn start_match(&mut self, mode: Mode) {
        log!("Starting match: {:?}", mode);
        self.mode = Some(mode);
        self.score = MatchScore::default();
        self.render_score(mode);
        self.begin_round(mode);

        self.renderer.hide_mode_selection();
        let other = mode.other();
        self.renderer.set_mode_switch_control(other.select_label(), other);
    }

    /// Changing between friend and computer play always starts a new match.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.start_match(mode);
    }

    pub fn start_round(&mut self) -> Result<(), GameError> {
        let mode = self.mode.ok_or(GameError::MatchNotStarted)?;
        self.begin_round(mode);
        Ok(())
    }

    /// Hands the opening move to the other side, clears the tally if the match
    /// was decided, and starts a fresh round.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let mode = self.mode.ok_or(GameError::MatchNotStarted)?;
        self.player_one_starts = !self.player_one_starts;
        if self.score.threshold_reached(self.settings.win_threshold) {
            self.score = MatchScore::default();
            self.render_score(mode);
        }
        self.begin_round(mode);
        Ok(())
    }

    /// Places a mark for whichever human side is on turn.
    pub fn submit_move(&mut self, index: usize) -> Result<(), GameError> {
        let mode = self.mode.ok_or(GameError::MatchNotStarted)?;
        if self.phase != MatchPhase::RoundInProgress {
            return Err(GameError::RoundNotInProgress);
        }
        if index >= CELL_COUNT {
            return Err(GameError::IndexOutOfRange(index));
        }
        if !self.board.is_valid_move(index) {
            return Err(GameError::CellOccupied(index));
        }
        if !mode.is_human(self.current_side) {
            return Err(GameError::NotYourTurn);
        }

        self.apply_move(mode, index);
        Ok(())
    }

    pub fn pending_computer_turn(&self) -> Option<TurnTicket> {
        match self.mode {
            Some(Mode::Ai)
                if self.phase == MatchPhase::RoundInProgress
                    && self.current_side == Side::PlayerTwo =>
            {
                Some(TurnTicket {
                    round_id: self.round_id,
                    ply: self.board.ply(),
                })
            }
            _ => None,
        }
    }

    /// Plays the minimax choice for the computer, provided `ticket` still names
    /// the turn that is due. Returns the chosen cell.
    pub fn play_computer_turn(&mut self, ticket: TurnTicket) -> Result<usize, GameError> {
        if self.pending_computer_turn() != Some(ticket) {
            return Err(GameError::StaleComputerTurn);
        }
        let index = calculate_minimax_move(&self.board, Side::PlayerTwo)
            .ok_or(GameError::NoMoveAvailable)?;
        self.apply_move(Mode::Ai, index);
        Ok(index)
    }

    fn begin_round(&mut self, mode: Mode) {
        self.board.reset();
        self.round_id += 1;
        self.current_side = if self.player_one_starts {
            Side::PlayerOne
        } else {
            Side::PlayerTwo
        };
        self.phase = MatchPhase::RoundInProgress;

        self.renderer.render_board(self.board.cells());
        self.renderer.clear_message();
        self.renderer.hide_match_winner_banner();
        self.renderer.clear_winning_line_highlight();
        self.announce_turn(mode);
    }

    fn apply_move(&mut self, mode: Mode, index: usize) {
        let side = self.current_side;
        self.board.place(index, side.mark());
        self.renderer.set_cell_mark(index, side.mark(), side.color());

        if self.evaluate_round(mode) == RoundOutcome::InProgress {
            self.current_side = side.opponent();
            self.announce_turn(mode);
        }
    }

    fn evaluate_round(&mut self, mode: Mode) -> RoundOutcome {
        let outcome = win_detector::evaluate_round(&self.board);
        match outcome {
            RoundOutcome::InProgress => {}
            RoundOutcome::Draw => {
                log!("Round {} ended in a draw", self.round_id);
                self.phase = MatchPhase::RoundOver(outcome);
                self.renderer.show_round_result("It's a draw!");
            }
            RoundOutcome::Win(side, line) => {
                self.score.increment(side);
                self.render_score(mode);
                self.renderer.highlight_winning_line(line, side.color());

                let label = side.label(mode);
                log!(
                    "Round {} won by {} on {} ({}:{})",
                    self.round_id,
                    label,
                    line,
                    self.score.player_one,
                    self.score.player_two
                );

                if self.score.threshold_reached(self.settings.win_threshold) {
                    self.phase = MatchPhase::MatchOver(side);
                    self.renderer.clear_message();
                    self.renderer
                        .show_match_winner_banner(&format!("{} won the game!", label), side.color());
                    self.renderer.trigger_celebration_effect();
                } else {
                    self.phase = MatchPhase::RoundOver(outcome);
                    self.renderer
                        .show_round_result(&format!("{} wins this round!", label));
                }
            }
        }
        outcome
    }

    fn announce_turn(&mut self, mode: Mode) {
        let text = format!("{}'s turn!", self.current_side.label(mode));
        self.renderer.set_turn_message(&text);
    }

    fn render_score(&mut self, mode: Mode) {
        self.renderer.update_score_display(
            Side::PlayerOne.label(mode),
            self.score.player_one,
            Side::PlayerTwo.label(mode),
            self.score.player_two,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::renderer::recording::{RecordingRenderer, RenderEvent};
    use crate::games::tictactoe::types::{ColorTag, Mark, WinningLine};

    const PLAYER_ONE_WINS_FROM_FIRST: [usize; 5] = [0, 3, 1, 4, 2];
    const PLAYER_ONE_WINS_FROM_SECOND: [usize; 6] = [3, 0, 4, 1, 8, 2];
    const DRAW_SEQUENCE: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    fn create_controller() -> GameController<RecordingRenderer> {
        GameController::new(RecordingRenderer::default(), MatchSettings::default())
    }

    fn play(controller: &mut GameController<RecordingRenderer>, moves: &[usize]) {
        for &index in moves {
            controller.submit_move(index).unwrap();
        }
    }

    fn win_round_for_player_one(controller: &mut GameController<RecordingRenderer>) {
        if controller.current_side() == Side::PlayerOne {
            play(controller, &PLAYER_ONE_WINS_FROM_FIRST);
        } else {
            play(controller, &PLAYER_ONE_WINS_FROM_SECOND);
        }
    }

    #[test]
    fn test_new_controller_offers_mode_selection() {
        let controller = create_controller();
        assert_eq!(controller.phase(), MatchPhase::NotStarted);
        assert_eq!(controller.renderer().events, vec![RenderEvent::ShowModeSelection]);
    }

    #[test]
    fn test_requests_before_match_are_rejected() {
        let mut controller = create_controller();
        assert_eq!(controller.submit_move(0), Err(GameError::MatchNotStarted));
        assert_eq!(controller.restart(), Err(GameError::MatchNotStarted));
        assert_eq!(controller.start_round(), Err(GameError::MatchNotStarted));
        assert_eq!(*controller.board(), Board::new());
        assert_eq!(controller.phase(), MatchPhase::NotStarted);
    }

    #[test]
    fn test_start_match_renders_initial_screen() {
        let mut controller = create_controller();
        controller.renderer.take();

        controller.start_match(Mode::Friend);

        let events = controller.renderer.take();
        assert_eq!(
            events[0],
            RenderEvent::Score("Player 1".to_string(), 0, "Player 2".to_string(), 0)
        );
        assert!(events.contains(&RenderEvent::Board([Mark::Empty; CELL_COUNT])));
        assert!(events.contains(&RenderEvent::TurnMessage("Player 1's turn!".to_string())));
        assert!(events.contains(&RenderEvent::HideModeSelection));
        assert_eq!(
            events.last(),
            Some(&RenderEvent::ModeSwitch("Play with AI".to_string(), Mode::Ai))
        );
        assert_eq!(controller.phase(), MatchPhase::RoundInProgress);
        assert_eq!(controller.current_side(), Side::PlayerOne);
    }

    #[test]
    fn test_turns_alternate_in_friend_mode() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);

        controller.submit_move(4).unwrap();
        assert_eq!(controller.current_side(), Side::PlayerTwo);
        assert_eq!(
            controller.renderer().last_message(),
            Some(&RenderEvent::TurnMessage("Player 2's turn!".to_string()))
        );

        controller.submit_move(0).unwrap();
        assert_eq!(controller.board().get(4), Some(Mark::X));
        assert_eq!(controller.board().get(0), Some(Mark::O));
        assert!(controller
            .renderer()
            .events
            .contains(&RenderEvent::CellMark(0, Mark::O, ColorTag::Blue)));
    }

    #[test]
    fn test_invalid_moves_leave_state_unchanged() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);
        controller.submit_move(4).unwrap();

        let board_before = *controller.board();
        let side_before = controller.current_side();
        let event_count = controller.renderer().events.len();

        assert_eq!(controller.submit_move(4), Err(GameError::CellOccupied(4)));
        assert_eq!(controller.submit_move(9), Err(GameError::IndexOutOfRange(9)));

        assert_eq!(*controller.board(), board_before);
        assert_eq!(controller.current_side(), side_before);
        assert_eq!(controller.renderer().events.len(), event_count);
    }

    #[test]
    fn test_winning_round_updates_score_and_highlights_line() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);
        controller.renderer.take();

        play(&mut controller, &PLAYER_ONE_WINS_FROM_FIRST);

        let line = WinningLine::new(0, 1, 2);
        assert_eq!(controller.outcome(), RoundOutcome::Win(Side::PlayerOne, line));
        assert_eq!(
            controller.phase(),
            MatchPhase::RoundOver(RoundOutcome::Win(Side::PlayerOne, line))
        );
        assert_eq!(controller.score(), MatchScore { player_one: 1, player_two: 0 });

        let events = controller.renderer.take();
        assert!(events.contains(&RenderEvent::Score(
            "Player 1".to_string(),
            1,
            "Player 2".to_string(),
            0
        )));
        assert!(events.contains(&RenderEvent::HighlightLine(line, ColorTag::Red)));
        assert_eq!(
            events.last(),
            Some(&RenderEvent::RoundResult("Player 1 wins this round!".to_string()))
        );

        assert_eq!(controller.submit_move(8), Err(GameError::RoundNotInProgress));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);

        play(&mut controller, &DRAW_SEQUENCE);

        assert_eq!(controller.phase(), MatchPhase::RoundOver(RoundOutcome::Draw));
        assert_eq!(controller.score(), MatchScore::default());
        assert_eq!(
            controller.renderer().last_message(),
            Some(&RenderEvent::RoundResult("It's a draw!".to_string()))
        );
    }

    #[test]
    fn test_round_waits_for_reset_after_win() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);
        play(&mut controller, &PLAYER_ONE_WINS_FROM_FIRST);

        assert!(matches!(controller.phase(), MatchPhase::RoundOver(_)));
        assert_eq!(controller.board().ply(), 5);
    }

    #[test]
    fn test_restart_below_threshold_keeps_score_and_swaps_starter() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);
        play(&mut controller, &PLAYER_ONE_WINS_FROM_FIRST);
        controller.renderer.take();

        controller.restart().unwrap();

        assert_eq!(*controller.board(), Board::new());
        assert_eq!(controller.score(), MatchScore { player_one: 1, player_two: 0 });
        assert!(!controller.player_one_starts());
        assert_eq!(controller.current_side(), Side::PlayerTwo);
        assert_eq!(controller.phase(), MatchPhase::RoundInProgress);

        let events = controller.renderer.take();
        assert!(!events.iter().any(|e| matches!(e, RenderEvent::Score(..))));
        assert!(events.contains(&RenderEvent::ClearHighlight));
        assert_eq!(
            events.last(),
            Some(&RenderEvent::TurnMessage("Player 2's turn!".to_string()))
        );
    }

    #[test]
    fn test_restart_mid_round_also_swaps_starter() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);
        controller.submit_move(0).unwrap();

        controller.restart().unwrap();
        assert_eq!(controller.current_side(), Side::PlayerTwo);
        controller.restart().unwrap();
        assert_eq!(controller.current_side(), Side::PlayerOne);
        assert_eq!(controller.board().ply(), 0);
    }

    #[test]
    fn test_fifth_win_ends_match_until_restart() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);

        for round in 0..5 {
            if round > 0 {
                controller.restart().unwrap();
            }
            win_round_for_player_one(&mut controller);
        }

        assert_eq!(controller.phase(), MatchPhase::MatchOver(Side::PlayerOne));
        assert_eq!(controller.score(), MatchScore { player_one: 5, player_two: 0 });

        let events = &controller.renderer().events;
        let tail = &events[events.len() - 3..];
        assert_eq!(
            tail,
            &[
                RenderEvent::ClearMessage,
                RenderEvent::WinnerBanner("Player 1 won the game!".to_string(), ColorTag::Red),
                RenderEvent::Celebration,
            ]
        );

        assert_eq!(controller.submit_move(5), Err(GameError::RoundNotInProgress));
        assert_eq!(controller.score().player_one, 5);

        controller.renderer.take();
        controller.restart().unwrap();
        assert_eq!(controller.score(), MatchScore::default());
        assert_eq!(*controller.board(), Board::new());
        assert_eq!(controller.phase(), MatchPhase::RoundInProgress);
        assert!(controller.renderer().events.contains(&RenderEvent::Score(
            "Player 1".to_string(),
            0,
            "Player 2".to_string(),
            0
        )));
        assert!(controller.renderer().events.contains(&RenderEvent::HideWinnerBanner));
    }

    #[test]
    fn test_custom_threshold_ends_match_early() {
        let settings = MatchSettings {
            win_threshold: 1,
            player_one_starts: true,
        };
        let mut controller = GameController::new(RecordingRenderer::default(), settings);
        controller.start_match(Mode::Friend);
        play(&mut controller, &PLAYER_ONE_WINS_FROM_FIRST);

        assert_eq!(controller.phase(), MatchPhase::MatchOver(Side::PlayerOne));
    }

    #[test]
    fn test_settings_from_config() {
        let config = GameConfig {
            win_threshold: 3,
            ai_move_delay_ms: 0,
            player_one_starts: false,
        };
        let controller = GameController::new(RecordingRenderer::default(), MatchSettings::from(&config));
        assert_eq!(controller.settings().win_threshold, 3);
        assert!(!controller.player_one_starts());
    }

    #[test]
    fn test_switch_mode_resets_score_and_starts_new_match() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);
        play(&mut controller, &PLAYER_ONE_WINS_FROM_FIRST);
        controller.renderer.take();

        controller.switch_mode(Mode::Ai);

        assert_eq!(controller.mode(), Some(Mode::Ai));
        assert_eq!(controller.score(), MatchScore::default());
        assert_eq!(controller.phase(), MatchPhase::RoundInProgress);
        let events = controller.renderer.take();
        assert_eq!(
            events[0],
            RenderEvent::Score("Player 1".to_string(), 0, "AI".to_string(), 0)
        );
        assert_eq!(
            events.last(),
            Some(&RenderEvent::ModeSwitch("Play with Friend".to_string(), Mode::Friend))
        );
    }

    #[test]
    fn test_human_input_rejected_on_computer_turn() {
        let mut controller = create_controller();
        controller.start_match(Mode::Ai);
        controller.submit_move(4).unwrap();

        assert!(controller.pending_computer_turn().is_some());
        assert_eq!(
            controller.renderer().last_message(),
            Some(&RenderEvent::TurnMessage("AI's turn!".to_string()))
        );

        let board_before = *controller.board();
        let event_count = controller.renderer().events.len();

        assert_eq!(controller.submit_move(0), Err(GameError::NotYourTurn));

        assert_eq!(*controller.board(), board_before);
        assert_eq!(controller.current_side(), Side::PlayerTwo);
        assert_eq!(controller.renderer().events.len(), event_count);
    }

    #[test]
    fn test_computer_turn_places_mark_and_returns_turn() {
        let mut controller = create_controller();
        controller.start_match(Mode::Ai);
        controller.submit_move(4).unwrap();

        let ticket = controller.pending_computer_turn().unwrap();
        let index = controller.play_computer_turn(ticket).unwrap();

        assert_ne!(index, 4);
        assert_eq!(controller.board().get(index), Some(Mark::O));
        assert_eq!(controller.current_side(), Side::PlayerOne);
        assert!(controller.pending_computer_turn().is_none());
        assert_eq!(
            controller.play_computer_turn(ticket),
            Err(GameError::StaleComputerTurn)
        );
    }

    #[test]
    fn test_no_computer_turn_in_friend_mode() {
        let mut controller = create_controller();
        controller.start_match(Mode::Friend);
        controller.submit_move(4).unwrap();
        assert!(controller.pending_computer_turn().is_none());
    }

    #[test]
    fn test_computer_opens_after_restart() {
        let mut controller = create_controller();
        controller.start_match(Mode::Ai);
        controller.restart().unwrap();

        assert_eq!(controller.current_side(), Side::PlayerTwo);
        assert_eq!(
            controller.renderer().last_message(),
            Some(&RenderEvent::TurnMessage("AI's turn!".to_string()))
        );

        let ticket = controller.pending_computer_turn().unwrap();
        assert_eq!(controller.play_computer_turn(ticket), Ok(0));
        assert_eq!(controller.board().ply(), 1);
    }

    #[test]
    fn test_ticket_from_previous_round_is_stale() {
        let mut controller = create_controller();
        controller.start_match(Mode::Ai);
        controller.submit_move(0).unwrap();
        let ticket = controller.pending_computer_turn().unwrap();

        controller.restart().unwrap();
        assert_ne!(controller.pending_computer_turn(), Some(ticket));
        assert_eq!(
            controller.play_computer_turn(ticket),
            Err(GameError::StaleComputerTurn)
        );
        assert_eq!(controller.board().ply(), 0);
    }

    #[test]
    fn test_computer_never_loses() {
        let mut controller = create_controller();
        controller.start_match(Mode::Ai);

        while controller.phase() == MatchPhase::RoundInProgress {
            if let Some(ticket) = controller.pending_computer_turn() {
                controller.play_computer_turn(ticket).unwrap();
            } else {
                let index = (0..CELL_COUNT)
                    .find(|&i| controller.board().is_valid_move(i))
                    .unwrap();
                controller.submit_move(index).unwrap();
            }
        }

        assert!(!matches!(
            controller.outcome(),
            RoundOutcome::Win(Side::PlayerOne, _)
        ));
    }
}
