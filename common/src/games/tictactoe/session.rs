use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

use crate::{log, log_warn};
use super::game_controller::{GameController, TurnTicket};
use super::renderer::Renderer;
use super::types::Mode;

/// Input delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    CellActivated(usize),
    ModeSelected(Mode),
    ResetActivated,
}

pub struct GameSession;

impl GameSession {
    /// Drives `controller` from `command_rx` until the sender side is dropped,
    /// then hands the controller back.
    ///
    /// Commands are handled one at a time. A computer turn is played after
    /// `ai_move_delay`; if a command changes the due turn while the timer is
    /// running, the timer is re-armed for the new turn or dropped.
    pub async fn run<R: Renderer>(
        mut controller: GameController<R>,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        ai_move_delay: Duration,
    ) -> GameController<R> {
        let mut scheduled: Option<TurnTicket> = None;
        let timer = sleep(ai_move_delay);
        tokio::pin!(timer);

        loop {
            let pending = controller.pending_computer_turn();
            if ai_move_delay.is_zero()
                && let Some(ticket) = pending
                && play_computer_turn(&mut controller, ticket)
            {
                continue;
            }

            if pending != scheduled {
                scheduled = pending;
                if scheduled.is_some() {
                    timer.as_mut().reset(Instant::now() + ai_move_delay);
                }
            }

            tokio::select! {
                biased;

                _ = &mut timer, if scheduled.is_some() => {
                    if let Some(ticket) = scheduled.take() {
                        play_computer_turn(&mut controller, ticket);
                    }
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    handle_command(&mut controller, command);
                }
            }
        }

        log!("Game session closed");
        controller
    }
}

fn handle_command<R: Renderer>(controller: &mut GameController<R>, command: SessionCommand) {
    match command {
        SessionCommand::CellActivated(index) => {
            if let Err(e) = controller.submit_move(index) {
                log_warn!("Rejected move on cell {}: {}", index, e);
            }
        }
        SessionCommand::ModeSelected(mode) => controller.switch_mode(mode),
        SessionCommand::ResetActivated => {
            if let Err(e) = controller.restart() {
                log_warn!("Reset ignored: {}", e);
            }
        }
    }
}

fn play_computer_turn<R: Renderer>(controller: &mut GameController<R>, ticket: TurnTicket) -> bool {
    match controller.play_computer_turn(ticket) {
        Ok(index) => {
            log!("Computer placed a mark on cell {}", index);
            true
        }
        Err(e) => {
            log_warn!("Computer turn skipped: {}", e);
            false
        }
    }
}
