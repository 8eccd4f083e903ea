use std::sync::{Arc, Mutex, MutexGuard};

use tictactoe_common::games::tictactoe::{CELL_COUNT, ColorTag, Mark, Mode, WinningLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub left_label: String,
    pub left_score: u32,
    pub right_label: String,
    pub right_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSwitch {
    pub label: String,
    pub target: Mode,
}

/// Everything the window draws. Written by the session thread through the
/// renderer, read by the UI thread once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub cells: [Option<(Mark, ColorTag)>; CELL_COUNT],
    pub message: Option<String>,
    pub banner: Option<(String, ColorTag)>,
    pub highlight: Option<(WinningLine, ColorTag)>,
    pub score: Option<ScoreLine>,
    pub mode_selection_visible: bool,
    pub mode_switch: Option<ModeSwitch>,
    pub celebration_pending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            message: None,
            banner: None,
            highlight: None,
            score: None,
            mode_selection_visible: true,
            mode_switch: None,
            celebration_pending: false,
        }
    }
}

#[derive(Clone, Default)]
pub struct SharedState {
    view: Arc<Mutex<ViewState>>,
    repaint_context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&self, change: impl FnOnce(&mut ViewState)) {
        change(&mut lock(&self.view));
        if let Some(ctx) = lock(&self.repaint_context).as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn snapshot(&self) -> ViewState {
        lock(&self.view).clone()
    }

    pub fn take_celebration(&self) -> bool {
        std::mem::take(&mut lock(&self.view).celebration_pending)
    }

    pub fn set_repaint_context(&self, ctx: egui::Context) {
        *lock(&self.repaint_context) = Some(ctx);
    }
}
