use std::mem;

use wordseek_core::Position;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// A click on a cell: starts a gesture while idle, completes it while active.
    ClickCell(Position),
    /// The pointer is over a cell.
    HoverCell(Position),
    ReloadPuzzle,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
