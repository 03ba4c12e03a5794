//! Wordseek desktop application UI.
//!
//! # Design Notes
//! - A word is selected with two clicks: the first letter, then the last.
//! - While a selection is active, hovering a cell previews the straight path to it.
//! - Found words stay highlighted on the grid and struck through in the word list.
//! - The puzzle can be reloaded from its source at any time, resetting progress.

use eframe::{
    App, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    payload::PuzzleSource,
    state::AppState,
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct WordseekApp {
    app_state: AppState,
}

impl WordseekApp {
    #[must_use]
    pub fn new(source: PuzzleSource) -> Self {
        Self {
            app_state: AppState::from_source(source),
        }
    }
}

impl App for WordseekApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| {
            ui::input::handle_input(i, &mut action_queue);
        });
        action::handler::handle_all(&mut self.app_state, &mut action_queue);

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        action::handler::handle_all(&mut self.app_state, &mut action_queue);
    }
}
