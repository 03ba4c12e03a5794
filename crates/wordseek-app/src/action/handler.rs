use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    match action {
        Action::ClickCell(pos) => {
            if let Some(found) = app_state.game.click(pos)
                && app_state.found_words.record(&found)
            {
                log::debug!(
                    "progress: {}/{} words",
                    app_state.found_words.len(),
                    app_state.game.placements().len()
                );
            }
        }
        Action::HoverCell(pos) => app_state.game.extend_selection(pos),
        Action::ReloadPuzzle => app_state.reload(),
        Action::UpdateSettings(settings) => app_state.settings = settings,
    }
}
