use wordseek_core::Position;

use crate::{
    state::AppState,
    ui::{
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        sidebar::SidebarViewModel,
        status_line::{GameStatus, StatusLineViewModel},
        word_list::{WordEntry, WordListViewModel},
    },
};

fn build_grid(app_state: &AppState) -> Vec<Vec<GridCell>> {
    let game = &app_state.game;
    let selection = game.selection();
    let path = selection.path();
    let anchor = selection.anchor();
    let solved_cells = game.solved_cells();

    game.grid()
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, text)| {
                    let pos = Position::new(row, col);
                    let mut visual_state = GridVisualState::empty();
                    if anchor == Some(pos) {
                        visual_state |= GridVisualState::ANCHOR;
                    }
                    if path.is_some_and(|path| path.contains(pos)) {
                        visual_state |= GridVisualState::SELECTION_PATH;
                    }
                    if solved_cells.contains(pos) {
                        visual_state |= GridVisualState::FOUND;
                    }
                    GridCell {
                        text: text.clone(),
                        visual_state,
                    }
                })
                .collect()
        })
        .collect()
}

fn build_word_list(app_state: &AppState) -> WordListViewModel<'_> {
    let entries = app_state
        .game
        .placements()
        .iter()
        .map(|placement| WordEntry {
            word: &placement.word,
            found: app_state.found_words.contains(&placement.word),
        })
        .collect();
    WordListViewModel::new(entries, app_state.game.progress().found)
}

#[must_use]
pub(crate) fn build_game_screen_view_model(app_state: &AppState) -> GameScreenViewModel<'_> {
    let game = &app_state.game;

    let status = if let Some(message) = &app_state.load_error {
        GameStatus::LoadFailed(message)
    } else if game.is_solved() {
        GameStatus::Solved
    } else {
        GameStatus::InProgress
    };
    let status_line_vm = StatusLineViewModel::new(status);

    let grid = build_grid(app_state);
    let selecting = game.selection().is_active();
    let grid_vm = GridViewModel::new(grid, selecting, &app_state.settings.highlight);

    let sidebar_vm = SidebarViewModel::new(
        build_word_list(app_state),
        &app_state.settings,
        app_state.source.to_string(),
    );

    GameScreenViewModel::new(status_line_vm, grid_vm, sidebar_vm)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use wordseek_core::Position;

    use super::*;
    use crate::{
        action::{Action, handler},
        payload::PuzzleSource,
    };

    fn state() -> AppState {
        AppState::from_source(PuzzleSource::Bundled)
    }

    fn visual(app_state: &AppState, row: usize, col: usize) -> GridVisualState {
        build_grid(app_state)[row][col].visual_state
    }

    #[test]
    fn idle_grid_has_no_highlights() {
        let app_state = state();
        let grid = build_grid(&app_state);
        assert_eq!(grid.len(), app_state.game.grid().row_count());
        assert!(
            grid.iter()
                .flatten()
                .all(|cell| cell.visual_state.is_empty())
        );
        assert_eq!(grid[0][0].text, "M");
    }

    #[test]
    fn active_selection_marks_anchor_and_path() {
        let mut app_state = state();
        handler::handle(&mut app_state, Action::ClickCell(Position::new(0, 0)));
        handler::handle(&mut app_state, Action::HoverCell(Position::new(0, 2)));

        assert_eq!(
            visual(&app_state, 0, 0),
            GridVisualState::ANCHOR | GridVisualState::SELECTION_PATH
        );
        assert_eq!(visual(&app_state, 0, 1), GridVisualState::SELECTION_PATH);
        assert_eq!(visual(&app_state, 0, 2), GridVisualState::SELECTION_PATH);
        assert!(visual(&app_state, 0, 3).is_empty());
    }

    #[test]
    fn found_word_cells_are_marked() {
        let mut app_state = state();
        let first = app_state.game.placements()[0].clone();
        handler::handle(&mut app_state, Action::ClickCell(first.start));
        handler::handle(&mut app_state, Action::ClickCell(first.end));

        for pos in first.line().unwrap().cells() {
            assert_eq!(
                visual(&app_state, pos.row(), pos.col()),
                GridVisualState::FOUND
            );
        }

        let vm = build_game_screen_view_model(&app_state);
        let words = vm.sidebar_vm.word_list_vm();
        assert_eq!(words.summary(), format!("Found: 1 / {}", words.entries().len()));
        assert!(words.entries()[0].found);
        assert!(!words.entries()[1].found);
    }

    #[test]
    fn status_reflects_progress_and_errors() {
        let mut app_state = state();
        let vm = build_game_screen_view_model(&app_state);
        assert_eq!(vm.status_line_vm.status(), GameStatus::InProgress);

        let placements = app_state.game.placements().to_vec();
        for placement in &placements {
            handler::handle(&mut app_state, Action::ClickCell(placement.start));
            handler::handle(&mut app_state, Action::ClickCell(placement.end));
        }
        let vm = build_game_screen_view_model(&app_state);
        assert_eq!(vm.status_line_vm.status(), GameStatus::Solved);

        app_state.source = PuzzleSource::File(PathBuf::from("/nonexistent/wordseek.json"));
        app_state.reload();
        let vm = build_game_screen_view_model(&app_state);
        assert!(matches!(
            vm.status_line_vm.status(),
            GameStatus::LoadFailed(_)
        ));
    }
}
