use eframe::egui::{Align, Label, RichText, Ui, Vec2, Widget as _};

use crate::ui::layout::{ComponentUnits, LayoutScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus<'a> {
    InProgress,
    Solved,
    LoadFailed(&'a str),
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel<'a> {
    status: GameStatus<'a>,
}

impl<'a> StatusLineViewModel<'a> {
    #[must_use]
    pub(crate) fn new(status: GameStatus<'a>) -> Self {
        Self { status }
    }

    #[must_use]
    pub(crate) fn status(&self) -> GameStatus<'a> {
        self.status
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 0.5)
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, scale: &LayoutScale) {
    let cell_size = scale.cell_size;
    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, 0.0);
    ui.horizontal(|ui| {
        let (status_text, status_color) = match vm.status() {
            GameStatus::InProgress => (
                "Select a word: click its first letter, then its last.".to_owned(),
                ui.visuals().text_color(),
            ),
            GameStatus::Solved => (
                "All words found! Congratulations!".to_owned(),
                ui.visuals().warn_fg_color,
            ),
            GameStatus::LoadFailed(message) => (
                format!("Could not load puzzle: {message}"),
                ui.visuals().error_fg_color,
            ),
        };
        Label::new(
            RichText::new(status_text)
                .color(status_color)
                .size(cell_size * 0.4),
        )
        .halign(Align::Max)
        .ui(ui);
    });
}
