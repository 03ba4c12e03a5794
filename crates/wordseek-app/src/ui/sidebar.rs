use eframe::egui::{Button, CollapsingHeader, ScrollArea, Ui, widgets};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{HighlightSettings, Settings},
    ui::word_list::{self, WordListViewModel},
};

pub(crate) const SIDEBAR_WIDTH: f32 = 220.0;

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    word_list_vm: WordListViewModel<'a>,
    settings: &'a Settings,
    source_label: String,
}

impl<'a> SidebarViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        word_list_vm: WordListViewModel<'a>,
        settings: &'a Settings,
        source_label: String,
    ) -> Self {
        Self {
            word_list_vm,
            settings,
            source_label,
        }
    }

    #[must_use]
    pub(crate) fn word_list_vm(&self) -> &WordListViewModel<'a> {
        &self.word_list_vm
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    let mut changed = false;
    let mut settings = vm.settings.clone();
    let Settings { highlight } = &mut settings;

    ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Words");
        ui.indent("sidebar_words", |ui| {
            word_list::show(ui, vm.word_list_vm());
        });

        ui.separator();

        ui.heading("Settings");
        ui.indent("sidebar_settings", |ui| {
            CollapsingHeader::new("Highlight")
                .default_open(true)
                .show(ui, |ui| {
                    let HighlightSettings {
                        selection_path,
                        found_words,
                    } = highlight;
                    changed |= ui.checkbox(selection_path, "Selection path").changed();
                    changed |= ui.checkbox(found_words, "Found words").changed();
                });

            CollapsingHeader::new("Appearance")
                .default_open(true)
                .show(ui, |ui| {
                    widgets::global_theme_preference_buttons(ui);
                });

            CollapsingHeader::new("Puzzle")
                .default_open(true)
                .show(ui, |ui| {
                    ui.label(format!("Source: {}", vm.source_label));
                    let reload = ui
                        .add(Button::new("Reload"))
                        .on_hover_text("Reload the puzzle and start over (Ctrl+R)");
                    if reload.clicked() {
                        action_queue.request(Action::ReloadPuzzle);
                    }
                });
        });
    });

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
}
