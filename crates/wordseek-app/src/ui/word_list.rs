use eframe::egui::{RichText, Ui};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordEntry<'a> {
    pub(crate) word: &'a str,
    pub(crate) found: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct WordListViewModel<'a> {
    entries: Vec<WordEntry<'a>>,
    found_count: usize,
}

impl<'a> WordListViewModel<'a> {
    #[must_use]
    pub(crate) fn new(entries: Vec<WordEntry<'a>>, found_count: usize) -> Self {
        Self {
            entries,
            found_count,
        }
    }

    #[must_use]
    pub(crate) fn entries(&self) -> &[WordEntry<'a>] {
        &self.entries
    }

    #[must_use]
    pub(crate) fn summary(&self) -> String {
        format!("Found: {} / {}", self.found_count, self.entries.len())
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &WordListViewModel) {
    ui.label(RichText::new(vm.summary()).strong());
    ui.add_space(ui.spacing().item_spacing.y);
    for entry in vm.entries() {
        let text = RichText::new(entry.word).monospace();
        if entry.found {
            ui.label(text.strikethrough().weak());
        } else {
            ui.label(text);
        }
    }
}
