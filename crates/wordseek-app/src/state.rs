use wordseek_game::{Game, WordFound};

use crate::payload::PuzzleSource;

#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Game,
    pub(crate) source: PuzzleSource,
    pub(crate) found_words: FoundWords,
    pub(crate) settings: Settings,
    pub(crate) load_error: Option<String>,
}

impl AppState {
    /// Creates the state and loads the first puzzle from `source`.
    ///
    /// A failed load leaves an empty puzzle and records the error for display.
    #[must_use]
    pub(crate) fn from_source(source: PuzzleSource) -> Self {
        let mut this = Self {
            game: Game::default(),
            source,
            found_words: FoundWords::default(),
            settings: Settings::default(),
            load_error: None,
        };
        this.reload();
        this
    }

    /// Re-reads the puzzle source and starts a fresh session.
    ///
    /// On failure the current session is kept.
    pub(crate) fn reload(&mut self) {
        match self.source.load() {
            Ok(puzzle) => {
                log::info!(
                    "loaded puzzle from {} ({} words)",
                    self.source,
                    puzzle.placements().len()
                );
                self.game.load(puzzle);
                self.found_words.clear();
                self.load_error = None;
            }
            Err(err) => {
                log::error!("failed to load puzzle from {}: {err}", self.source);
                self.load_error = Some(err.to_string());
            }
        }
    }
}

/// Words reported as found, in discovery order.
///
/// Receives every [`WordFound`] notification and keeps each word once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FoundWords {
    words: Vec<String>,
}

impl FoundWords {
    /// Records a notification; returns `false` if the word was already recorded.
    pub(crate) fn record(&mut self, found: &WordFound) -> bool {
        if self.contains(&found.word) {
            return false;
        }
        self.words.push(found.word.clone());
        true
    }

    #[must_use]
    pub(crate) fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn clear(&mut self) {
        self.words.clear();
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) highlight: HighlightSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HighlightSettings {
    pub(crate) selection_path: bool,
    pub(crate) found_words: bool,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            selection_path: true,
            found_words: true,
        }
    }
}
