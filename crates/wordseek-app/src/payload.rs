//! Puzzle payloads supplied by the external puzzle service.
//!
//! The service answers with JSON of the form
//!
//! ```json
//! { "word_search": { "word_search": "C A T\nX Y Z",
//!                    "answers": [{ "word": "CAT", "start": [0, 0], "end": [0, 2],
//!                                  "direction": "horizontal" }] } }
//! ```
//!
//! The inner object is accepted on its own as well.

use std::{fs, io, path::PathBuf};

use serde::Deserialize;
use wordseek_core::Position;
use wordseek_game::{Placement, Puzzle};

const BUNDLED_PUZZLE: &str = include_str!("../assets/demo-puzzle.json");

/// DTO for one answer-key entry. Coordinates are `[row, col]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct AnswerDto {
    pub(crate) word: String,
    pub(crate) start: [usize; 2],
    pub(crate) end: [usize; 2],
    #[serde(default)]
    pub(crate) direction: String,
}

/// DTO for a grid and its answer key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct WordSearchDto {
    pub(crate) word_search: String,
    pub(crate) answers: Vec<AnswerDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PayloadDto {
    Wrapped { word_search: WordSearchDto },
    Bare(WordSearchDto),
}

impl From<AnswerDto> for Placement {
    fn from(dto: AnswerDto) -> Self {
        Placement::new(dto.word, Position::from(dto.start), Position::from(dto.end))
            .with_direction(dto.direction)
    }
}

impl From<WordSearchDto> for Puzzle {
    fn from(dto: WordSearchDto) -> Self {
        let placements = dto.answers.into_iter().map(Placement::from).collect();
        Puzzle::from_text(&dto.word_search, placements)
    }
}

/// Errors that can occur while loading a puzzle payload.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PayloadError {
    /// The payload file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    #[from(ignore)]
    Read { path: PathBuf, source: io::Error },
    /// The payload is not valid puzzle JSON.
    #[display("invalid puzzle payload: {_0}")]
    Json(serde_json::Error),
}

/// Parses a JSON payload into a puzzle.
pub fn parse_puzzle(json: &str) -> Result<Puzzle, PayloadError> {
    let dto: PayloadDto = serde_json::from_str(json)?;
    let dto = match dto {
        PayloadDto::Wrapped { word_search } | PayloadDto::Bare(word_search) => word_search,
    };
    Ok(Puzzle::from(dto))
}

/// Where the puzzle payload comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_more::Display)]
pub enum PuzzleSource {
    /// The demo puzzle compiled into the binary.
    #[default]
    #[display("bundled demo puzzle")]
    Bundled,
    /// A JSON file on disk, re-read on every load.
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl PuzzleSource {
    /// Reads and parses the payload.
    pub fn load(&self) -> Result<Puzzle, PayloadError> {
        match self {
            Self::Bundled => parse_puzzle(BUNDLED_PUZZLE),
            Self::File(path) => {
                let json = fs::read_to_string(path).map_err(|source| PayloadError::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_puzzle(&json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapped_payload() {
        let json = r#"{
            "word_search": {
                "word_search": "C A T\nX Y Z",
                "answers": [
                    {"word": "CAT", "start": [0, 0], "end": [0, 2], "direction": "horizontal"}
                ]
            }
        }"#;
        let puzzle = parse_puzzle(json).unwrap();
        assert_eq!(puzzle.grid().cell(Position::new(1, 2)), Some("Z"));
        assert_eq!(
            puzzle.placements(),
            [Placement::new("CAT", Position::new(0, 0), Position::new(0, 2))
                .with_direction("horizontal")]
        );
    }

    #[test]
    fn test_parse_bare_payload_without_direction() {
        let json = r#"{"word_search": "A B\nC D", "answers": [{"word": "AD", "start": [0, 0], "end": [1, 1]}]}"#;
        let puzzle = parse_puzzle(json).unwrap();
        assert_eq!(puzzle.grid().row_count(), 2);
        assert_eq!(puzzle.placements()[0].direction, "");
        assert_eq!(puzzle.placements()[0].end, Position::new(1, 1));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_puzzle(r#"{"word_search": 3}"#).unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
        assert!(err.to_string().starts_with("invalid puzzle payload"));
    }

    #[test]
    fn test_parse_rejects_negative_coordinates() {
        let json = r#"{"word_search": "A", "answers": [{"word": "A", "start": [-1, 0], "end": [0, 0]}]}"#;
        assert!(parse_puzzle(json).is_err());
    }

    #[test]
    fn test_bundled_puzzle_is_consistent() {
        let puzzle = PuzzleSource::Bundled.load().unwrap();
        assert!(puzzle.grid().is_rectangular());
        assert!(!puzzle.placements().is_empty());
        for placement in puzzle.placements() {
            let line = placement.line().expect("bundled placements are straight");
            let spelled: String = line
                .cells()
                .filter_map(|pos| puzzle.grid().cell(pos))
                .collect();
            assert_eq!(spelled, placement.word);
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let source = PuzzleSource::File(PathBuf::from("/nonexistent/wordseek/puzzle.json"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, PayloadError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/wordseek/puzzle.json"));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(PuzzleSource::Bundled.to_string(), "bundled demo puzzle");
        assert_eq!(
            PuzzleSource::File(PathBuf::from("p.json")).to_string(),
            "p.json"
        );
    }
}
