use std::sync::Arc;

use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use wordseek_core::Position;

use crate::{
    action::{Action, ActionRequestQueue},
    state::HighlightSettings,
    ui::{
        grid_theme::{GridPalette, GridTheme},
        layout::{ComponentUnits, LayoutScale},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const ANCHOR = 0b0000_0001;
        const SELECTION_PATH = 0b0000_0010;
        const FOUND = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) text: String,
    pub(crate) visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    rows: Vec<Vec<GridCell>>,
    columns: usize,
    selecting: bool,
    enabled_highlights: GridVisualState,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(
        rows: Vec<Vec<GridCell>>,
        selecting: bool,
        highlight_settings: &HighlightSettings,
    ) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let HighlightSettings {
            selection_path,
            found_words,
        } = highlight_settings;
        let mut enabled_highlights = GridVisualState::ANCHOR;
        if *selection_path {
            enabled_highlights |= GridVisualState::SELECTION_PATH;
        }
        if *found_words {
            enabled_highlights |= GridVisualState::FOUND;
        }
        Self {
            rows,
            columns,
            selecting,
            enabled_highlights,
        }
    }

    #[must_use]
    pub(crate) fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    #[must_use]
    pub(crate) fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn required_units(&self) -> ComponentUnits {
        ComponentUnits::new(self.columns as f32, self.rows.len() as f32)
    }

    fn effective_visual_state(&self, state: GridVisualState) -> EffectiveGridVisualState {
        EffectiveGridVisualState(self.enabled_highlights & state)
    }
}

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const PATH_BORDER_WIDTH_RATIO: f32 = 2.5;
const FONT_SIZE_RATIO: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveGridVisualState(GridVisualState);

impl EffectiveGridVisualState {
    fn cell_fill_color(self, palette: &GridPalette) -> Color32 {
        if self.0.intersects(GridVisualState::FOUND) {
            return palette.cell_bg_found;
        }
        if self.0.intersects(GridVisualState::ANCHOR) {
            return palette.cell_bg_anchor;
        }
        if self.0.intersects(GridVisualState::SELECTION_PATH) {
            return palette.cell_bg_path;
        }
        palette.cell_bg_default
    }

    fn text_color(self, palette: &GridPalette) -> Color32 {
        if self.0.is_empty() {
            palette.text_normal
        } else {
            palette.text_highlighted
        }
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
        if self
            .0
            .intersects(GridVisualState::ANCHOR | GridVisualState::SELECTION_PATH)
        {
            Stroke::new(base_width * PATH_BORDER_WIDTH_RATIO, palette.border_path)
        } else {
            Stroke::new(base_width * THIN_BORDER_WIDTH_RATIO, palette.border_inactive)
        }
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    let grid_size = Vec2::new(
        cell_size * vm.columns() as f32,
        cell_size * vm.rows().len() as f32,
    );
    let (rect, _response) = ui.allocate_exact_size(grid_size, Sense::hover());

    let painter = ui.painter();
    for (row, cells) in vm.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let pos = Position::new(row, col);
            let vs = vm.effective_visual_state(cell.visual_state);

            let cell_min =
                rect.min + Vec2::new(cell_size * col as f32, cell_size * row as f32);
            let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));

            painter.rect_filled(cell_rect, 0.0, vs.cell_fill_color(palette));
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                &cell.text,
                FontId::monospace(cell_size * FONT_SIZE_RATIO),
                vs.text_color(palette),
            );
            painter.rect_stroke(
                cell_rect,
                0.0,
                vs.cell_border(palette, cell_size),
                StrokeKind::Inside,
            );

            let response = ui.interact(cell_rect, ui.id().with((row, col)), Sense::click());
            if response.clicked() {
                action_queue.request(Action::ClickCell(pos));
            } else if vm.selecting && response.hovered() {
                action_queue.request(Action::HoverCell(pos));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str, visual_state: GridVisualState) -> GridCell {
        GridCell {
            text: text.to_owned(),
            visual_state,
        }
    }

    #[test]
    fn columns_follow_longest_row() {
        let rows = vec![
            vec![cell("A", GridVisualState::empty())],
            vec![
                cell("B", GridVisualState::empty()),
                cell("C", GridVisualState::empty()),
            ],
        ];
        let vm = GridViewModel::new(rows, false, &HighlightSettings::default());
        assert_eq!(vm.columns(), 2);
        assert_eq!(vm.rows().len(), 2);
        assert_eq!(vm.required_units(), ComponentUnits::new(2.0, 2.0));
    }

    #[test]
    fn disabled_highlights_are_masked() {
        let settings = HighlightSettings {
            selection_path: false,
            found_words: true,
        };
        let vm = GridViewModel::new(Vec::new(), true, &settings);
        let vs = vm.effective_visual_state(
            GridVisualState::SELECTION_PATH | GridVisualState::FOUND,
        );
        assert_eq!(vs.0, GridVisualState::FOUND);
        let vs = vm.effective_visual_state(GridVisualState::SELECTION_PATH);
        assert!(vs.0.is_empty());
        let vs = vm.effective_visual_state(GridVisualState::ANCHOR);
        assert_eq!(vs.0, GridVisualState::ANCHOR);
    }
}
