use eframe::egui::{Color32, Visuals};

/// Color palette for word-search grid rendering.
///
/// Kept separate from `egui::Visuals` so the selection and found-word colors
/// can be tuned without touching the global UI theme.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_path: Color32,
    pub cell_bg_anchor: Color32,
    pub cell_bg_found: Color32,

    pub border_inactive: Color32,
    pub border_path: Color32,

    pub text_normal: Color32,
    pub text_highlighted: Color32,
}

impl GridPalette {
    /// Builds a palette from the current visuals and the found-word fill.
    pub fn from_visuals(visuals: &Visuals, cell_bg_found: Color32) -> Self {
        let cell_bg_path = visuals.selection.bg_fill;
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_path,
            cell_bg_anchor: visuals.widgets.active.bg_fill,
            cell_bg_found,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_path: visuals.selection.stroke.color,

            text_normal: visuals.text_color(),
            text_highlighted: visuals.strong_text_color(),
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    const FOUND_LIGHT: Color32 = Color32::from_rgb(0xc0, 0x84, 0xfc);
    const FOUND_DARK: Color32 = Color32::from_rgb(0x7e, 0x22, 0xce);

    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: GridPalette::from_visuals(visuals, Self::FOUND_LIGHT),
            dark: GridPalette::from_visuals(visuals, Self::FOUND_DARK),
        }
    }

    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
