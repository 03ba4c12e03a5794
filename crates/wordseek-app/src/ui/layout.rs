use eframe::egui::Vec2;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) spacing: Vec2,
}

impl LayoutScale {
    pub(crate) const SPACING_FACTOR: Vec2 = Vec2::new(0.15, 0.20);
    const MIN_CELL_SIZE: f32 = 12.0;
    const MAX_CELL_SIZE: f32 = 72.0;

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        let spacing = Vec2::splat(cell_size) * Self::SPACING_FACTOR;
        Self { cell_size, spacing }
    }

    /// Picks the largest cell size that fits `units` into `available`.
    #[must_use]
    pub(crate) fn fit(available: Vec2, units: ComponentUnits) -> Self {
        let width = if units.width > 0.0 {
            available.x / units.width
        } else {
            Self::MAX_CELL_SIZE
        };
        let height = if units.height > 0.0 {
            available.y / units.height
        } else {
            Self::MAX_CELL_SIZE
        };
        let cell_size = f32::min(width, height).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);
        Self::new(cell_size)
    }
}

/// Size of a component measured in cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Stacks `other` below `self`.
    #[must_use]
    pub(crate) fn stack(self, other: Self) -> Self {
        Self::new(f32::max(self.width, other.width), self.height + other.height)
    }
}
