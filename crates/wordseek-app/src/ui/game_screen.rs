use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        grid::{self, GridViewModel},
        layout::LayoutScale,
        sidebar::{self, SIDEBAR_WIDTH, SidebarViewModel},
        status_line::{self, StatusLineViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel<'a> {
    pub(crate) status_line_vm: StatusLineViewModel<'a>,
    pub(crate) grid_vm: GridViewModel,
    pub(crate) sidebar_vm: SidebarViewModel<'a>,
}

impl<'a> GameScreenViewModel<'a> {
    #[must_use]
    pub(crate) fn new(
        status_line_vm: StatusLineViewModel<'a>,
        grid_vm: GridViewModel,
        sidebar_vm: SidebarViewModel<'a>,
    ) -> Self {
        Self {
            status_line_vm,
            grid_vm,
            sidebar_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(SIDEBAR_WIDTH))
        .horizontal(|mut strip| {
            strip.cell(|ui| {
                let spacing = ui.spacing().item_spacing;
                let units = vm.grid_vm.required_units().stack(status_line::required_units());
                let scale = LayoutScale::fit(ui.available_size() - spacing * 2.0, units);
                let status_height = scale.cell_size * status_line::required_units().height;

                StripBuilder::new(ui)
                    .size(Size::exact(status_height))
                    .size(Size::exact(spacing.y))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_line_vm, &scale);
                        });
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, &scale, action_queue);
                        });
                    });
            });
            strip.cell(|ui| {
                sidebar::show(ui, &vm.sidebar_vm, action_queue);
            });
        });
}
