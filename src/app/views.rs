//! View rendering (converter screen)

use super::App;
use crate::constants::APP_NAME;
use crate::theme;
use crate::types::ConversionDirection;
use crate::ui::components;
use eframe::egui;

impl App {
    /// Paint the full-window background gradient (purple at the top, blue at the bottom)
    pub(crate) fn render_background(&self, ctx: &egui::Context) {
        theme::paint_gradient(
            &ctx.layer_painter(egui::LayerId::background()),
            ctx.screen_rect(),
            theme::LIGHT_PURPLE,
            theme::LIGHT_BLUE,
            theme::GradientAxis::Vertical,
        );
    }

    /// Header, amount field, direction buttons, convert button and result
    pub(crate) fn render_converter(&mut self, ui: &mut egui::Ui) {
        ui.add_space(theme::SPACING_TOP);
        components::header(ui, APP_NAME);
        ui.add_space(theme::SPACING_XL);

        // Amount
        let mut input = self.converter.input().to_string();
        let field = components::amount_input(ui, &mut input);
        if field.changed() {
            self.converter.set_input(input);
        }
        if self.focus_input {
            self.focus_input = false;
            field.request_focus();
        }
        let submitted =
            field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(theme::SPACING_XL);

        // Direction
        self.render_direction_buttons(ui);
        ui.add_space(theme::SPACING_XL);

        // Convert
        if components::convert_button(ui).clicked() || submitted {
            self.converter.convert();
        }
        ui.add_space(theme::SPACING_XL);

        ui.vertical_centered(|ui| {
            components::result_text(ui, &self.converter.result_label());
        });
    }

    fn render_direction_buttons(&mut self, ui: &mut egui::Ui) {
        let count = ConversionDirection::ALL.len() as f32;
        let total = theme::DIRECTION_BUTTON_WIDTH * count;
        // Evenly spaced: equal gaps before, between and after the buttons
        let gap = ((ui.available_width() - total) / (count + 1.0)).max(theme::SPACING_SM);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for direction in ConversionDirection::ALL {
                ui.add_space(gap);
                let selected = self.converter.direction() == direction;
                let label = format!("{}  {}", direction.source().icon(), direction.label());
                if components::direction_button(ui, &label, selected).clicked() {
                    self.converter.select_direction(direction);
                }
            }
        });
    }
}
