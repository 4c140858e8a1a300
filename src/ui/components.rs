//! Reusable UI components
//!
//! Each component paints itself and returns its `egui::Response`; none of
//! them touch converter state directly.

use crate::theme;
use eframe::egui;

/// Gradient banner with the app title
pub fn header(ui: &mut egui::Ui, title: &str) -> egui::Response {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, theme::HEADER_HEIGHT), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.add(
            theme::elevation_shadow().as_shape(rect, theme::RADIUS_LARGE),
        );

        // Gradient mesh has square corners, so the rounded ends are painted
        // as solid caps in the stop colors and the mesh covers the middle.
        let radius = theme::RADIUS_LARGE;
        let body = rect.shrink2(egui::vec2(radius, 0.0));
        painter.rect_filled(
            egui::Rect::from_min_max(rect.min, egui::pos2(body.min.x + radius, rect.max.y)),
            radius,
            theme::LIGHT_BLUE,
        );
        painter.rect_filled(
            egui::Rect::from_min_max(egui::pos2(body.max.x - radius, rect.min.y), rect.max),
            radius,
            theme::LIGHT_PURPLE,
        );
        theme::paint_gradient(
            painter,
            body,
            theme::LIGHT_BLUE,
            theme::LIGHT_PURPLE,
            theme::GradientAxis::Horizontal,
        );

        theme::paint_bold_text(
            painter,
            rect.center(),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(theme::FONT_TITLE),
            theme::TEXT_ON_BRAND,
        );
    }

    response
}

/// Labelled single-line amount field. The caller owns the text.
pub fn amount_input(ui: &mut egui::Ui, amount: &mut String) -> egui::Response {
    let frame = egui::Frame::new()
        .fill(theme::BG_SURFACE)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_INPUT))
        .corner_radius(theme::RADIUS_INPUT)
        .shadow(theme::elevation_shadow())
        .inner_margin(egui::Margin::symmetric(12, 6));

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("Amount")
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_LABEL),
        );
        ui.add(
            egui::TextEdit::singleline(amount)
                .frame(false)
                .hint_text("0.00")
                .font(egui::FontId::proportional(theme::FONT_BODY))
                .desired_width(f32::INFINITY),
        )
    });

    let field = inner.inner;
    if field.has_focus() {
        ui.painter().rect_stroke(
            inner.response.rect,
            theme::RADIUS_INPUT,
            egui::Stroke::new(theme::STROKE_FOCUS, theme::BORDER_FOCUS),
            egui::StrokeKind::Inside,
        );
    }
    field
}

/// One of the two mutually exclusive direction buttons
pub fn direction_button(ui: &mut egui::Ui, text: &str, selected: bool) -> egui::Response {
    let (fill, text_color) = if selected {
        (theme::BG_SELECTED, theme::TEXT_PRIMARY)
    } else {
        (theme::BG_SURFACE, theme::TEXT_MUTED)
    };

    let size = egui::vec2(theme::DIRECTION_BUTTON_WIDTH, theme::BUTTON_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
        let painter = ui.painter();
        painter.add(
            theme::elevation_shadow().as_shape(draw_rect, theme::RADIUS_LARGE),
        );
        painter.rect_filled(draw_rect, theme::RADIUS_LARGE, fill);
        theme::paint_bold_text(
            painter,
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(theme::FONT_BUTTON),
            text_color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Full-width neon "Convert" button
pub fn convert_button(ui: &mut egui::Ui) -> egui::Response {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(width, theme::BUTTON_HEIGHT_LARGE),
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::NEON_GREEN, rect);
        let painter = ui.painter();
        painter.add(
            theme::elevation_shadow().as_shape(draw_rect, theme::RADIUS_LARGE),
        );
        painter.rect_filled(draw_rect, theme::RADIUS_LARGE, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}  Convert", egui_phosphor::regular::ARROWS_LEFT_RIGHT),
            egui::FontId::proportional(theme::FONT_BUTTON),
            theme::TEXT_PRIMARY,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Large bold result line, wrapped to the available width and centred
pub fn result_text(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let wrap_width = (ui.available_width() - theme::BOLD_OFFSET).max(0.0);
    let galley = ui.fonts(|f| {
        let mut job = egui::text::LayoutJob::simple(
            text.to_owned(),
            egui::FontId::proportional(theme::FONT_RESULT),
            theme::TEXT_PRIMARY,
            wrap_width,
        );
        job.halign = egui::Align::Center;
        f.layout_job(job)
    });

    let size = galley.size() + egui::vec2(theme::BOLD_OFFSET, 0.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        // Centre-aligned galleys are laid out around x = 0
        let pos = rect.min - galley.rect.min.to_vec2();
        theme::paint_bold_galley(ui.painter(), pos, galley, theme::TEXT_PRIMARY);
    }
    response
}
