//! Centralized theme constants for Currency Converter
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Brand
// =============================================================================
pub const LIGHT_BLUE: Color32 = Color32::from_rgb(0x00, 0xbf, 0xff); // deep sky blue
pub const LIGHT_PURPLE: Color32 = Color32::from_rgb(0xb1, 0x9c, 0xd9);
pub const NEON_GREEN: Color32 = Color32::from_rgb(0x39, 0xff, 0x14);

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_SURFACE: Color32 = Color32::WHITE;
pub const BG_BACKGROUND: Color32 = Color32::from_rgb(0xf2, 0xf2, 0xf5);
pub const BG_SELECTED: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc); // light gray

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::BLACK;
pub const TEXT_ON_BRAND: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x88, 0x88, 0x88); // gray
pub const TEXT_LABEL: Color32 = Color32::from_rgb(0x55, 0x55, 0x5e);

// =============================================================================
// COLORS - Borders & shadows
// =============================================================================
pub const BORDER_INPUT: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
pub const BORDER_FOCUS: Color32 = LIGHT_BLUE;
pub const SHADOW: Color32 = Color32::from_black_alpha(60);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_RESULT: f32 = 54.0;
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_BUTTON: f32 = 16.0;
pub const FONT_BODY: f32 = 16.0;
pub const FONT_LABEL: f32 = 12.0;

/// Horizontal offset of the second pass in faux-bold text. egui ships no
/// bold face, so bold is drawn as two overlapping regular passes.
pub const BOLD_OFFSET: f32 = 0.8;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const WINDOW_SIZE: (f32, f32) = (420.0, 640.0);
pub const WINDOW_MIN_SIZE: (f32, f32) = (360.0, 520.0);
pub const CONTENT_MAX_WIDTH: f32 = 480.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const HEADER_HEIGHT: f32 = 64.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 44.0;
pub const DIRECTION_BUTTON_WIDTH: f32 = 150.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_INPUT: f32 = 8.0;
pub const RADIUS_LARGE: f32 = 16.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_FOCUS: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_TOP: f32 = 26.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BACKGROUND,
        window_fill: BG_SURFACE,
        extreme_bg_color: BG_SURFACE,
        hyperlink_color: LIGHT_BLUE,
        override_text_color: Some(TEXT_PRIMARY),
        selection: egui::style::Selection {
            bg_fill: LIGHT_BLUE.gamma_multiply(0.35),
            stroke: egui::Stroke::new(STROKE_DEFAULT, LIGHT_BLUE),
        },
        text_cursor: egui::style::TextCursorStyle {
            stroke: egui::Stroke::new(STROKE_FOCUS, LIGHT_BLUE),
            ..Default::default()
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, SPACING_MD);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
    });
}

// =============================================================================
// HELPER - Shadow
// =============================================================================

/// Soft drop shadow used under the header, input and buttons
pub fn elevation_shadow() -> egui::epaint::Shadow {
    egui::epaint::Shadow {
        offset: [0, 4],
        blur: 8,
        spread: 0,
        color: SHADOW,
    }
}

// =============================================================================
// HELPER - Gradients
// =============================================================================

/// Axis along which a gradient runs
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GradientAxis {
    Horizontal,
    Vertical,
}

/// Paint a two-stop linear gradient over `rect`.
/// egui has no gradient fill, so this builds a 4-vertex mesh.
pub fn paint_gradient(
    painter: &egui::Painter,
    rect: egui::Rect,
    from: Color32,
    to: Color32,
    axis: GradientAxis,
) {
    let mut mesh = egui::Mesh::default();
    let (tl, tr, bl, br) = match axis {
        GradientAxis::Horizontal => (from, to, from, to),
        GradientAxis::Vertical => (from, from, to, to),
    };
    mesh.colored_vertex(rect.left_top(), tl);
    mesh.colored_vertex(rect.right_top(), tr);
    mesh.colored_vertex(rect.left_bottom(), bl);
    mesh.colored_vertex(rect.right_bottom(), br);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}

/// Interpolate between two colors, `t` in 0..=1
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
        mix(from.a(), to.a()),
    )
}

// =============================================================================
// HELPER - Bold text
// =============================================================================

/// Paint `text` in faux bold. Returns the covered rect, which is
/// `BOLD_OFFSET` wider than the regular text.
pub fn paint_bold_text(
    painter: &egui::Painter,
    pos: egui::Pos2,
    anchor: egui::Align2,
    text: &str,
    font_id: egui::FontId,
    color: Color32,
) -> egui::Rect {
    // Shift left by half the offset so the anchor still centres the result
    let half = egui::vec2(BOLD_OFFSET / 2.0, 0.0);
    let left = painter.text(pos - half, anchor, text, font_id.clone(), color);
    let right = painter.text(pos + half, anchor, text, font_id, color);
    left.union(right)
}

/// Paint a laid-out galley in faux bold at `pos` (top-left)
pub fn paint_bold_galley(
    painter: &egui::Painter,
    pos: egui::Pos2,
    galley: std::sync::Arc<egui::Galley>,
    color: Color32,
) {
    painter.galley(pos, galley.clone(), color);
    painter.galley(pos + egui::vec2(BOLD_OFFSET, 0.0), galley, color);
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Darkens slightly on hover, a bit more + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (darken(base_fill, 0.12), rect.shrink(1.5))
    } else if response.hovered() {
        (darken(base_fill, 0.06), rect)
    } else {
        (base_fill, rect)
    }
}

fn darken(c: Color32, amount: f32) -> Color32 {
    lerp_color(c, Color32::BLACK, amount)
}
