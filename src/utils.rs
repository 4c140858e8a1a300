//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Square viewBox, two overlapping coins with € and $ marks, for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#00bfff"/><stop offset="1" stop-color="#b19cd9"/></linearGradient></defs><rect width="64" height="64" rx="14" fill="url(#g)"/><circle cx="25" cy="27" r="15" fill="#ffffff"/><circle cx="40" cy="38" r="15" fill="#39ff14" stroke="#ffffff" stroke-width="2"/><path d="M29 21a8 8 0 1 0 0 12M17 25h9M17 29h9" fill="none" stroke="#00bfff" stroke-width="2.5" stroke-linecap="round"/><path d="M44 32c-1-2-3-2.5-4.5-2.5-2.5 0-4 1.2-4 3s1.8 2.5 4 3 4.5 1.3 4.5 3.3-1.8 3.2-4.5 3.2c-2 0-3.6-.8-4.5-2.5M40 27v3M40 44v3" fill="none" stroke="#000000" stroke-width="2.2" stroke-linecap="round"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
/// Returns None if the SVG fails to parse or the size is zero.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
