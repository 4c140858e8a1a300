//! User settings stored as settings.json in the app data directory
//!
//! Only window geometry is kept. Amounts and the selected direction are
//! never written to disk.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Settings {
    /// Read saved geometry. A missing file is the normal first-run case;
    /// unreadable or malformed files are logged and replaced by defaults.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(file = %path.display(), "First run, window geometry not saved yet");
                return Self::default();
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Cannot read window geometry");
                return Self::default();
            }
        };

        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(file = %path.display(), error = %e, "Ignoring malformed window geometry");
            Self::default()
        })
    }

    /// Write geometry next to the logs. Failures are logged, not returned.
    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        let written = serde_json::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => debug!(file = %path.display(), "Window geometry saved"),
            Err(e) => warn!(file = %path.display(), error = %e, "Window geometry not saved"),
        }
    }

    pub fn window_pos(&self) -> Option<egui::Pos2> {
        match (self.window_x, self.window_y) {
            (Some(x), Some(y)) => Some(egui::pos2(x, y)),
            _ => None,
        }
    }

    pub fn window_size(&self) -> Option<egui::Vec2> {
        match (self.window_w, self.window_h) {
            (Some(w), Some(h)) => Some(egui::vec2(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "currency-converter-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_then_load_keeps_geometry() {
        let dir = scratch_dir("roundtrip");
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(420.0),
            window_h: Some(640.0),
        };
        settings.save(&dir);
        let loaded = Settings::load(&dir);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.window_pos(), Some(egui::pos2(10.0, 20.0)));
        assert_eq!(loaded.window_size(), Some(egui::vec2(420.0, 640.0)));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unreadable_file_gives_defaults() {
        let dir = scratch_dir("unreadable");
        // A directory where the file should be: read fails with something other than NotFound
        std::fs::create_dir_all(dir.join(SETTINGS_FILE)).unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn saving_into_missing_dir_is_harmless() {
        let dir = scratch_dir("nodir").join("does-not-exist");
        let settings = Settings {
            window_x: Some(1.0),
            ..Settings::default()
        };
        settings.save(&dir);
        assert!(!dir.join(SETTINGS_FILE).exists());
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn partial_geometry_is_ignored() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join(SETTINGS_FILE), r#"{"window_x": 5.0}"#).unwrap();
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_x, Some(5.0));
        assert_eq!(loaded.window_pos(), None);
        assert_eq!(loaded.window_size(), None);
        std::fs::remove_dir_all(&dir).ok();
    }
}
