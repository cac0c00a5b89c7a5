//! Light/dark selection of the semantic color table.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use crate::keys::token_keys;
use crate::semantic::{SemanticColors, SEMANTIC_COLORS, SEMANTIC_COLORS_DARK};

token_keys! {
    /// The user's preferred color mode.
    ///
    /// Serializes as `"light"` or `"dark"`, so it can be stored directly in a
    /// configuration file.
    #[derive(Default)]
    pub enum ColorMode("color mode") {
        #[default]
        Light => "light",
        Dark => "dark",
    }
}

impl ColorMode {
    /// The semantic color table for this mode.
    ///
    /// ```rust
    /// use svo_tokens::{ColorMode, SEMANTIC_COLORS_DARK};
    ///
    /// assert_eq!(ColorMode::Dark.semantic_colors(), &SEMANTIC_COLORS_DARK);
    /// ```
    pub fn semantic_colors(self) -> &'static SemanticColors {
        match self {
            ColorMode::Light => &SEMANTIC_COLORS,
            ColorMode::Dark => &SEMANTIC_COLORS_DARK,
        }
    }
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used to determine whether the user prefers light or dark colors.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    let mut guard = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Returns the current color mode, by default as reported by the OS.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

/// The semantic color table for the current color mode.
pub fn semantic_colors() -> &'static SemanticColors {
    detect_color_mode().semantic_colors()
}

fn os_color_mode_detector() -> ColorMode {
    let mode = if matches!(detect_os_theme(), OsThemeMode::Dark) {
        ColorMode::Dark
    } else {
        ColorMode::Light
    };
    tracing::debug!(%mode, "detected OS color mode");
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_semantic_colors_uses_detector() {
        set_color_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);
        assert_eq!(semantic_colors(), &SEMANTIC_COLORS_DARK);

        set_color_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
        assert_eq!(semantic_colors(), &SEMANTIC_COLORS);
    }

    #[test]
    fn test_color_mode_default_is_light() {
        assert_eq!(ColorMode::default(), ColorMode::Light);
    }

    #[test]
    fn test_color_mode_from_config_value() {
        let mode: ColorMode = serde_json::from_str(r#""dark""#).unwrap();
        assert_eq!(mode, ColorMode::Dark);
        assert!(serde_json::from_str::<ColorMode>(r#""sepia""#).is_err());
        assert_eq!(serde_json::to_string(&ColorMode::Light).unwrap(), r#""light""#);
    }
}
