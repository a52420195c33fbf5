//! Colour themes.
//!
//! Every preset shares the same gray-900 panels and differs only in its accent,
//! taken from the composer's particle palette.

use eframe::egui::{self, Color32, Stroke, Visuals, style::WidgetVisuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Teal,
    Amber,
    Blue,
    Cyan,
}

impl ThemePreset {
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Teal,
            ThemePreset::Amber,
            ThemePreset::Blue,
            ThemePreset::Cyan,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Teal => "Teal",
            ThemePreset::Amber => "Amber",
            ThemePreset::Blue => "Blue",
            ThemePreset::Cyan => "Cyan",
        }
    }

    /// Parse a preset from its config key, ignoring case
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(key))
    }

    /// Accent colour of the preset
    pub fn accent(&self) -> Color32 {
        match self {
            ThemePreset::Teal => Color32::from_rgb(20, 184, 166), // Teal-500
            ThemePreset::Amber => Color32::from_rgb(250, 204, 21), // Yellow-400
            ThemePreset::Blue => Color32::from_rgb(29, 78, 216),  // Blue-700
            ThemePreset::Cyan => Color32::from_rgb(6, 182, 212),  // Cyan-500
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::accented(self.accent())
    }
}

/// Fill used for a selected platform button
pub fn platform_color(platform: &str) -> Color32 {
    match platform {
        "instagram" => Color32::from_rgb(219, 39, 119),       // Pink-600
        "twitter" => Color32::from_rgb(14, 165, 233),         // Sky-500
        "linkedin" => Color32::from_rgb(37, 99, 235),         // Blue-600
        "facebook" => Color32::from_rgb(29, 78, 216),         // Blue-700
        "pinterest" => Color32::from_rgb(220, 38, 38),        // Red-600
        "youtube" => Color32::from_rgb(185, 28, 28),          // Red-700
        "google-business" => Color32::from_rgb(59, 130, 246), // Blue-500
        "ad" => Color32::from_rgb(249, 115, 22),              // Orange-500
        _ => Color32::from_rgb(31, 41, 55),                   // Gray-800
    }
}

/// Scale a colour towards black
fn darken(color: Color32, factor: f32) -> Color32 {
    let scale = |c: u8| (c as f32 * factor).round() as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

/// Readable text colour on top of `fill`
fn text_on(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 160.0 {
        Color32::from_rgb(17, 24, 39)
    } else {
        Color32::WHITE
    }
}

/// Resolved colours for one preset
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    pub accent: Color32,
    pub accent_muted: Color32,
    /// Text drawn on an accent fill
    pub on_accent: Color32,

    pub success: Color32,
    pub error: Color32,
    pub border: Color32,
}

impl Theme {
    /// Gray-900 base with the given accent
    pub fn accented(accent: Color32) -> Self {
        let bg_light = Color32::from_rgb(55, 65, 81); // Gray-700
        Self {
            bg_darkest: Color32::from_rgb(3, 7, 18),
            bg_dark: Color32::from_rgb(17, 24, 39),
            bg_medium: Color32::from_rgb(31, 41, 55),
            bg_light,

            text_primary: Color32::from_rgb(243, 244, 246),
            text_secondary: Color32::from_rgb(209, 213, 219),
            text_muted: Color32::from_rgb(156, 163, 175),

            accent,
            accent_muted: darken(accent, 0.7),
            on_accent: text_on(accent),

            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(248, 113, 113),
            border: bg_light,
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        fn paint(widget: &mut WidgetVisuals, fill: Color32, stroke: Color32, text: Color32) {
            widget.bg_fill = fill;
            widget.weak_bg_fill = fill;
            widget.bg_stroke = Stroke::new(1.0, stroke);
            widget.fg_stroke = Stroke::new(1.0, text);
        }

        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.bg_dark;
        visuals.window_fill = self.bg_medium;
        visuals.window_stroke = Stroke::new(1.0, self.border);
        // Text edit background
        visuals.extreme_bg_color = self.bg_darkest;

        let widgets = &mut visuals.widgets;
        paint(&mut widgets.noninteractive, self.bg_medium, self.border, self.text_secondary);
        paint(&mut widgets.inactive, self.bg_light, self.border, self.text_secondary);
        paint(&mut widgets.hovered, self.bg_light, self.accent, self.text_primary);
        paint(&mut widgets.active, self.accent_muted, self.accent, self.text_primary);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.slider_trailing_fill = true;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_keys_round_trip() {
        for preset in ThemePreset::all() {
            let key = serde_json::to_value(preset).unwrap();
            let key = key.as_str().unwrap();
            assert_eq!(ThemePreset::from_key(key), Some(*preset));
        }
        assert_eq!(ThemePreset::from_key("AMBER"), Some(ThemePreset::Amber));
        assert_eq!(ThemePreset::from_key("purple"), None);
    }

    #[test]
    fn test_presets_share_base_and_differ_in_accent() {
        let teal = ThemePreset::Teal.theme();
        let blue = ThemePreset::Blue.theme();

        assert_eq!(teal.bg_dark, blue.bg_dark);
        assert_ne!(teal.accent, blue.accent);
        assert_eq!(teal.accent_muted, Color32::from_rgb(14, 129, 116));
    }

    #[test]
    fn test_text_on_accent_stays_readable() {
        assert_eq!(ThemePreset::Amber.theme().on_accent, Color32::from_rgb(17, 24, 39));
        assert_eq!(ThemePreset::Blue.theme().on_accent, Color32::WHITE);
        assert_eq!(ThemePreset::Teal.theme().on_accent, Color32::WHITE);
    }

    #[test]
    fn test_every_platform_has_its_own_color() {
        let fallback = platform_color("myspace");
        for preset in crate::selection::PLATFORMS {
            assert_ne!(platform_color(preset.id), fallback, "{}", preset.id);
        }
    }
}
