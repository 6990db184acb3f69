pub mod presets;

use iced::Color;
use serde::{Deserialize, Serialize};

/// Theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: &'static str,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // Window background
    pub bg_surface: Color,  // Country cards
    pub bg_elevated: Color, // Pickers, buttons
    pub bg_hover: Color,    // Hover states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Country names
    pub fg_secondary: Color, // Population figures
    pub fg_muted: Color,     // Labels, summaries
    pub fg_on_accent: Color, // Text on accent colors

    // === Semantic Colors ===
    pub accent: Color,
    pub accent_hover: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // === Borders ===
    pub border: Color,
    pub border_strong: Color,

    pub shadow_color: Color,
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    #[allow(clippy::too_many_arguments)]
    pub fn from_hex(
        name: &'static str,
        bg_base: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        accent_hover: u32,
        success: u32,
        warning: u32,
        danger: u32,
        info: u32,
        border: u32,
        border_strong: u32,
    ) -> Self {
        Self {
            name,
            bg_base: hex_to_color(bg_base),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            accent_hover: hex_to_color(accent_hover),
            success: hex_to_color(success),
            warning: hex_to_color(warning),
            danger: hex_to_color(danger),
            info: hex_to_color(info),
            border: hex_to_color(border),
            border_strong: hex_to_color(border_strong),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        }
    }

    /// Perceived brightness of the base background above the midpoint
    pub fn is_light(&self) -> bool {
        let c = self.bg_base;
        0.299 * c.r + 0.587 * c.g + 0.114 * c.b > 0.5
    }

    /// Badge color for a continent, stable across renders.
    pub fn continent_color(&self, continent: &str) -> Color {
        match continent.to_lowercase().as_str() {
            "asia" => self.danger,
            "africa" => self.warning,
            "europe" => self.info,
            "north america" => self.accent,
            "south america" => self.success,
            _ => self.fg_muted,
        }
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// All available built-in themes
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::Display,
)]
pub enum ThemeChoice {
    #[default]
    Nord,
    Gruvbox,
    Dracula,
    #[strum(to_string = "Oxide Light")]
    OxideLight,
}

impl ThemeChoice {
    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::Nord => presets::nord(),
            Self::Gruvbox => presets::gruvbox(),
            Self::Dracula => presets::dracula(),
            Self::OxideLight => presets::oxide_light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_hex_to_color() {
        let c = hex_to_color(0x00FF_0000);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!(c.g.abs() < f32::EPSILON);
        assert!(c.b.abs() < f32::EPSILON);
    }

    #[test]
    fn test_every_choice_has_matching_name() {
        for choice in ThemeChoice::iter() {
            assert_eq!(choice.to_theme().name, choice.to_string());
        }
    }

    #[test]
    fn test_light_detection() {
        assert!(ThemeChoice::OxideLight.to_theme().is_light());
        assert!(!ThemeChoice::Nord.to_theme().is_light());
    }

    #[test]
    fn test_continent_colors_fold_case() {
        let theme = presets::nord();
        assert_eq!(theme.continent_color("Asia"), theme.continent_color("ASIA"));
        assert_eq!(theme.continent_color("Oceania"), theme.fg_muted);
    }
}
