//! Theme tokens: brand palette and spacing scale.
//!
//! Widgets ask the theme for styles by role; they never hard-code colors.
//! With colors disabled every token resolves to the terminal default and only
//! text modifiers remain.

use crate::config::{THEME_ABSTRACT, THEME_ANSI};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ThemeName =====

/// Named palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    /// Truecolor brand palette.
    #[default]
    Abstract,
    /// Closest 16-color equivalents.
    Ansi,
}

impl ThemeName {
    /// Parse a theme name as used in config files and `--theme`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            THEME_ABSTRACT => Some(ThemeName::Abstract),
            THEME_ANSI => Some(ThemeName::Ansi),
            _ => None,
        }
    }

    /// Name accepted by `--theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Abstract => THEME_ABSTRACT,
            ThemeName::Ansi => THEME_ANSI,
        }
    }
}

// ===== Palette / Spacing =====

/// Brand color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Brand color for primary buttons and accents.
    pub primary: Color,
    /// Secondary brand color.
    pub secondary: Color,
    /// Text on light surfaces.
    pub black: Color,
    /// Text on dark surfaces.
    pub white: Color,
    /// Borders and dividers.
    pub border: Color,
    /// Placeholder text.
    pub placeholder: Color,
    /// Validation errors.
    pub error: Color,
}

impl Palette {
    fn for_theme(name: ThemeName) -> Self {
        match name {
            ThemeName::Abstract => Self {
                primary: Color::Rgb(35, 110, 245),
                secondary: Color::Rgb(222, 226, 255),
                black: Color::Rgb(17, 17, 17),
                white: Color::Rgb(255, 255, 255),
                border: Color::Rgb(204, 204, 204),
                placeholder: Color::Rgb(136, 136, 136),
                error: Color::Rgb(220, 53, 69),
            },
            ThemeName::Ansi => Self {
                primary: Color::Blue,
                secondary: Color::Gray,
                black: Color::Black,
                white: Color::White,
                border: Color::Gray,
                placeholder: Color::DarkGray,
                error: Color::Red,
            },
        }
    }
}

/// Spacing scale in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    /// Horizontal padding of page sections (columns).
    pub inline: u16,
    /// Vertical padding of page sections (rows).
    pub block: u16,
    /// Gap between sibling controls (columns).
    pub gap: u16,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            inline: 2,
            block: 1,
            gap: 1,
        }
    }
}

// ===== Theme =====

/// Read-only styling configuration handed to every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    name: ThemeName,
    palette: Palette,
    spacing: Spacing,
    colors: bool,
}

impl Theme {
    /// Theme `name`, with colors switched off if `color_config` says so.
    pub fn new(name: ThemeName, color_config: ColorConfig) -> Self {
        Self {
            name,
            palette: Palette::for_theme(name),
            spacing: Spacing::default(),
            colors: color_config.colors_enabled(),
        }
    }

    /// Theme name.
    pub fn name(&self) -> ThemeName {
        self.name
    }

    /// Color tokens.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Spacing scale.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Whether styles carry colors.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Foreground-only style.
    pub fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Foreground and background style.
    pub fn fg_bg(&self, fg: Color, bg: Color) -> Style {
        if self.colors {
            Style::default().fg(fg).bg(bg)
        } else {
            Style::default()
        }
    }

    /// Header and footer surface: white on black.
    pub fn inverse_surface(&self) -> Style {
        self.fg_bg(self.palette.white, self.palette.black)
    }

    /// Hero section surface.
    pub fn hero_surface(&self) -> Style {
        self.fg_bg(self.palette.black, self.palette.secondary)
    }

    /// Section and card headings.
    pub fn heading(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Links.
    pub fn link(&self) -> Style {
        self.fg(self.palette.primary)
    }

    /// Placeholder text in empty fields.
    pub fn placeholder(&self) -> Style {
        self.fg(self.palette.placeholder)
    }

    /// Error tooltip body.
    pub fn tooltip(&self) -> Style {
        let style = self.fg_bg(Color::White, self.palette.error);
        if self.colors {
            style
        } else {
            style.add_modifier(Modifier::REVERSED)
        }
    }

    /// Text cursor cell inside a focused field.
    pub fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Focused or hovered control.
    pub fn focused(&self) -> Style {
        let style = self.fg_bg(self.palette.black, self.palette.white);
        if self.colors {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::default(), ColorConfig::enabled())
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(env)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    #[test]
    fn theme_names_round_trip() {
        for name in [ThemeName::Abstract, ThemeName::Ansi] {
            assert_eq!(ThemeName::from_name(name.as_str()), Some(name));
        }
        assert_eq!(ThemeName::from_name("solarized"), None);
    }

    #[test]
    fn disabled_colors_strip_fg_and_bg() {
        let theme = Theme::new(ThemeName::Abstract, ColorConfig::from_env_and_args(true));
        let style = theme.inverse_surface();
        assert!(style.fg.is_none());
        assert!(style.bg.is_none());
    }

    #[test]
    fn disabled_colors_keep_tooltip_visible_with_reverse_video() {
        let theme = Theme::new(ThemeName::Ansi, ColorConfig::from_env_and_args(true));
        assert!(theme.tooltip().add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn ansi_palette_uses_named_colors() {
        let theme = Theme::new(ThemeName::Ansi, ColorConfig::enabled());
        assert_eq!(theme.palette().error, Color::Red);
        assert_eq!(theme.link().fg, Some(Color::Blue));
    }
}
