use crate::modal::DialogType;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Dark => f.write_str("dark"),
            ThemeName::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            other => Err(anyhow::anyhow!("unknown theme '{}', expected dark or light", other)),
        }
    }
}

/// Dialog theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary colors
    pub primary: Color,
    pub danger: Color,

    /// Text colors
    pub text: Color,
    pub text_dim: Color,
    pub text_bright: Color,

    /// Background colors
    pub background: Color,
    pub surface: Color,
    pub backdrop: Color,

    /// Border colors
    pub border: Color,

    /// Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub confirm: Color,

    /// Special colors
    pub placeholder: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(59, 130, 246),    // Blue-500
            danger: Color::Rgb(220, 38, 38),      // Red-600

            text: Color::Rgb(248, 250, 252),      // Slate-50
            text_dim: Color::Rgb(148, 163, 184),  // Slate-400
            text_bright: Color::Rgb(255, 255, 255),

            background: Color::Rgb(15, 23, 42),   // Slate-900
            surface: Color::Rgb(30, 41, 59),      // Slate-800
            backdrop: Color::Rgb(2, 6, 23),       // Slate-950

            border: Color::Rgb(71, 85, 105),      // Slate-600

            success: Color::Rgb(34, 197, 94),     // Green-500
            warning: Color::Rgb(245, 158, 11),    // Amber-500
            error: Color::Rgb(239, 68, 68),       // Red-500
            info: Color::Rgb(59, 130, 246),       // Blue-500
            confirm: Color::Rgb(139, 92, 246),    // Violet-500

            placeholder: Color::Rgb(100, 116, 139), // Slate-500
            selection: Color::Rgb(30, 58, 138),   // Blue-900
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(37, 99, 235),     // Blue-600
            danger: Color::Rgb(220, 38, 38),      // Red-600

            text: Color::Rgb(15, 23, 42),         // Slate-900
            text_dim: Color::Rgb(71, 85, 105),    // Slate-600
            text_bright: Color::Rgb(255, 255, 255),

            background: Color::Rgb(248, 250, 252), // Slate-50
            surface: Color::Rgb(255, 255, 255),
            backdrop: Color::Rgb(203, 213, 225),  // Slate-300

            border: Color::Rgb(148, 163, 184),    // Slate-400

            success: Color::Rgb(22, 163, 74),     // Green-600
            warning: Color::Rgb(217, 119, 6),     // Amber-600
            error: Color::Rgb(220, 38, 38),       // Red-600
            info: Color::Rgb(37, 99, 235),        // Blue-600
            confirm: Color::Rgb(124, 58, 237),    // Violet-600

            placeholder: Color::Rgb(148, 163, 184),
            selection: Color::Rgb(191, 219, 254), // Blue-200
        }
    }

    /// Accent color of a dialog type (icon and title)
    pub fn accent(&self, dialog_type: DialogType) -> Color {
        match dialog_type {
            DialogType::Info => self.info,
            DialogType::Success => self.success,
            DialogType::Error => self.error,
            DialogType::Warning => self.warning,
            DialogType::Confirm => self.confirm,
        }
    }

    /// Base style for the screen behind dialogs
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for the dimmed area behind dialogs
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .bg(self.backdrop)
            .fg(self.text_dim)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the dialog pane
    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn border_style(&self, dialog_type: DialogType) -> Style {
        Style::default().fg(self.accent(dialog_type)).bg(self.surface)
    }

    pub fn title_style(&self, dialog_type: DialogType) -> Style {
        Style::default()
            .fg(self.accent(dialog_type))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the primary action button
    pub fn primary_button_style(&self, focused: bool, destructive: bool) -> Style {
        let bg = if destructive { self.danger } else { self.primary };
        let style = Style::default().bg(bg).fg(self.text_bright);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Style for the secondary (cancel) button
    pub fn secondary_button_style(&self, focused: bool) -> Style {
        let style = Style::default().bg(self.border).fg(self.text_bright);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Style for the prompt text field
    pub fn input_style(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.text).bg(self.background);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for a fully selected field value
    pub fn selection_style(&self) -> Style {
        Style::default().bg(self.selection).fg(self.text)
    }

    /// Style for placeholder text
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.placeholder)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for key hints under the buttons
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_button_uses_danger() {
        let theme = Theme::dark();
        assert_eq!(theme.primary_button_style(false, true).bg, Some(theme.danger));
        assert_eq!(theme.primary_button_style(false, false).bg, Some(theme.primary));
    }

    #[test]
    fn test_theme_name_parsing() {
        assert_eq!("Light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert!("solarized".parse::<ThemeName>().is_err());
    }
}
