//! Theme tokens for the Cascade explorer
//!
//! A dark surface with blue selection accents, echoing the badge and
//! highlight colors of a catalog browser.
//!
//! # Color Palette
//! - **Background**: Deep charcoal (dialog surface)
//! - **Accent**: Sky blue (focus borders, selected rows, type badges)
//! - **Highlight**: Navy (selected row background)
//! - **Action**: Strong blue (the Sample Data button)
//! - **Warning**: Amber (status warnings)
//! - **Muted**: Slate (headers, placeholders, secondary text)

use ratatui::style::{Color, Modifier, Style};

use crate::app::StatusLevel;

/// Explorer theme
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal background (dialog surface)
    pub background: Color,
    /// Sky blue accent (focus, selection text, badges)
    pub accent: Color,
    /// Navy background behind the selected row
    pub highlight: Color,
    /// Button fill for the inert action
    pub action: Color,
    /// Amber (warnings)
    pub warning: Color,
    /// Red (errors)
    pub error: Color,
    /// Slate (muted text, placeholders)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catalog_blue()
    }
}

impl Theme {
    pub fn catalog_blue() -> Self {
        Self {
            background: Color::Rgb(20, 22, 28),
            accent: Color::Rgb(125, 180, 255),
            highlight: Color::Rgb(28, 45, 84),
            action: Color::Rgb(37, 99, 235),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
            muted: Color::Rgb(120, 130, 150),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Pane border: accent when focused, muted otherwise.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn title(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    /// Row style for list panes. The selected row is tinted; the cursor row is
    /// reversed only while its pane has focus.
    pub fn list_row(&self, selected: bool, cursor: bool, focused: bool) -> Style {
        let base = if selected {
            Style::default().fg(self.accent).bg(self.highlight)
        } else {
            Style::default().fg(self.text_primary)
        };
        if cursor && focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::ITALIC)
    }

    /// Column type badge.
    pub fn badge(&self) -> Style {
        Style::default().fg(self.accent).bg(self.highlight)
    }

    pub fn button(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.action)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status(&self, level: StatusLevel) -> Style {
        match level {
            StatusLevel::Info => Style::default().fg(self.accent),
            StatusLevel::Warning => Style::default().fg(self.warning),
            StatusLevel::Error => Style::default().fg(self.error),
        }
    }
}
