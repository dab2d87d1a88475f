//! Andes theme system for Vitrine.
//!
//! The palette follows the portfolio's visual identity: a deep navy night
//! over the cordillera for the dark variant, and a pale daylight variant.
//! Runtime switching rebuilds the palette in place.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeVariant {
    #[default]
    AndesNight,
    AndesDay,
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub muted: Color,
    pub warning: Color,
}

/// UI element types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Text,
    Title,
    Border,
    Highlight,
    Accent,
    Background,
    Inactive,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::AndesNight => ColorPalette {
                background: Color::Rgb(0, 31, 63),     // #001f3f
                foreground: Color::Rgb(234, 234, 240), // #eaeaf0
                accent: Color::Rgb(168, 216, 234),     // #a8d8ea
                border: Color::Rgb(74, 78, 105),       // #4a4e69
                selection: Color::Rgb(22, 52, 84),     // #163454
                muted: Color::Rgb(138, 145, 170),      // #8a91aa
                warning: Color::Rgb(242, 204, 143),    // #f2cc8f
            },
            ThemeVariant::AndesDay => ColorPalette {
                background: Color::Rgb(244, 241, 238), // #f4f1ee
                foreground: Color::Rgb(34, 34, 59),    // #22223b
                accent: Color::Rgb(58, 110, 165),      // #3a6ea5
                border: Color::Rgb(154, 140, 152),     // #9a8c98
                selection: Color::Rgb(226, 220, 214),  // #e2dcd6
                muted: Color::Rgb(120, 113, 125),      // #78717d
                warning: Color::Rgb(188, 108, 37),     // #bc6c25
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    pub fn toggle(&mut self) {
        let variant = match self.variant {
            ThemeVariant::AndesNight => ThemeVariant::AndesDay,
            ThemeVariant::AndesDay => ThemeVariant::AndesNight,
        };
        *self = Self::new(variant);
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text | Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Accent => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Inactive => Style::default()
                .fg(self.colors.muted)
                .bg(self.colors.background),

            Element::Warning => Style::default()
                .fg(self.colors.warning)
                .bg(self.colors.background),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    pub fn border_style(&self) -> Style {
        self.ratatui_style(Element::Border)
    }

    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    pub fn accent_style(&self) -> Style {
        self.ratatui_style(Element::Accent)
    }

    pub fn inactive_style(&self) -> Style {
        self.ratatui_style(Element::Inactive)
    }

    pub fn warning_style(&self) -> Style {
        self.ratatui_style(Element::Warning)
    }
}
