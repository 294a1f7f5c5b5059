//! Colour themes.
//!
//! `DARK` is the game palette; `LIGHT` is the administrative palette.

use crate::geometry::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
}

/// Background, hover background and text colour for one button style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub background: Rgb,
    pub hover: Rgb,
    pub text: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub card: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub border: Rgb,
    pub on_accent: Rgb,
}

impl Theme {
    pub const DARK: Theme = Theme {
        primary: Rgb::new(46, 125, 160),
        secondary: Rgb::new(30, 81, 105),
        accent: Rgb::new(255, 107, 107),
        success: Rgb::new(76, 175, 80),
        warning: Rgb::new(255, 193, 7),
        danger: Rgb::new(244, 67, 54),
        background: Rgb::new(18, 18, 18),
        surface: Rgb::new(28, 28, 30),
        card: Rgb::new(44, 44, 46),
        text_primary: Rgb::new(255, 255, 255),
        text_secondary: Rgb::new(170, 170, 170),
        border: Rgb::new(60, 60, 67),
        on_accent: Rgb::new(255, 255, 255),
    };

    pub const LIGHT: Theme = Theme {
        primary: Rgb::new(33, 150, 243),
        secondary: Rgb::new(173, 216, 230),
        accent: Rgb::new(255, 152, 0),
        success: Rgb::new(46, 125, 50),
        warning: Rgb::new(255, 152, 0),
        danger: Rgb::new(211, 47, 47),
        background: Rgb::new(250, 250, 250),
        surface: Rgb::new(255, 255, 255),
        card: Rgb::new(245, 245, 245),
        text_primary: Rgb::new(33, 33, 33),
        text_secondary: Rgb::new(128, 128, 128),
        border: Rgb::new(189, 189, 189),
        on_accent: Rgb::new(255, 255, 255),
    };

    pub fn button(&self, style: ButtonStyle) -> ButtonColors {
        let (background, hover) = match style {
            ButtonStyle::Primary => (self.primary, self.primary.lerp(self.on_accent, 0.15)),
            ButtonStyle::Secondary => (self.surface, self.surface.lerp(self.text_secondary, 0.15)),
            ButtonStyle::Success => (self.success, self.success.lerp(self.on_accent, 0.15)),
            ButtonStyle::Danger => (self.danger, self.danger.lerp(self.on_accent, 0.15)),
            ButtonStyle::Warning => (self.warning, self.warning.lerp(self.on_accent, 0.15)),
        };
        let text = match style {
            ButtonStyle::Secondary => self.text_primary,
            _ => self.on_accent,
        };
        ButtonColors {
            background,
            hover,
            text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}
