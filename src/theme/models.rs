//! Color modes, semantic roles and the palette table

use std::fmt::{self, Display};
use std::str::FromStr;

use enum_iterator::Sequence;
use log::*;
use ratatui::style::Color;

use super::parser::{parse_color, with_opacity};

/// Error raised when the theme is given an unsupported mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Mode must be 'light' or 'dark'. Your mode: {0}")]
    InvalidArgument(String),
}

/// Selects which of the two palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Sequence)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// The palette bound to this mode.
    pub fn palette(&self) -> &'static Palette {
        match self {
            ColorMode::Light => &Palette::LIGHT,
            ColorMode::Dark => &Palette::DARK,
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(ThemeError::InvalidArgument(other.to_string())),
        }
    }
}

/// Semantic color roles used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Role {
    Primary,
    Background,
    Text,
    BubbleText,
    InputIcon,
    CodeTheme,
    Container,
}

/// Fixed mapping from role to value for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub background: &'static str,
    pub bubble_text: &'static str,
    pub text: &'static str,
    pub input_icon: &'static str,
    pub code_theme: &'static str,
    pub container: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: "#CED4DA",
        background: "#F0F8FF",
        bubble_text: "#363433",
        text: "#363433",
        input_icon: "#CED4DA",
        code_theme: "paraiso-light",
        container: "#CED4DA",
    };

    pub const DARK: Palette = Palette {
        primary: "#A7AFB6",
        background: "#16161D",
        bubble_text: "#16161D",
        text: "#d3d3d3",
        input_icon: "#A7AFB6",
        code_theme: "atom-one-dark",
        container: "#242930",
    };

    pub fn get(&self, role: Role) -> &'static str {
        match role {
            Role::Primary => self.primary,
            Role::Background => self.background,
            Role::Text => self.text,
            Role::BubbleText => self.bubble_text,
            Role::InputIcon => self.input_icon,
            Role::CodeTheme => self.code_theme,
            Role::Container => self.container,
        }
    }
}

/// Theme provider: the active color mode and lookups into its palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    mode: ColorMode,
}

impl Theme {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Replaces the active mode.
    ///
    /// Anything other than `light` or `dark` is rejected and the current mode
    /// is kept.
    pub fn set_mode(&mut self, mode: &str) -> Result<(), ThemeError> {
        self.mode = mode.parse()?;
        debug!("Color mode set to {}", self.mode);
        Ok(())
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }

    /// Raw palette value for `role` under the current mode.
    pub fn get(&self, role: Role) -> &'static str {
        self.palette().get(role)
    }

    /// Palette value for `role` as a terminal color.
    ///
    /// `Role::CodeTheme` names a highlighting theme and maps to `Color::Reset`.
    pub fn color(&self, role: Role) -> Color {
        let value = self.get(role);
        match parse_color(value) {
            Ok(color) => color,
            Err(e) => {
                if role != Role::CodeTheme {
                    warn!("Palette value for {:?} is not a color: {}", role, e);
                }
                Color::Reset
            }
        }
    }

    /// `role` drawn at `alpha` opacity over the background.
    pub fn faded(&self, role: Role, alpha: f32) -> Color {
        with_opacity(alpha, self.color(role), self.color(Role::Background))
    }
}
