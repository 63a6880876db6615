//! Terminal colors and their ANSI codes

use std::str::FromStr;

use crate::config::{Config, ConfigValue};

/// The sixteen ANSI colors plus the terminal default
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// ANSI SGR foreground code
    pub fn to_ansi_fg_code(self) -> u8 {
        match self {
            Color::Reset => 39,
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
        }
    }

    /// ANSI SGR background code
    pub fn to_ansi_bg_code(self) -> u8 {
        // Background codes sit ten above their foreground counterparts
        self.to_ansi_fg_code() + 10
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "default" | "reset" => Color::Reset,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "brightblack" | "gray" | "grey" => Color::BrightBlack,
            "brightred" => Color::BrightRed,
            "brightgreen" => Color::BrightGreen,
            "brightyellow" => Color::BrightYellow,
            "brightblue" => Color::BrightBlue,
            "brightmagenta" => Color::BrightMagenta,
            "brightcyan" => Color::BrightCyan,
            "brightwhite" => Color::BrightWhite,
            _ => return Err(format!("unknown color: {}", s)),
        };
        Ok(color)
    }
}

/// Colors used when drawing the editor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub message_fg: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            message_fg: Color::Yellow,
            selection_fg: Color::Black,
            selection_bg: Color::Yellow,
        }
    }
}

impl Palette {
    /// Read `message_fg`, `selection_fg` and `selection_bg` from the
    /// settings. Missing or unknown names keep the default.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let lookup = |key: &str, fallback: Color| match config.settings.get(key) {
            Some(ConfigValue::String(name)) => name.parse::<Color>().unwrap_or_else(|err| {
                tracing::warn!(setting = key, %err, "keeping default color");
                fallback
            }),
            _ => fallback,
        };
        Self {
            message_fg: lookup("message_fg", defaults.message_fg),
            selection_fg: lookup("selection_fg", defaults.selection_fg),
            selection_bg: lookup("selection_bg", defaults.selection_bg),
        }
    }
}
