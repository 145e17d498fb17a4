//! Colored status labels for terminal output.

use std::{
    fmt::{self, Display},
    io,
};

/// When to color status labels.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    /// Color when the target is a terminal.
    #[default]
    Automatic,
    Always,
    Never,
}

impl ColorSetting {
    /// Decide for a concrete target.
    pub fn resolve(self, target: &impl SupportsColor) -> bool {
        match self {
            ColorSetting::Automatic => target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

impl From<bool> for ColorSetting {
    fn from(color: bool) -> Self {
        match color {
            true => ColorSetting::Always,
            false => ColorSetting::Never,
        }
    }
}

pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl<T: io::IsTerminal> SupportsColor for T {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}

/// A status word of the plain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Ok,
    Failed,
    NotFound,
}

impl StatusLabel {
    pub fn text(self) -> &'static str {
        match self {
            StatusLabel::Ok => "ok",
            StatusLabel::Failed => "FAILED",
            StatusLabel::NotFound => "failed to find test",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            StatusLabel::Ok => "\x1b[32m",
            StatusLabel::Failed => "\x1b[31m",
            StatusLabel::NotFound => "\x1b[33m",
        }
    }

    /// Render the label, wrapped in its color when `color` is set.
    pub fn paint(self, color: bool) -> Painted {
        Painted { label: self, color }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Painted {
    label: StatusLabel,
    color: bool,
}

impl Display for Painted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            true => write!(f, "{}{}\x1b[0m", self.label.ansi(), self.label.text()),
            false => f.write_str(self.label.text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Terminal(bool);

    impl SupportsColor for Terminal {
        fn supports_color(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn automatic_follows_the_target() {
        assert!(ColorSetting::Automatic.resolve(&Terminal(true)));
        assert!(!ColorSetting::Automatic.resolve(&Terminal(false)));
        assert!(ColorSetting::Always.resolve(&Terminal(false)));
        assert!(!ColorSetting::from(false).resolve(&Terminal(true)));
    }

    #[test]
    fn painted_labels() {
        assert_eq!(StatusLabel::Failed.paint(false).to_string(), "FAILED");
        assert_eq!(StatusLabel::Ok.paint(true).to_string(), "\x1b[32mok\x1b[0m");
        assert_eq!(
            StatusLabel::NotFound.paint(true).to_string(),
            "\x1b[33mfailed to find test\x1b[0m"
        );
    }
}
