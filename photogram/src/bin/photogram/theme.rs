//! Colours and glyphs shared by help text and command output.

use clap::builder::styling::{AnsiColor, Style, Styles};
use colored::Color;

/// Roles a piece of terminal text can play. Each maps to one ANSI colour so help
/// output (clap) and command output (colored) stay in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Heading,
    Command,
    Muted,
    Good,
    Bad,
    Caution,
    Note,
    Label,
}

impl Tone {
    fn pair(self) -> (AnsiColor, Color) {
        match self {
            Tone::Accent => (AnsiColor::BrightMagenta, Color::BrightMagenta),
            Tone::Heading => (AnsiColor::Yellow, Color::Yellow),
            Tone::Command => (AnsiColor::Cyan, Color::Cyan),
            Tone::Muted => (AnsiColor::BrightBlack, Color::BrightBlack),
            Tone::Good => (AnsiColor::Green, Color::Green),
            Tone::Bad => (AnsiColor::Red, Color::Red),
            Tone::Caution => (AnsiColor::BrightYellow, Color::BrightYellow),
            Tone::Note => (AnsiColor::Blue, Color::Blue),
            Tone::Label => (AnsiColor::Magenta, Color::Magenta),
        }
    }

    pub fn color(self) -> Color {
        self.pair().1
    }

    pub fn style(self) -> Style {
        Style::new().fg_color(Some(self.pair().0.into()))
    }
}

/// Help styling for the whole command tree.
pub fn help_styles() -> Styles {
    Styles::styled()
        .usage(Tone::Accent.style().bold())
        .header(Tone::Heading.style().bold())
        .literal(Tone::Command.style())
        .placeholder(Tone::Muted.style())
        .valid(Tone::Good.style())
        .invalid(Tone::Caution.style())
        .error(Tone::Bad.style().bold())
}

pub mod glyph {
    pub const OK: &str = "✔";
    pub const FAIL: &str = "✘";
    pub const WARN: &str = "!";
    pub const NOTE: &str = "›";
    pub const PROMPT: &str = "$";
    pub const ITEM: &str = "·";
}
