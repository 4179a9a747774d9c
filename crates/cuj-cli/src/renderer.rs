//! Terminal rendering module for rich markdown output
//!
//! Step cards, previews and status lines are all Markdown. With colors
//! enabled they go through termimad; otherwise the Markdown is written as is.

use std::io::{self, Write};

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to `out`
    pub fn render(&self, out: &mut impl Write, markdown: &str) -> io::Result<()> {
        if self.rich_enabled {
            write!(out, "{}", self.skin.term_text(markdown))
        } else {
            out.write_all(markdown.as_bytes())
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
