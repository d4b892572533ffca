//! Terminal rendering of markdown output.
//!
//! Rich mode styles the markdown with termimad; plain mode prints it as is.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled for a terminal or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    ///
    /// Header lines keep their `#` marks and are colored directly; tables
    /// and everything else go through the skin line by line.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else if let Some(status) = Self::status_color(line) {
                println!("{status}{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    fn status_color(line: &str) -> Option<&'static str> {
        if line.starts_with("Success:") {
            Some("\x1b[32m")
        } else if line.starts_with("Warning:") {
            Some("\x1b[33m")
        } else if line.starts_with("Error:") {
            Some("\x1b[31m")
        } else {
            None
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
