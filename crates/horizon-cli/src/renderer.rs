//! Markdown output for the terminal.
//!
//! Rich mode renders through termimad and tints countdown lines by phase:
//! overdue and failed work in red, active work in green. Plain mode
//! (`--no-color`) prints the markdown untouched, which is what the CLI
//! tests match against.

use termimad::{crossterm::style::Color, MadSkin};

/// How a rendered line should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Heading,
    Alert,
    Active,
    Normal,
}

fn line_tone(line: &str) -> Tone {
    if line.starts_with('#') {
        Tone::Heading
    } else if line.contains("OVERDUE") || line.contains("✗ Failed") || line.starts_with("Error:") {
        Tone::Alert
    } else if line.contains("ACTIVE") || line.contains("➤ In Progress") {
        Tone::Active
    } else {
        Tone::Normal
    }
}

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    alert_skin: MadSkin,
    active_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut alert_skin = skin.clone();
        alert_skin.paragraph.set_fg(Color::Red);

        let mut active_skin = skin.clone();
        active_skin.paragraph.set_fg(Color::Green);

        Self {
            rich_enabled,
            skin,
            alert_skin,
            active_skin,
        }
    }

    /// Prints markdown, styled unless colors are disabled.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        for line in markdown.lines() {
            let skin = match line_tone(line) {
                // Headings keep their hashes so ids stay easy to spot
                Tone::Heading => {
                    println!("\x1b[36m{line}\x1b[0m");
                    continue;
                }
                Tone::Alert => &self.alert_skin,
                Tone::Active => &self.active_skin,
                Tone::Normal => &self.skin,
            };
            skin.print_inline(line);
            println!();
        }
    }

    pub fn show(&self, value: &impl std::fmt::Display) {
        self.render(&value.to_string());
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
