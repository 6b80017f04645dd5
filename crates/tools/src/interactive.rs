//! Interactive edit loop
//!
//! Line-oriented counterpart of the two bound input fields: the session owns
//! the live text and Morse strings, and every entered line replaces the
//! active surface and recomputes the other through the codec.

use anyhow::Result;
use morsewire_codec::MorseCodec;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::clipboard;
use crate::config::{AppConfig, ColorMode, Direction};

/// Outcome of feeding one line to the session
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Surfaces updated, keep going
    Continue,
    /// Command handled, message for the user
    Notice(String),
    /// Leave the loop
    Quit,
}

/// One interactive conversion session.
pub struct Session {
    codec: MorseCodec,
    direction: Direction,
    color_mode: ColorMode,
    text: String,
    morse: String,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            codec: MorseCodec::new(),
            direction: config.start_direction,
            color_mode: config.color_mode,
            text: String::new(),
            morse: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn morse(&self) -> &str {
        &self.morse
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Feed one input line: a `:` prefix runs a command, anything else edits
    /// the active surface.
    pub fn apply_line(&mut self, line: &str) -> Step {
        if let Some(cmd) = line.strip_prefix(':') {
            return self.run_command(cmd.trim());
        }
        self.edit(line);
        Step::Continue
    }

    /// Replace the active surface and recompute the derived one.
    fn edit(&mut self, input: &str) {
        match self.direction {
            Direction::Text => {
                self.text = input.to_string();
                self.morse = self.codec.encode(input);
            }
            Direction::Morse => {
                self.morse = input.to_string();
                self.text = self.codec.decode(input);
            }
        }
        debug!(direction = ?self.direction, "surfaces recomputed");
    }

    /// The surface derived from the last edit.
    fn derived(&self) -> &str {
        match self.direction {
            Direction::Text => &self.morse,
            Direction::Morse => &self.text,
        }
    }

    fn run_command(&mut self, cmd: &str) -> Step {
        match cmd {
            "quit" | "q" => Step::Quit,
            "swap" => {
                self.direction = self.direction.toggled();
                Step::Notice(format!("editing {}", self.active_label()))
            }
            "clear" => {
                self.text.clear();
                self.morse.clear();
                Step::Notice("cleared".to_string())
            }
            "theme" => {
                self.color_mode = self.color_mode.cycled();
                Step::Notice(format!("theme: {:?}", self.color_mode).to_lowercase())
            }
            "copy" => {
                let mut copied = false;
                clipboard::copy_and_notify(self.derived(), &mut |ok| copied = ok);
                if copied {
                    Step::Notice("copied to clipboard".to_string())
                } else {
                    Step::Notice("clipboard copy failed".to_string())
                }
            }
            other => Step::Notice(format!("unknown command :{other}")),
        }
    }

    fn active_label(&self) -> &'static str {
        match self.direction {
            Direction::Text => "text",
            Direction::Morse => "morse",
        }
    }

    fn prompt_style(&self) -> (&'static str, &'static str) {
        match self.color_mode {
            ColorMode::Auto => ("", ""),
            ColorMode::Light => ("\x1b[34m", "\x1b[0m"),
            ColorMode::Dark => ("\x1b[96m", "\x1b[0m"),
        }
    }

    /// Drive the session over the given reader/writer until `:quit` or EOF.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(
            output,
            "morsewire interactive - :swap :copy :clear :theme :quit"
        )?;

        let mut lines = input.lines();
        loop {
            let (style, reset) = self.prompt_style();
            write!(output, "{style}{}> {reset}", self.active_label())?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match self.apply_line(&line) {
                Step::Continue => {
                    writeln!(output, "text : {}", self.text)?;
                    writeln!(output, "morse: {}", self.morse)?;
                }
                Step::Notice(msg) => writeln!(output, "{msg}")?,
                Step::Quit => break,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&AppConfig::default())
    }

    #[test]
    fn editing_text_recomputes_morse() {
        let mut s = session();
        assert_eq!(s.apply_line("SOS"), Step::Continue);
        assert_eq!(s.text(), "SOS");
        assert_eq!(s.morse(), "... --- ...");
    }

    #[test]
    fn editing_morse_recomputes_text() {
        let mut s = session();
        s.apply_line(":swap");
        assert_eq!(s.direction(), Direction::Morse);
        s.apply_line("... --- ...");
        assert_eq!(s.text(), "SOS");
        assert_eq!(s.morse(), "... --- ...");
    }

    #[test]
    fn edits_alternate_without_shared_state() {
        let mut s = session();
        s.apply_line("HI YOU");
        assert_eq!(s.morse(), ".... .. / -.-- --- ..-");
        s.apply_line(":swap");
        s.apply_line(".... ..");
        assert_eq!(s.text(), "HI");
        s.apply_line(":swap");
        s.apply_line("again");
        assert_eq!(s.text(), "again");
        assert_eq!(s.morse(), ".- --. .- .. -.");
    }

    #[test]
    fn clear_empties_both_surfaces() {
        let mut s = session();
        s.apply_line("SOS");
        assert_eq!(s.apply_line(":clear"), Step::Notice("cleared".into()));
        assert_eq!(s.text(), "");
        assert_eq!(s.morse(), "");
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut s = session();
        assert_eq!(s.apply_line(":quit"), Step::Quit);
        assert_eq!(s.apply_line(":q"), Step::Quit);
    }

    #[test]
    fn unknown_commands_report_and_continue() {
        let mut s = session();
        assert_eq!(
            s.apply_line(":bogus"),
            Step::Notice("unknown command :bogus".into())
        );
    }

    #[test]
    fn theme_command_cycles_color_mode() {
        let mut s = session();
        assert_eq!(s.apply_line(":theme"), Step::Notice("theme: light".into()));
        assert_eq!(s.apply_line(":theme"), Step::Notice("theme: dark".into()));
        assert_eq!(s.apply_line(":theme"), Step::Notice("theme: auto".into()));
    }

    #[test]
    fn run_processes_scripted_input() {
        let script = b"SOS\n:quit\n" as &[u8];
        let mut out = Vec::new();
        let mut s = session();
        s.run(script, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("text : SOS"));
        assert!(printed.contains("morse: ... --- ..."));
    }

    #[test]
    fn run_stops_at_eof() {
        let script = b"E\n" as &[u8];
        let mut out = Vec::new();
        let mut s = session();
        s.run(script, &mut out).unwrap();
        assert_eq!(s.morse(), ".");
    }
}
