//! Interactive calculator session.
//!
//! A [`Session`] owns the [`Engine`], the history panel state and the user
//! [`Settings`]. It turns lines of input into key presses or commands and
//! renders the screen after each one.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use calc_core::{Engine, HistoryEntry};
use tracing::{debug, info};

use crate::config::Settings;
use crate::keymap::{self, Action};
use crate::logging;

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Redraw the screen.
    Render,
    /// Print a one-line message; the screen is unchanged.
    Notice(String),
    /// End the session.
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    history_open: bool,
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: Engine::new(),
            history_open: settings.show_history,
            settings,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    /// Handles a single key. Unknown keys change nothing.
    pub fn handle_key(
        &mut self,
        key: &str,
    ) {
        match keymap::map_key(key) {
            Some(Action::Input(token)) => {
                self.engine.apply(token);
            }
            Some(Action::ToggleHistory) => self.toggle_history(),
            None => debug!(key, "ignoring unmapped key"),
        }
    }

    /// Handles one line of input: a `:command` or a key script.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> Step {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command);
        }

        for key in keymap::split_keys(line) {
            self.handle_key(key);
        }
        Step::Render
    }

    fn handle_command(
        &mut self,
        command: &str,
    ) -> Step {
        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let arg = words.next();

        match (name, arg) {
            ("quit" | "q", _) => Step::Quit,
            ("history", _) => {
                self.toggle_history();
                Step::Render
            }
            ("recall", Some(position)) => self.recall(position),
            ("recall", None) => Step::Notice("usage: :recall N".to_string()),
            ("log", Some(level)) => match logging::set_log_level(level) {
                Ok(()) => Step::Notice(format!("log level set to '{level}'")),
                Err(error) => Step::Notice(error.to_string()),
            },
            ("log", None) => Step::Notice("usage: :log LEVEL".to_string()),
            ("clear-log", _) => {
                logging::disable_file_logging();
                Step::Notice("log file closed".to_string())
            }
            _ => Step::Notice(format!("unknown command ':{name}'")),
        }
    }

    /// Loads the entry at 1-based `position` in the rendered list and
    /// closes the panel.
    fn recall(
        &mut self,
        position: &str,
    ) -> Step {
        let len = self.engine.history().len();
        let index = match position.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => {
                if self.settings.history_newest_first {
                    len - n
                } else {
                    n - 1
                }
            }
            _ => return Step::Notice(format!("no history entry '{position}'")),
        };

        match self.engine.recall(index) {
            Ok(_) => {
                self.history_open = false;
                Step::Render
            }
            Err(error) => Step::Notice(error.to_string()),
        }
    }

    fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
        debug!(open = self.history_open, "toggled history panel");
    }

    /// History entries in the order they are listed.
    fn listed_entries(&self) -> Vec<&HistoryEntry> {
        let history = self.engine.history();
        if self.settings.history_newest_first {
            history.newest_first().collect()
        } else {
            history.entries().iter().collect()
        }
    }

    /// The screen: the display line, followed by the history panel when
    /// it is open.
    pub fn render(&self) -> String {
        let mut screen = self.engine.display();
        if !self.history_open {
            return screen;
        }

        screen.push_str("\nHistory:");
        let entries = self.listed_entries();
        if entries.is_empty() {
            screen.push_str("\n  (empty)");
        }
        for (n, entry) in entries.into_iter().enumerate() {
            screen.push_str(&format!("\n  {}. {}", n + 1, entry));
        }
        screen
    }

    fn prompt<W: Write>(
        &self,
        output: &mut W,
    ) -> Result<()> {
        write!(output, "{}", self.settings.prompt).context("failed to write prompt")?;
        output.flush().context("failed to flush output")
    }

    /// Runs the read-render loop until `:quit` or end of input.
    pub fn run<R, W>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        info!("session started");
        writeln!(output, "{}", self.render()).context("failed to write display")?;
        self.prompt(output)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let written = match self.handle_line(&line) {
                Step::Render => writeln!(output, "{}", self.render()),
                Step::Notice(message) => writeln!(output, "{message}"),
                Step::Quit => break,
            };
            written.context("failed to write display")?;
            self.prompt(output)?;
        }

        info!(entries = self.engine.history().len(), "session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session() -> Session {
        Session::new(Settings::default())
    }

    fn session_with_two_results() -> Session {
        let mut s = session();
        s.handle_line("2+3=");
        s.handle_line("4*5=");
        s
    }

    // =========================================================================
    // handle_line tests
    // =========================================================================

    #[test]
    fn key_script_drives_engine() {
        let mut s = session();

        let step = s.handle_line("2+3*4 Enter");

        assert_eq!(step, Step::Render);
        assert_eq!(s.render(), "5 × 4 = 20");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut s = session();

        s.handle_line("4x2");

        assert_eq!(s.render(), "42");
    }

    #[test]
    fn backspace_and_escape_keys_work() {
        let mut s = session();

        s.handle_line("123 Backspace");
        assert_eq!(s.render(), "12");

        s.handle_line("Escape");
        assert_eq!(s.render(), "0");
    }

    #[test]
    fn h_key_toggles_history_panel() {
        let mut s = session();

        s.handle_line("h");
        assert!(s.history_open());

        s.handle_line("H");
        assert!(!s.history_open());
    }

    // =========================================================================
    // command tests
    // =========================================================================

    #[test]
    fn quit_command_ends_session() {
        assert_eq!(session().handle_line(":quit"), Step::Quit);
        assert_eq!(session().handle_line(":q"), Step::Quit);
    }

    #[test]
    fn unknown_command_is_reported() {
        let step = session().handle_line(":frobnicate");

        assert_eq!(step, Step::Notice("unknown command ':frobnicate'".to_string()));
    }

    #[test]
    fn recall_picks_from_rendered_order() {
        let mut s = session_with_two_results();
        s.handle_line(":history");

        // Newest first: 1 is "4 × 5 = 20", 2 is "2 + 3 = 5".
        let step = s.handle_line(":recall 2");

        assert_eq!(step, Step::Render);
        assert_eq!(s.render(), "5");
        assert!(!s.history_open());
    }

    #[test]
    fn recall_follows_oldest_first_setting() {
        let mut s = Session::new(Settings {
            history_newest_first: false,
            ..Settings::default()
        });
        s.handle_line("2+3=");
        s.handle_line("4*5=");

        s.handle_line(":recall 2");

        assert_eq!(s.render(), "20");
    }

    #[test]
    fn recall_rejects_bad_position() {
        let mut s = session_with_two_results();

        assert_eq!(
            s.handle_line(":recall 3"),
            Step::Notice("no history entry '3'".to_string())
        );
        assert_eq!(
            s.handle_line(":recall zero"),
            Step::Notice("no history entry 'zero'".to_string())
        );
        assert_eq!(
            s.handle_line(":recall"),
            Step::Notice("usage: :recall N".to_string())
        );
    }

    #[test]
    fn log_command_without_logging_reports_error() {
        let step = session().handle_line(":log debug");

        assert_eq!(step, Step::Notice("logging not yet initialized".to_string()));
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn render_lists_history_newest_first() {
        let mut s = session_with_two_results();
        s.handle_line("h");

        assert_eq!(
            s.render(),
            "4 × 5 = 20\nHistory:\n  1. 4 × 5 = 20\n  2. 2 + 3 = 5"
        );
    }

    #[test]
    fn render_marks_empty_history() {
        let s = Session::new(Settings {
            show_history: true,
            ..Settings::default()
        });

        assert_eq!(s.render(), "0\nHistory:\n  (empty)");
    }

    // =========================================================================
    // run tests
    // =========================================================================

    #[test]
    fn run_renders_after_each_line() {
        let mut s = session();
        let mut out = Vec::new();

        s.run("7*6\n=\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0\n> 7 ×  6\n> 7 × 6 = 42\n> ");
    }

    #[test]
    fn run_stops_at_quit() {
        let mut s = session();
        let mut out = Vec::new();

        s.run("1\n:quit\n2\n".as_bytes(), &mut out).unwrap();

        assert_eq!(s.engine().display(), "1");
    }
}
