//! Terminal UI.
//!
//! Status lines go to stderr; program output (the version report, the
//! activation instruction, `config`) goes to stdout so it can be piped.

use console::Term;
use std::io::Write;

use super::theme::{BootTheme, Tone};
use super::{OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: BootTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, BootTheme::detect())
    }

    pub fn with_theme(mode: OutputMode, theme: BootTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    /// Write one stderr line if the output mode allows it.
    ///
    /// Errors are written in every mode.
    fn status(&mut self, tone: Option<Tone>, msg: &str) {
        if tone != Some(Tone::Error) && !self.mode.shows_status() {
            return;
        }
        let line = match tone {
            Some(tone) => self.theme.line(tone, msg),
            None => msg.to_string(),
        };
        writeln!(self.err, "{}", line).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.status(None, msg);
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            let line = self.theme.dim(msg);
            writeln!(self.err, "{}", line).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        self.status(Some(Tone::Success), msg);
    }

    fn warning(&mut self, msg: &str) {
        self.status(Some(Tone::Warning), msg);
    }

    fn error(&mut self, msg: &str) {
        self.status(Some(Tone::Error), msg);
    }

    fn emit(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }

    fn show_header(&mut self, title: &str) {
        self.status(Some(Tone::Header), title);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        // A spinner on a pipe would only leave control codes behind.
        if self.mode.shows_spinners() && self.err.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme))
        } else {
            self.message(message);
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
