//! Progress spinner for version lookups.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use super::theme::{BootTheme, Tone};
use super::SpinnerHandle;

/// Spinner drawn on stderr. Hidden spinners swallow every call.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: BootTheme,
}

impl ProgressSpinner {
    pub fn new(message: &str, theme: BootTheme) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: BootTheme::plain(),
        }
    }

    /// Replace the spinner with a final status line.
    fn settle(&mut self, tone: Tone, msg: &str) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(self.theme.line(tone, msg));
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.settle(Tone::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.settle(Tone::Error, msg);
    }
}
