//! Status-line styling.
//!
//! Every stderr status line starts with a marker picked by its [`Tone`].
//! Color is applied only when the theme is colored; plain lines keep the
//! marker so piped logs stay readable.

use console::Style;

/// What kind of status line is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A step finished (`✓`).
    Success,
    /// Something the user should know, the run goes on (`!`).
    Warning,
    /// The run failed (`✗`).
    Error,
    /// Start of a phase: creating the environment, installing (`==>`).
    Header,
}

impl Tone {
    pub fn marker(self) -> &'static str {
        match self {
            Tone::Success => "✓",
            Tone::Warning => "!",
            Tone::Error => "✗",
            Tone::Header => "==>",
        }
    }

    fn style(self) -> Style {
        match self {
            Tone::Success => Style::new().for_stderr().green(),
            Tone::Warning => Style::new().for_stderr().yellow(),
            Tone::Error => Style::new().for_stderr().red().bold(),
            Tone::Header => Style::new().for_stderr().cyan().bold(),
        }
    }
}

/// Decides whether status lines are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTheme {
    colored: bool,
}

impl BootTheme {
    /// Colored theme.
    pub fn colored() -> Self {
        Self { colored: true }
    }

    /// Theme without escape codes.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Colored when [`should_use_colors`] says so.
    pub fn detect() -> Self {
        Self {
            colored: should_use_colors(),
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// A status line: marker, a space, then the message.
    pub fn line(&self, tone: Tone, msg: &str) -> String {
        let text = format!("{} {}", tone.marker(), msg);
        if self.colored {
            tone.style().apply_to(text).to_string()
        } else {
            text
        }
    }

    /// Secondary text shown in verbose mode.
    pub fn dim(&self, msg: &str) -> String {
        if self.colored {
            Style::new().for_stderr().dim().apply_to(msg).to_string()
        } else {
            msg.to_string()
        }
    }
}

/// Colors are used only for a terminal on stderr, and never with `NO_COLOR`.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_carry_tone_marker() {
        let theme = BootTheme::plain();
        assert_eq!(theme.line(Tone::Success, "Setup complete"), "✓ Setup complete");
        assert_eq!(
            theme.line(Tone::Warning, "No virtual environment is active"),
            "! No virtual environment is active"
        );
        assert_eq!(theme.line(Tone::Error, "torch >= 2.2.x required"), "✗ torch >= 2.2.x required");
        assert_eq!(theme.line(Tone::Header, "Installing 4 package(s)"), "==> Installing 4 package(s)");
    }

    #[test]
    fn colored_lines_keep_text() {
        console::set_colors_enabled_stderr(true);
        let line = BootTheme::colored().line(Tone::Error, "Package installation failed");
        assert!(line.contains("✗ Package installation failed"));
        assert!(line.starts_with('\u{1b}'));
    }

    #[test]
    fn plain_dim_is_unchanged() {
        assert_eq!(BootTheme::plain().dim("Using active environment /env"), "Using active environment /env");
        assert!(!BootTheme::plain().is_colored());
    }
}
