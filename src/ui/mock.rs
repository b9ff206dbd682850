//! Recording UI for tests.
//!
//! `MockUI` keeps every call as a [`UiEvent`] in the order it happened, so
//! tests can check both what was shown and in which order.
//!
//! # Example
//!
//! ```
//! use envboot::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Installing 4 package(s)");
//! ui.emit("{}");
//!
//! assert_eq!(ui.emitted(), ["{}"]);
//! assert_eq!(
//!     ui.events(),
//!     [UiEvent::Header("Installing 4 package(s)".into()), UiEvent::Emit("{}".into())]
//! );
//! ```

use std::cell::Cell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// One recorded UI call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Detail(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    /// Program output written to stdout.
    Emit(String),
    /// A spinner was started with this message.
    Spinner(String),
}

/// How a spinner ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: Vec<UiEvent>,
    spinner_ends: Vec<Rc<Cell<Option<SpinnerStatus>>>>,
}

macro_rules! texts_of {
    ($self:ident, $variant:ident) => {
        $self
            .events
            .iter()
            .filter_map(|e| match e {
                UiEvent::$variant(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    };
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every call so far, oldest first.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    pub fn messages(&self) -> Vec<String> {
        texts_of!(self, Message)
    }

    pub fn details(&self) -> Vec<String> {
        texts_of!(self, Detail)
    }

    pub fn successes(&self) -> Vec<String> {
        texts_of!(self, Success)
    }

    pub fn warnings(&self) -> Vec<String> {
        texts_of!(self, Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        texts_of!(self, Error)
    }

    pub fn headers(&self) -> Vec<String> {
        texts_of!(self, Header)
    }

    /// Everything written to stdout.
    pub fn emitted(&self) -> Vec<String> {
        texts_of!(self, Emit)
    }

    /// Start messages of spinners, in order.
    pub fn spinners(&self) -> Vec<String> {
        texts_of!(self, Spinner)
    }

    /// How each spinner ended, in start order. `None` while still running.
    pub fn spinner_statuses(&self) -> Vec<Option<SpinnerStatus>> {
        self.spinner_ends.iter().map(|end| end.get()).collect()
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages().iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    pub fn has_emitted(&self, text: &str) -> bool {
        self.emitted().iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
    }

    fn detail(&mut self, msg: &str) {
        self.events.push(UiEvent::Detail(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.events.push(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(UiEvent::Error(msg.to_string()));
    }

    fn emit(&mut self, text: &str) {
        self.events.push(UiEvent::Emit(text.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.events.push(UiEvent::Header(title.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.events.push(UiEvent::Spinner(message.to_string()));
        let end = Rc::new(Cell::new(None));
        self.spinner_ends.push(Rc::clone(&end));
        Box::new(MockSpinner { end })
    }
}

/// Spinner handed out by [`MockUI`]; how it ends stays visible to the UI.
#[derive(Debug)]
pub struct MockSpinner {
    end: Rc<Cell<Option<SpinnerStatus>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, _msg: &str) {
        self.end.set(Some(SpinnerStatus::Success));
    }

    fn finish_error(&mut self, _msg: &str) {
        self.end.set(Some(SpinnerStatus::Error));
    }
}
