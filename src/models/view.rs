use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Mode, ScanReport};
use crate::render::{escape_html, format_markdown};

pub const RESULT_CONTAINER_ID: &str = "result";
pub const PENDING_MESSAGE: &str = "Running test... please wait.";
pub const RESULT_HEADING: &str = "<h3>Result:</h3>";

/// What the result container currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultState {
    #[default]
    Idle,
    Pending,
    Prompt(&'static str),
    /// Markup ready for the container, heading included.
    Rendered(String),
    /// Raw failure message; escaped when the container is rendered.
    Failed(String),
}

impl ResultState {
    pub fn label(&self) -> &'static str {
        match self {
            ResultState::Idle => "idle",
            ResultState::Pending => "pending",
            ResultState::Prompt(_) => "prompt",
            ResultState::Rendered(_) => "rendered",
            ResultState::Failed(_) => "failed",
        }
    }
}

/// Page state: the input fields keyed by element id, plus the result
/// container. The page binding fills the inputs and reads the container;
/// the dispatcher only talks to this struct.
#[derive(Debug, Default)]
pub struct ViewModel {
    inputs: HashMap<String, String>,
    result: ResultState,
    report: Option<ScanReport>,
}

#[derive(Debug, Serialize)]
pub struct ContainerSnapshot<'a> {
    pub id: &'static str,
    pub state: &'static str,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a str>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(field_id.into(), value.into());
    }

    /// Builder form of [`ViewModel::set_input`] keyed by mode.
    pub fn with_input(mut self, mode: Mode, value: impl Into<String>) -> Self {
        self.set_input(mode.route().field_id, value);
        self
    }

    /// A missing field reads as empty.
    pub fn input(&self, field_id: &str) -> &str {
        self.inputs.get(field_id).map_or("", String::as_str)
    }

    pub fn input_for(&self, mode: Mode) -> &str {
        self.input(mode.route().field_id)
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    pub fn report(&self) -> Option<&ScanReport> {
        self.report.as_ref()
    }

    pub fn take_report(&mut self) -> Option<ScanReport> {
        self.report.take()
    }

    /// The markup the result container should hold.
    pub fn result_html(&self) -> String {
        match &self.result {
            ResultState::Idle => String::new(),
            ResultState::Pending => PENDING_MESSAGE.to_string(),
            ResultState::Prompt(prompt) => (*prompt).to_string(),
            ResultState::Rendered(html) => html.clone(),
            ResultState::Failed(message) => escape_html(message),
        }
    }

    pub fn snapshot(&self) -> ContainerSnapshot<'_> {
        ContainerSnapshot {
            id: RESULT_CONTAINER_ID,
            state: self.result.label(),
            html: self.result_html(),
            report: self.report.as_ref().map(|r| r.filename.as_str()),
        }
    }

    pub(crate) fn show_pending(&mut self) {
        self.result = ResultState::Pending;
        self.report = None;
    }

    pub(crate) fn show_prompt(&mut self, prompt: &'static str) {
        self.result = ResultState::Prompt(prompt);
    }

    pub(crate) fn show_failure(&mut self, message: String) {
        self.result = ResultState::Failed(message);
    }

    pub(crate) fn show_text(&mut self, text: &str) {
        self.result = ResultState::Rendered(format!("{RESULT_HEADING}{}", format_markdown(text)));
    }

    pub(crate) fn show_report(&mut self, report: ScanReport) {
        let summary = format!(
            "Scan report received: {} ({} bytes)",
            report.filename,
            report.bytes.len()
        );
        self.result = ResultState::Rendered(format!("{RESULT_HEADING}{}", escape_html(&summary)));
        self.report = Some(report);
    }
}
