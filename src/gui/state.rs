//! Screen state for the lookup workflow
//!
//! The form is visible in `Idle` and `Failed`, hidden in `Loading` and
//! `Completed`. Only a lookup outcome moves the screen out of `Loading`.

use crate::extractor::DownloadResult;
use crate::utils::error::FetchError;
use crate::utils::validation::{is_tiktok_link, validate_input_url};
use tracing::debug;

pub const NO_SOURCES_MESSAGE: &str = "No video sources available.";

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Idle,
    Loading,
    Completed(DownloadResult),
    /// Last lookup failed. Carries the message shown above the form.
    Failed(String),
}

/// Everything the main screen renders
#[derive(Debug, Clone)]
pub struct Screen {
    pub url_input: String,
    pub state: ScreenState,
    /// Inline validation message, cleared on edit
    pub input_error: Option<String>,
}

impl Screen {
    /// `prefill` is the link the app was launched with, if any.
    pub fn new(prefill: Option<String>) -> Self {
        Self {
            url_input: prefill.unwrap_or_default(),
            state: ScreenState::Idle,
            input_error: None,
        }
    }

    pub fn form_visible(&self) -> bool {
        matches!(self.state, ScreenState::Idle | ScreenState::Failed(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ScreenState::Loading)
    }

    pub fn can_submit(&self) -> bool {
        self.form_visible() && !self.url_input.trim().is_empty()
    }

    pub fn set_input(&mut self, value: String) {
        if self.form_visible() {
            self.url_input = value;
            self.input_error = None;
        }
    }

    pub fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    /// Replace the input with clipboard text if it is a TikTok link.
    pub fn apply_clipboard(&mut self, text: &str) -> bool {
        if !self.form_visible() || !is_tiktok_link(text) {
            debug!("Ignoring clipboard content");
            return false;
        }
        self.set_input(text.to_string());
        true
    }

    /// Validate the input and enter `Loading`.
    ///
    /// Returns the URL to resolve. Returns `None` when a lookup is already
    /// running, the results are showing, or the input is invalid (in which
    /// case `input_error` is set and the state is unchanged).
    pub fn submit(&mut self) -> Option<String> {
        if !self.form_visible() {
            return None;
        }
        match validate_input_url(&self.url_input) {
            Ok(url) => {
                let url = url.to_string();
                self.input_error = None;
                self.state = ScreenState::Loading;
                Some(url)
            }
            Err(e) => {
                self.input_error = Some(e.user_message().to_string());
                None
            }
        }
    }

    /// Apply the outcome of the running lookup. Ignored outside `Loading`.
    pub fn finish(&mut self, outcome: Result<DownloadResult, FetchError>) {
        if !self.is_loading() {
            debug!("Dropping lookup outcome outside Loading");
            return;
        }
        self.state = match outcome {
            Ok(result) => ScreenState::Completed(result),
            Err(e) => ScreenState::Failed(e.user_message().to_string()),
        };
    }

    /// Back to an empty form for a new search. Only from `Completed`.
    pub fn reset(&mut self) {
        if matches!(self.state, ScreenState::Completed(_)) {
            self.url_input.clear();
            self.input_error = None;
            self.state = ScreenState::Idle;
        }
    }

    /// Message line above the form or results
    pub fn notice(&self) -> Option<&str> {
        match &self.state {
            ScreenState::Completed(result) if result.is_empty() => Some(NO_SOURCES_MESSAGE),
            ScreenState::Failed(message) => Some(message),
            _ => self.input_error.as_deref(),
        }
    }

    pub fn results(&self) -> Option<&DownloadResult> {
        match &self.state {
            ScreenState::Completed(result) if !result.is_empty() => Some(result),
            _ => None,
        }
    }
}
