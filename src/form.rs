//! Query form state and its transitions.
//!
//! `FormState::apply` is the only way the form changes. It never performs I/O;
//! instead it returns an [`Effect`] the view layer is expected to carry out.

use crate::api::ApiError;
use crate::types::RecommendationOutcome;

pub const PLACEHOLDER_TEXT: &str =
    "e.g. What is the best antibiotic for a 45-year-old with community-acquired pneumonia in South Africa?";
pub const EMPTY_QUERY_MESSAGE: &str =
    "Please enter a clinical question or scenario to get a recommendation.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error occurred. Please check your connection and try again.";

pub const SUBMIT_LABEL: &str = "Get Antibiotic Recommendation";
pub const PROCESSING_LABEL: &str = "Processing...";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Answered(String),
}

/// Keys that take the field out of placeholder mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Character,
    Backspace,
    Delete,
}

#[derive(Debug)]
pub enum FormAction {
    Focus,
    KeyPress(EditKey),
    Input(String),
    Blur,
    Submit,
    Clear,
    Resolved(Result<RecommendationOutcome, ApiError>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Send(String),
    ScrollToResults,
    ScrollToError,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    text: String,
    placeholder: bool,
    invalid: bool,
    status: Status,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            placeholder: true,
            invalid: false,
            status: Status::Idle,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// What the textarea should show.
    pub fn display_text(&self) -> &str {
        if self.placeholder { PLACEHOLDER_TEXT } else { &self.text }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_loading()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() { PROCESSING_LABEL } else { SUBMIT_LABEL }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.status {
            Status::Answered(answer) => Some(answer),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: FormAction) -> Effect {
        match action {
            FormAction::Focus | FormAction::KeyPress(_) => {
                self.leave_placeholder();
                Effect::None
            }
            FormAction::Input(value) => {
                if !self.placeholder {
                    self.text = value;
                    self.clear_error();
                }
                Effect::None
            }
            FormAction::Blur => {
                if self.text.trim().is_empty() {
                    self.text.clear();
                    self.placeholder = true;
                }
                Effect::None
            }
            FormAction::Submit => self.submit(),
            FormAction::Clear => {
                self.text.clear();
                self.placeholder = false;
                self.invalid = false;
                if !self.is_loading() {
                    self.status = Status::Idle;
                }
                Effect::None
            }
            FormAction::Resolved(result) => self.resolve(result),
        }
    }

    fn leave_placeholder(&mut self) {
        if self.placeholder {
            self.text.clear();
            self.placeholder = false;
        }
    }

    fn clear_error(&mut self) {
        self.invalid = false;
        if matches!(self.status, Status::Failed(_)) {
            self.status = Status::Idle;
        }
    }

    fn submit(&mut self) -> Effect {
        if self.is_loading() {
            return Effect::None;
        }

        let query = self.text.trim();
        if self.placeholder || query.is_empty() {
            self.invalid = true;
            self.status = Status::Failed(EMPTY_QUERY_MESSAGE.to_string());
            return Effect::ScrollToError;
        }

        let query = query.to_string();
        self.invalid = false;
        self.status = Status::Loading;
        Effect::Send(query)
    }

    fn resolve(&mut self, result: Result<RecommendationOutcome, ApiError>) -> Effect {
        match result {
            Ok(RecommendationOutcome::Answer(answer)) => {
                self.status = Status::Answered(answer);
                Effect::ScrollToResults
            }
            Ok(RecommendationOutcome::Rejected(error)) => {
                self.status = Status::Failed(error);
                Effect::ScrollToError
            }
            Err(err) => {
                tracing::warn!(error = %err, "recommendation request failed");
                self.status = Status::Failed(NETWORK_ERROR_MESSAGE.to_string());
                Effect::ScrollToError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> FormState {
        let mut state = FormState::new();
        state.apply(FormAction::Focus);
        state.apply(FormAction::Input(text.to_string()));
        state
    }

    #[test]
    fn starts_in_placeholder_mode() {
        let state = FormState::new();
        assert!(state.is_placeholder());
        assert_eq!(state.display_text(), PLACEHOLDER_TEXT);
        assert_eq!(state.text(), "");
        assert_eq!(state.status(), &Status::Idle);
        assert!(!state.submit_disabled());
    }

    #[test]
    fn input_is_ignored_in_placeholder_mode() {
        let mut state = FormState::new();
        state.apply(FormAction::Input("typed".into()));
        assert!(state.is_placeholder());
        assert_eq!(state.text(), "");
    }

    #[test]
    fn edit_key_leaves_placeholder_mode() {
        let mut state = FormState::new();
        state.apply(FormAction::KeyPress(EditKey::Backspace));
        assert!(!state.is_placeholder());
        assert_eq!(state.display_text(), "");
    }

    #[test]
    fn blur_restores_placeholder_only_when_blank() {
        let mut state = typed("   ");
        state.apply(FormAction::Blur);
        assert!(state.is_placeholder());
        assert_eq!(state.text(), "");

        let mut state = typed("cystitis");
        state.apply(FormAction::Blur);
        assert!(!state.is_placeholder());
        assert_eq!(state.text(), "cystitis");
    }

    #[test]
    fn submit_trims_query() {
        let mut state = typed("  UTI in a 30-year-old  ");
        assert_eq!(
            state.apply(FormAction::Submit),
            Effect::Send("UTI in a 30-year-old".into())
        );
        assert!(state.is_loading());
        assert_eq!(state.submit_label(), PROCESSING_LABEL);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut state = typed("query");
        state.apply(FormAction::Submit);
        assert_eq!(state.apply(FormAction::Submit), Effect::None);
        assert!(state.is_loading());
    }

    #[test]
    fn typing_clears_validation_error() {
        let mut state = typed("");
        state.apply(FormAction::Submit);
        assert!(state.is_invalid());
        assert_eq!(state.error(), Some(EMPTY_QUERY_MESSAGE));

        state.apply(FormAction::Input("s".into()));
        assert!(!state.is_invalid());
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), &Status::Idle);
    }

    #[test]
    fn typing_keeps_displayed_answer() {
        let mut state = typed("q");
        state.apply(FormAction::Submit);
        state.apply(FormAction::Resolved(Ok(RecommendationOutcome::Answer("A".into()))));
        state.apply(FormAction::Input("q2".into()));
        assert_eq!(state.answer(), Some("A"));
    }

    #[test]
    fn clear_resets_text_and_results() {
        let mut state = typed("q");
        state.apply(FormAction::Submit);
        state.apply(FormAction::Resolved(Ok(RecommendationOutcome::Answer("A".into()))));
        state.apply(FormAction::Clear);
        assert_eq!(state.text(), "");
        assert!(!state.is_placeholder());
        assert_eq!(state.status(), &Status::Idle);
    }

    #[test]
    fn clear_does_not_abandon_loading() {
        let mut state = typed("q");
        state.apply(FormAction::Submit);
        state.apply(FormAction::Clear);
        assert!(state.is_loading());
        assert!(state.submit_disabled());
    }
}
