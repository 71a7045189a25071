//! New-question form controller.

use tracing::debug;

use crate::models::{Draft, DraftField, NewQuestion};
use crate::validation::{ANSWER_SLOTS, ErrorKey, ValidationErrors, validate};

use super::mount::MountToken;

/// State behind the "Create New Question" form.
#[derive(Debug)]
pub struct FormController {
    mount: MountToken,
    draft: Draft,
    errors: ValidationErrors,
    submitting: bool,
    focus: DraftField,
}

impl FormController {
    pub fn new(mount: MountToken) -> Self {
        Self {
            mount,
            draft: Draft::default(),
            errors: ValidationErrors::new(),
            submitting: false,
            focus: DraftField::Prompt,
        }
    }

    pub fn mount(&self) -> MountToken {
        self.mount
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Inputs are locked while a submission is in flight or the first load
    /// hasn't finished.
    pub fn is_disabled(&self, loading: bool) -> bool {
        loading || self.submitting
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Replace a field's value and drop any error shown for it.
    ///
    /// `CorrectIndex` takes the index as text; a value that is not a number
    /// leaves the draft alone and records an error on the field instead.
    pub fn on_field_change(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        let key = ErrorKey::Field(field);

        match self.draft.text_mut(field) {
            Some(text) => *text = value,
            None => match value.trim().parse::<usize>() {
                Ok(index) => self.draft.correct_index = index,
                Err(_) => {
                    self.errors.insert(key, "Correct answer must be a number");
                    return;
                }
            },
        }

        self.errors.remove(key);
    }

    /// Append a typed character to the focused text field.
    pub fn push_char(&mut self, c: char) {
        if let Some(text) = self.draft.text(self.focus) {
            let mut value = text.to_string();
            value.push(c);
            self.on_field_change(self.focus, value);
        } else if let Some(digit) = c.to_digit(10) {
            // correct answer is picked as 1-4 on screen
            if (1..=ANSWER_SLOTS as u32).contains(&digit) {
                self.on_field_change(self.focus, (digit - 1).to_string());
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(text) = self.draft.text(self.focus) {
            let mut value = text.to_string();
            value.pop();
            self.on_field_change(self.focus, value);
        }
    }

    pub fn cycle_correct_index(&mut self, forward: bool) {
        let current = self.draft.correct_index.min(ANSWER_SLOTS - 1);
        let next = if forward {
            (current + 1) % ANSWER_SLOTS
        } else {
            (current + ANSWER_SLOTS - 1) % ANSWER_SLOTS
        };
        self.on_field_change(DraftField::CorrectIndex, next.to_string());
    }

    /// Validate and, if clean, produce the record to create.
    ///
    /// Returns `None` without side effects on the network when the form is
    /// disabled or invalid.
    pub fn on_submit(&mut self, loading: bool) -> Option<NewQuestion> {
        if self.is_disabled(loading) {
            return None;
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            debug!(count = errors.len(), "form rejected by validation");
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.submitting = true;
        Some(self.draft.to_new_question())
    }

    /// The create request finished. On success the form starts over; on
    /// failure the draft is kept so the user can retry.
    pub fn on_create_result(&mut self, ok: bool) {
        if ok {
            self.draft = Draft::default();
            self.errors.clear();
        }
        self.submitting = false;
    }

    pub fn on_reset(&mut self) {
        self.draft = Draft::default();
        self.errors.clear();
        self.focus = DraftField::Prompt;
    }
}
