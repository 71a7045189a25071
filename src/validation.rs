//! Client-side validation of the new-question form.
//!
//! Validation never touches the network. Every rule runs on every call so the
//! user sees all problems at once.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Draft, DraftField};

/// Minimum prompt length, counted in characters after trimming.
pub const PROMPT_MIN_LENGTH: usize = 10;

/// Number of answer slots in a stored question.
pub const ANSWER_SLOTS: usize = 4;

/// Where a validation message is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Field(DraftField),
    /// Form-level: two or more answers are the same.
    Duplicate,
}

/// Field name to human-readable message. Empty means the form can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ErrorKey, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn field(&self, field: DraftField) -> Option<&str> {
        self.get(ErrorKey::Field(field))
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.errors.contains_key(&key)
    }

    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.errors.insert(key, message.into());
    }

    pub fn remove(&mut self, key: ErrorKey) -> Option<String> {
        self.errors.remove(&key)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Compute the validation errors for a draft.
pub fn validate(draft: &Draft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let prompt = draft.prompt.trim();
    if prompt.is_empty() {
        errors.insert(
            ErrorKey::Field(DraftField::Prompt),
            "Question prompt is required",
        );
    } else if prompt.chars().count() < PROMPT_MIN_LENGTH {
        errors.insert(
            ErrorKey::Field(DraftField::Prompt),
            format!(
                "Question prompt must be at least {} characters long",
                PROMPT_MIN_LENGTH
            ),
        );
    }

    if draft.answer1.trim().is_empty() {
        errors.insert(ErrorKey::Field(DraftField::Answer1), "Answer 1 is required");
    }
    if draft.answer2.trim().is_empty() {
        errors.insert(ErrorKey::Field(DraftField::Answer2), "Answer 2 is required");
    }

    if draft.correct_index >= ANSWER_SLOTS {
        errors.insert(
            ErrorKey::Field(DraftField::CorrectIndex),
            "Correct answer must be one of the four answers",
        );
    }

    if has_duplicate_answers(&draft.answers()) {
        errors.insert(ErrorKey::Duplicate, "All answers must be unique");
    }

    errors
}

/// True when two non-blank answers match after trimming, ignoring case.
fn has_duplicate_answers(answers: &[&str]) -> bool {
    let mut seen = HashSet::new();
    answers
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .any(|a| !seen.insert(a.to_lowercase()))
}
