//! Per-question controller: optimistic correct-answer edits and delete
//! confirmation.

use crate::models::{Question, QuestionId};

use super::mount::MountToken;

/// What a delete request turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAction {
    /// Send the delete now.
    Delete,
    /// A confirmation dialog was opened instead.
    Confirm,
}

#[derive(Debug)]
pub struct ItemController {
    mount: MountToken,
    id: QuestionId,
    answer_count: usize,
    /// Last value the store agreed to.
    confirmed_index: usize,
    /// What the user sees; may run ahead of `confirmed_index`.
    local_index: usize,
    updating: bool,
    confirm_mode: bool,
    confirm_open: bool,
}

impl ItemController {
    pub fn new(mount: MountToken, question: &Question, confirm_mode: bool) -> Self {
        Self {
            mount,
            id: question.id.clone(),
            answer_count: question.answers.len(),
            confirmed_index: question.correct_index,
            local_index: question.correct_index,
            updating: false,
            confirm_mode,
            confirm_open: false,
        }
    }

    pub fn mount(&self) -> MountToken {
        self.mount
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn local_correct_index(&self) -> usize {
        self.local_index
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    pub fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    /// Pick up changes made to the question outside this item, e.g. after a
    /// reload or a confirmed update.
    pub fn sync(&mut self, question: &Question) {
        self.answer_count = question.answers.len();
        if question.correct_index != self.confirmed_index {
            self.confirmed_index = question.correct_index;
            self.local_index = question.correct_index;
        }
    }

    /// Show the new choice immediately and return the index to send to the
    /// store. Ignored while an update is in flight or when the index doesn't
    /// address one of the answers.
    pub fn on_correct_answer_change(&mut self, new_index: usize) -> Option<usize> {
        if self.updating || new_index >= self.answer_count {
            return None;
        }
        self.local_index = new_index;
        self.updating = true;
        Some(new_index)
    }

    /// The update request finished. A failure puts back the last confirmed
    /// value; a success keeps what the user picked.
    pub fn on_update_result(&mut self, ok: bool) {
        if !ok {
            self.local_index = self.confirmed_index;
        }
        self.updating = false;
    }

    pub fn on_delete_request(&mut self) -> DeleteAction {
        if self.confirm_mode {
            self.confirm_open = true;
            DeleteAction::Confirm
        } else {
            DeleteAction::Delete
        }
    }

    /// Confirm the open dialog. Returns true if the delete should be sent.
    pub fn confirm_delete(&mut self) -> bool {
        std::mem::replace(&mut self.confirm_open, false)
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_open = false;
    }
}
