use super::NewQuestion;

pub const DEFAULT_ANSWER_3: &str = "Default Answer 3";
pub const DEFAULT_ANSWER_4: &str = "Default Answer 4";

/// Editable fields of the new-question form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Prompt,
    Answer1,
    Answer2,
    Answer3,
    Answer4,
    CorrectIndex,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Prompt,
        DraftField::Answer1,
        DraftField::Answer2,
        DraftField::Answer3,
        DraftField::Answer4,
        DraftField::CorrectIndex,
    ];

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Unsaved form input for a new question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub prompt: String,
    pub answer1: String,
    pub answer2: String,
    pub answer3: String,
    pub answer4: String,
    pub correct_index: usize,
}

impl Draft {
    pub fn text(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Prompt => Some(&self.prompt),
            DraftField::Answer1 => Some(&self.answer1),
            DraftField::Answer2 => Some(&self.answer2),
            DraftField::Answer3 => Some(&self.answer3),
            DraftField::Answer4 => Some(&self.answer4),
            DraftField::CorrectIndex => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Prompt => Some(&mut self.prompt),
            DraftField::Answer1 => Some(&mut self.answer1),
            DraftField::Answer2 => Some(&mut self.answer2),
            DraftField::Answer3 => Some(&mut self.answer3),
            DraftField::Answer4 => Some(&mut self.answer4),
            DraftField::CorrectIndex => None,
        }
    }

    pub fn answers(&self) -> [&str; 4] {
        [&self.answer1, &self.answer2, &self.answer3, &self.answer4]
    }

    /// Build the record sent to the store.
    ///
    /// The prompt is trimmed and blank optional answers are replaced with
    /// placeholder text so the stored question always has four answers.
    pub fn to_new_question(&self) -> NewQuestion {
        NewQuestion {
            prompt: self.prompt.trim().to_string(),
            answers: [
                self.answer1.clone(),
                self.answer2.clone(),
                or_default(&self.answer3, DEFAULT_ANSWER_3),
                or_default(&self.answer4, DEFAULT_ANSWER_4),
            ],
            correct_index: self.correct_index,
        }
    }
}

fn or_default(answer: &str, fallback: &str) -> String {
    if answer.trim().is_empty() {
        fallback.to_string()
    } else {
        answer.to_string()
    }
}
