use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned question identifier.
///
/// The store decides the shape; numeric and string ids are both accepted
/// and written back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(u64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        QuestionId::Number(id)
    }
}

/// A stored multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub answers: Vec<String>,
    pub correct_index: usize,
}

/// Body of `POST /questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub prompt: String,
    pub answers: [String; 4],
    pub correct_index: usize,
}

/// Body of `PATCH /questions/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectIndexPatch {
    pub correct_index: usize,
}
