mod draft;
mod question;

pub use draft::{DEFAULT_ANSWER_3, DEFAULT_ANSWER_4, Draft, DraftField};
pub use question::{CorrectIndexPatch, NewQuestion, Question, QuestionId};
