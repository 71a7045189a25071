//! Display state of the question list.

use crate::models::Question;

/// One row of a populated list. `number` is the 1-based position, not the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub number: usize,
    pub question: &'a Question,
}

/// Exactly one of these is shown, checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Failed { message: &'a str },
    Empty,
    Populated(Vec<ListEntry<'a>>),
}

impl<'a> ListView<'a> {
    pub fn select(loading: bool, error: Option<&'a str>, questions: &'a [Question]) -> Self {
        if loading {
            return ListView::Loading;
        }
        if let Some(message) = error {
            return ListView::Failed { message };
        }
        if questions.is_empty() {
            return ListView::Empty;
        }

        ListView::Populated(
            questions
                .iter()
                .enumerate()
                .map(|(index, question)| ListEntry {
                    number: index + 1,
                    question,
                })
                .collect(),
        )
    }
}

/// Header badge, e.g. "2 questions".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 question".to_string()
    } else {
        format!("{} questions", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        [(10u64, "lorem testum 1"), (4, "lorem testum 2")]
            .into_iter()
            .map(|(id, prompt)| Question {
                id: id.into(),
                prompt: prompt.to_string(),
                answers: vec!["a".into(), "b".into()],
                correct_index: 0,
            })
            .collect()
    }

    #[test]
    fn test_loading_wins() {
        let qs = questions();
        assert_eq!(ListView::select(true, Some("boom"), &qs), ListView::Loading);
    }

    #[test]
    fn test_error_before_empty() {
        assert_eq!(
            ListView::select(false, Some("boom"), &[]),
            ListView::Failed { message: "boom" }
        );
        assert_eq!(ListView::select(false, None, &[]), ListView::Empty);
    }

    #[test]
    fn test_populated_numbers_by_position() {
        let qs = questions();
        let ListView::Populated(entries) = ListView::select(false, None, &qs) else {
            panic!("expected populated list");
        };
        let numbered: Vec<_> = entries
            .iter()
            .map(|e| (e.number, e.question.prompt.as_str()))
            .collect();
        assert_eq!(numbered, [(1, "lorem testum 1"), (2, "lorem testum 2")]);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1), "1 question");
        assert_eq!(count_label(3), "3 questions");
    }
}
