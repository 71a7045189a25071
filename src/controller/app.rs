//! Application controller: owns the authoritative question collection.

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::{NewQuestion, Question, QuestionId};
use crate::store::{StoreOutcome, StoreRequest};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    List,
    Form,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::List => "View Questions",
            Page::Form => "New Question",
        }
    }
}

/// Session-wide state. Child controllers read from it and ask it for
/// mutations; only [`AppController::apply`] changes `questions`.
#[derive(Debug, Default)]
pub struct AppController {
    page: Page,
    questions: Vec<Question>,
    loading: bool,
    loaded: bool,
    error: Option<String>,
}

impl AppController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Loading, and no fetch has finished yet this session.
    pub fn is_initial_load(&self) -> bool {
        self.loading && !self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start reloading the whole collection.
    pub fn fetch_all(&mut self) -> StoreRequest {
        info!("fetching questions");
        self.loading = true;
        self.error = None;
        StoreRequest::FetchAll
    }

    pub fn create(&self, question: NewQuestion) -> StoreRequest {
        info!(prompt = %question.prompt, "creating question");
        StoreRequest::Create(question)
    }

    pub fn delete(&self, id: QuestionId) -> StoreRequest {
        info!(%id, "deleting question");
        StoreRequest::Delete(id)
    }

    pub fn update_correct_answer(&self, id: QuestionId, correct_index: usize) -> StoreRequest {
        info!(%id, correct_index, "updating correct answer");
        StoreRequest::UpdateCorrectIndex { id, correct_index }
    }

    pub fn change_page(&mut self, page: Page) {
        debug!(from = ?self.page, to = ?page, "changing page");
        self.error = None;
        self.page = page;
    }

    pub fn retry(&mut self) -> StoreRequest {
        self.error = None;
        self.fetch_all()
    }

    /// Fold a finished round trip into the collection.
    ///
    /// Failures become a single message in `error`; the collection is left
    /// untouched.
    pub fn apply(&mut self, outcome: &StoreOutcome) {
        match outcome {
            StoreOutcome::Fetched(Ok(questions)) => {
                self.questions = questions.clone();
                self.loading = false;
                self.loaded = true;
            }
            StoreOutcome::Fetched(Err(e)) => {
                self.fail("Failed to load questions", e);
                self.loading = false;
                self.loaded = true;
            }
            StoreOutcome::Created(Ok(question)) => {
                self.questions.push(question.clone());
                self.page = Page::List;
            }
            StoreOutcome::Created(Err(e)) => self.fail("Failed to create question", e),
            StoreOutcome::Deleted { id, result: Ok(()) } => {
                self.questions.retain(|q| &q.id != id);
            }
            StoreOutcome::Deleted { result: Err(e), .. } => {
                self.fail("Failed to delete question", e)
            }
            StoreOutcome::Updated {
                id,
                correct_index,
                result: Ok(()),
            } => {
                if let Some(question) = self.questions.iter_mut().find(|q| &q.id == id) {
                    question.correct_index = *correct_index;
                }
            }
            StoreOutcome::Updated { result: Err(e), .. } => {
                self.fail("Failed to update question", e)
            }
        }
    }

    fn fail(&mut self, context: &str, error: &StoreError) {
        warn!(%error, "{}", context);
        self.error = Some(format!("{}: {}", context, error));
    }
}
