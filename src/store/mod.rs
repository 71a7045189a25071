//! Access to the remote question store.
//!
//! Controllers never talk to the store directly. They hand back a
//! [`StoreRequest`]; the event loop runs it with [`execute`] and feeds the
//! resulting [`StoreOutcome`] back in.

mod http;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewQuestion, Question, QuestionId};

pub use http::HttpQuestionStore;

/// The `/questions` REST resource.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// `GET /questions`
    async fn fetch_all(&self) -> Result<Vec<Question>, StoreError>;

    /// `POST /questions`, returning the record with its server-assigned id.
    async fn create(&self, question: &NewQuestion) -> Result<Question, StoreError>;

    /// `DELETE /questions/{id}`
    async fn delete(&self, id: &QuestionId) -> Result<(), StoreError>;

    /// `PATCH /questions/{id}` with only `correctIndex`.
    async fn update_correct_index(
        &self,
        id: &QuestionId,
        correct_index: usize,
    ) -> Result<(), StoreError>;
}

/// A single round trip to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreRequest {
    FetchAll,
    Create(NewQuestion),
    Delete(QuestionId),
    UpdateCorrectIndex { id: QuestionId, correct_index: usize },
}

/// What came back from a [`StoreRequest`].
#[derive(Debug)]
pub enum StoreOutcome {
    Fetched(Result<Vec<Question>, StoreError>),
    Created(Result<Question, StoreError>),
    Deleted {
        id: QuestionId,
        result: Result<(), StoreError>,
    },
    Updated {
        id: QuestionId,
        correct_index: usize,
        result: Result<(), StoreError>,
    },
}

impl StoreOutcome {
    pub fn is_ok(&self) -> bool {
        match self {
            StoreOutcome::Fetched(r) => r.is_ok(),
            StoreOutcome::Created(r) => r.is_ok(),
            StoreOutcome::Deleted { result, .. } | StoreOutcome::Updated { result, .. } => {
                result.is_ok()
            }
        }
    }
}

/// Run one request against the store. Never panics; failures are carried in
/// the outcome.
pub async fn execute(store: &dyn QuestionStore, request: StoreRequest) -> StoreOutcome {
    match request {
        StoreRequest::FetchAll => StoreOutcome::Fetched(store.fetch_all().await),
        StoreRequest::Create(question) => StoreOutcome::Created(store.create(&question).await),
        StoreRequest::Delete(id) => {
            let result = store.delete(&id).await;
            StoreOutcome::Deleted { id, result }
        }
        StoreRequest::UpdateCorrectIndex { id, correct_index } => {
            let result = store.update_correct_index(&id, correct_index).await;
            StoreOutcome::Updated {
                id,
                correct_index,
                result,
            }
        }
    }
}
