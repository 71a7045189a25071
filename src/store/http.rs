//! reqwest-backed store client.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::{CorrectIndexPatch, NewQuestion, Question, QuestionId};

use super::QuestionStore;

/// Talks to `{base_url}/questions` over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpQuestionStore {
    client: Client,
    questions_url: String,
}

impl HttpQuestionStore {
    pub fn new(base_url: &Url) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(Client::builder().build()?, base_url))
    }

    pub fn with_client(client: Client, base_url: &Url) -> Self {
        let questions_url = format!("{}/questions", base_url.as_str().trim_end_matches('/'));
        Self {
            client,
            questions_url,
        }
    }

    pub fn questions_url(&self) -> &str {
        &self.questions_url
    }

    fn question_url(&self, id: &QuestionId) -> String {
        format!("{}/{}", self.questions_url, id)
    }
}

/// Turn transport errors and non-success statuses into [`StoreError`].
fn check(sent: Result<Response, reqwest::Error>) -> Result<Response, StoreError> {
    let response = sent.map_err(StoreError::Transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Status { status });
    }
    Ok(response)
}

#[async_trait]
impl QuestionStore for HttpQuestionStore {
    async fn fetch_all(&self) -> Result<Vec<Question>, StoreError> {
        debug!(url = %self.questions_url, "GET questions");
        let response = check(self.client.get(&self.questions_url).send().await)?;
        let questions: Vec<Question> = response.json().await.map_err(StoreError::Decode)?;
        info!(count = questions.len(), "fetched questions");
        Ok(questions)
    }

    async fn create(&self, question: &NewQuestion) -> Result<Question, StoreError> {
        debug!(url = %self.questions_url, prompt = %question.prompt, "POST question");
        let response = check(
            self.client
                .post(&self.questions_url)
                .json(question)
                .send()
                .await,
        )?;
        let created: Question = response.json().await.map_err(StoreError::Decode)?;
        info!(id = %created.id, "created question");
        Ok(created)
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), StoreError> {
        let url = self.question_url(id);
        debug!(%url, "DELETE question");
        check(self.client.delete(&url).send().await)?;
        info!(%id, "deleted question");
        Ok(())
    }

    async fn update_correct_index(
        &self,
        id: &QuestionId,
        correct_index: usize,
    ) -> Result<(), StoreError> {
        let url = self.question_url(id);
        debug!(%url, correct_index, "PATCH question");
        check(
            self.client
                .patch(&url)
                .json(&CorrectIndexPatch { correct_index })
                .send()
                .await,
        )?;
        info!(%id, correct_index, "updated correct answer");
        Ok(())
    }
}
