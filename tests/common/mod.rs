//! In-process mock of the `/questions` resource.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use quiz_admin::store::execute;
use quiz_admin::{Admin, Completion, Dispatch, HttpQuestionStore, NewQuestion, Question, QuestionId};
use reqwest::Url;
use tokio::net::TcpListener;

#[derive(Clone, Default)]
pub struct MockStore {
    questions: Arc<Mutex<Vec<Question>>>,
    next_id: Arc<Mutex<u64>>,
    fail_patches: Arc<AtomicBool>,
}

impl MockStore {
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut questions = store.questions.lock().unwrap();
            questions.push(seed(1, "lorem testum 1", 2));
            questions.push(seed(2, "lorem testum 2", 0));
        }
        *store.next_id.lock().unwrap() = 3;
        store
    }

    pub fn fail_patches(&self, fail: bool) {
        self.fail_patches.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Question> {
        self.questions.lock().unwrap().clone()
    }
}

fn seed(id: u64, prompt: &str, correct_index: usize) -> Question {
    Question {
        id: QuestionId::Number(id),
        prompt: prompt.to_string(),
        answers: vec![
            "choice 1".to_string(),
            "choice 2".to_string(),
            "choice 3".to_string(),
            "choice 4".to_string(),
        ],
        correct_index,
    }
}

async fn list(State(store): State<MockStore>) -> Json<Vec<Question>> {
    Json(store.snapshot())
}

async fn create(
    State(store): State<MockStore>,
    Json(body): Json<NewQuestion>,
) -> (StatusCode, Json<Question>) {
    let id = {
        let mut next = store.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    };
    let question = Question {
        id: QuestionId::Number(id),
        prompt: body.prompt,
        answers: body.answers.to_vec(),
        correct_index: body.correct_index,
    };
    store.questions.lock().unwrap().push(question.clone());
    (StatusCode::CREATED, Json(question))
}

async fn remove(State(store): State<MockStore>, Path(id): Path<u64>) -> StatusCode {
    let mut questions = store.questions.lock().unwrap();
    let before = questions.len();
    questions.retain(|q| q.id != QuestionId::Number(id));
    if questions.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn update(
    State(store): State<MockStore>,
    Path(id): Path<u64>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Question>, StatusCode> {
    if store.fail_patches.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let correct_index = body
        .get("correctIndex")
        .and_then(|v| v.as_u64())
        .ok_or(StatusCode::BAD_REQUEST)? as usize;

    let mut questions = store.questions.lock().unwrap();
    let question = questions
        .iter_mut()
        .find(|q| q.id == QuestionId::Number(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    question.correct_index = correct_index;
    Ok(Json(question.clone()))
}

/// Serve the mock on a random local port and return a client for it.
pub async fn spawn_store(store: MockStore) -> HttpQuestionStore {
    let app = Router::new()
        .route("/questions", get(list).post(create))
        .route("/questions/:id", patch(update).delete(remove))
        .with_state(store);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
    HttpQuestionStore::new(&base).unwrap()
}

/// Run a dispatch against the store and apply the result, the way the event
/// loop does.
pub async fn drive(admin: &mut Admin, store: &HttpQuestionStore, dispatch: Dispatch) {
    let Dispatch { origin, request } = dispatch;
    let outcome = execute(store, request).await;
    admin.complete(Completion::new(origin, outcome));
}

pub fn prompts(admin: &Admin) -> Vec<String> {
    admin
        .app()
        .questions()
        .iter()
        .map(|q| q.prompt.clone())
        .collect()
}
