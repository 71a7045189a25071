mod common;

use axum::{Router, routing::get};
use common::{MockStore, spawn_store};
use quiz_admin::store::QuestionStore;
use quiz_admin::{HttpQuestionStore, NewQuestion, QuestionId, StoreError};
use reqwest::{StatusCode, Url};
use tokio::net::TcpListener;

#[tokio::test]
async fn fetch_create_patch_delete() {
    let mock = MockStore::seeded();
    let store = spawn_store(mock.clone()).await;

    let questions = store.fetch_all().await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].prompt, "lorem testum 1");

    let created = store
        .create(&NewQuestion {
            prompt: "What does PATCH change?".to_string(),
            answers: [
                "Only the fields sent".to_string(),
                "Everything".to_string(),
                "Nothing".to_string(),
                "The id".to_string(),
            ],
            correct_index: 0,
        })
        .await
        .unwrap();
    assert_eq!(created.id, QuestionId::Number(3));

    store.update_correct_index(&created.id, 2).await.unwrap();
    assert_eq!(mock.snapshot()[2].correct_index, 2);
    // other fields untouched
    assert_eq!(mock.snapshot()[2].prompt, "What does PATCH change?");

    store.delete(&created.id).await.unwrap();
    assert_eq!(mock.snapshot().len(), 2);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let store = spawn_store(MockStore::seeded()).await;

    let err = store.delete(&QuestionId::Number(42)).await.unwrap_err();
    assert!(err.is_not_found());

    let err = store
        .update_correct_index(&QuestionId::Number(42), 1)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn unreadable_body_is_a_decode_error() {
    let app = Router::new().route("/questions", get(|| async { "definitely not json" }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();
    let store = HttpQuestionStore::new(&base).unwrap();
    let err = store.fetch_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn unreachable_store_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
    let store = HttpQuestionStore::new(&base).unwrap();
    let err = store.fetch_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)), "{:?}", err);
}
