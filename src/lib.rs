//! # quiz-admin
//!
//! A terminal admin console for the quiz question store: list questions,
//! add new ones, delete them, and change which answer is correct.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_admin::{Config, QuizAdmin, AdminError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AdminError> {
//!     let config = Config::new("http://localhost:4000", true)?;
//!     QuizAdmin::new(&config)?.run().await
//! }
//! ```
//!
//! The controllers are usable without the terminal: build an [`Admin`],
//! run each [`Dispatch`] it hands out with [`store::execute`] and feed the
//! result back through [`Admin::complete`].

pub mod admin;
pub mod config;
pub mod controller;
pub mod error;
mod input;
pub mod logging;
pub mod models;
pub mod store;
pub mod terminal;
mod ui;
pub mod validation;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::info;

pub use admin::{Admin, Completion, Dispatch, Origin};
pub use config::Config;
pub use controller::Page;
pub use error::{AdminError, ConfigError, StoreError};
pub use models::{Draft, DraftField, NewQuestion, Question, QuestionId};
pub use store::{HttpQuestionStore, QuestionStore};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// An admin console bound to one question store.
pub struct QuizAdmin {
    admin: Admin,
    store: Arc<dyn QuestionStore>,
}

impl QuizAdmin {
    /// Connect to the store named in the configuration.
    pub fn new(config: &Config) -> Result<Self, AdminError> {
        let store = HttpQuestionStore::new(&config.base_url)?;
        info!(url = store.questions_url(), "using question store");
        Ok(Self::with_store(Arc::new(store), config.confirm_delete))
    }

    /// Use any store implementation, e.g. an in-process one.
    pub fn with_store(store: Arc<dyn QuestionStore>, confirm_delete: bool) -> Self {
        Self {
            admin: Admin::new(confirm_delete),
            store,
        }
    }

    /// Run the console in the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), AdminError> {
        let mut session = terminal::TerminalSession::start()?;
        run_event_loop(session.terminal(), &mut self.admin, self.store).await
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AdminTerminal,
    admin: &mut Admin,
    store: Arc<dyn QuestionStore>,
) -> Result<(), AdminError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();

    spawn_dispatch(&store, &tx, admin.activate());

    loop {
        while let Ok(completion) = rx.try_recv() {
            admin.complete(completion);
        }

        if admin.should_quit {
            break;
        }

        terminal.draw(|frame| ui::render(frame, admin))?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if let Some(dispatch) = input::handle_key(admin, key) {
                    spawn_dispatch(&store, &tx, dispatch);
                }
            }
        }
    }

    info!("admin console closed");
    Ok(())
}

/// Run a store round trip in the background and post the result back to the
/// event loop. The request runs to completion even if the UI has moved on.
fn spawn_dispatch(
    store: &Arc<dyn QuestionStore>,
    tx: &mpsc::UnboundedSender<Completion>,
    dispatch: Dispatch,
) {
    let store = Arc::clone(store);
    let tx = tx.clone();
    tokio::spawn(async move {
        let Dispatch { origin, request } = dispatch;
        let outcome = store::execute(store.as_ref(), request).await;
        // receiver only goes away when the console is closing
        let _ = tx.send(Completion::new(origin, outcome));
    });
}
