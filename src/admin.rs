//! Composition of the controllers for one admin session.
//!
//! `Admin` owns the application controller for the whole session and mounts
//! the form or item controllers that belong to the current page. Operations
//! that need the store return a [`Dispatch`]; whoever runs it hands the
//! result back through [`Admin::complete`].

use tracing::debug;

use crate::controller::{
    AppController, DeleteAction, FormController, ItemController, ListView, MountToken, Mounts,
    Page,
};
use crate::models::QuestionId;
use crate::store::{StoreOutcome, StoreRequest};

/// Which controller asked for a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    App,
    Form(MountToken),
    Item { id: QuestionId, token: MountToken },
}

/// A store request plus the controller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub origin: Origin,
    pub request: StoreRequest,
}

/// A finished [`Dispatch`].
#[derive(Debug)]
pub struct Completion {
    pub origin: Origin,
    pub outcome: StoreOutcome,
}

impl Completion {
    pub fn new(origin: Origin, outcome: StoreOutcome) -> Self {
        Self { origin, outcome }
    }
}

pub struct Admin {
    app: AppController,
    form: Option<FormController>,
    items: Vec<ItemController>,
    selected: usize,
    confirm_delete: bool,
    mounts: Mounts,
    pub should_quit: bool,
}

impl Admin {
    pub fn new(confirm_delete: bool) -> Self {
        let mut admin = Self {
            app: AppController::new(),
            form: None,
            items: Vec::new(),
            selected: 0,
            confirm_delete,
            mounts: Mounts::new(),
            should_quit: false,
        };
        admin.sync_mounts();
        admin
    }

    /// The initial load.
    pub fn activate(&mut self) -> Dispatch {
        self.fetch()
    }

    pub fn app(&self) -> &AppController {
        &self.app
    }

    pub fn page(&self) -> Page {
        self.app.page()
    }

    pub fn form(&self) -> Option<&FormController> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormController> {
        self.form.as_mut()
    }

    pub fn items(&self) -> &[ItemController] {
        &self.items
    }

    pub fn item(&self, id: &QuestionId) -> Option<&ItemController> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// What the list page is showing.
    pub fn list_view(&self) -> ListView<'_> {
        ListView::select(self.app.is_loading(), self.app.error(), self.app.questions())
    }

    /// The item whose delete dialog is open, if any.
    pub fn confirming(&self) -> Option<&ItemController> {
        self.items.iter().find(|i| i.is_confirm_open())
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn change_page(&mut self, page: Page) {
        self.app.change_page(page);
        self.sync_mounts();
    }

    pub fn retry(&mut self) -> Dispatch {
        let request = self.app.retry();
        Dispatch {
            origin: Origin::App,
            request,
        }
    }

    pub fn refresh(&mut self) -> Dispatch {
        self.fetch()
    }

    /// Submit the form, if it is mounted and passes validation.
    pub fn submit_form(&mut self) -> Option<Dispatch> {
        let loading = self.app.is_initial_load();
        let form = self.form.as_mut()?;
        let question = form.on_submit(loading)?;
        let origin = Origin::Form(form.mount());
        let request = self.app.create(question);
        Some(Dispatch { origin, request })
    }

    /// Change the selected item's correct answer.
    pub fn change_correct_answer(&mut self, index: usize) -> Option<Dispatch> {
        let item = self.shown_item_mut()?;
        let index = item.on_correct_answer_change(index)?;
        let id = item.id().clone();
        let origin = Origin::Item {
            id: id.clone(),
            token: item.mount(),
        };
        let request = self.app.update_correct_answer(id, index);
        Some(Dispatch { origin, request })
    }

    /// Shift the selected item's correct answer by one, wrapping around.
    pub fn cycle_correct_answer(&mut self, forward: bool) -> Option<Dispatch> {
        if !self.items_shown() {
            return None;
        }
        let item = self.items.get(self.selected)?;
        let count = self.app.question(item.id())?.answers.len();
        if count == 0 {
            return None;
        }
        let current = item.local_correct_index();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.change_correct_answer(next)
    }

    /// Delete the selected item, or open its confirmation dialog.
    pub fn request_delete(&mut self) -> Option<Dispatch> {
        let item = self.shown_item_mut()?;
        match item.on_delete_request() {
            DeleteAction::Delete => {
                let id = item.id().clone();
                Some(self.app_delete(id))
            }
            DeleteAction::Confirm => None,
        }
    }

    pub fn confirm_delete(&mut self) -> Option<Dispatch> {
        let item = self.items.iter_mut().find(|i| i.is_confirm_open())?;
        if !item.confirm_delete() {
            return None;
        }
        let id = item.id().clone();
        Some(self.app_delete(id))
    }

    pub fn cancel_delete(&mut self) {
        for item in &mut self.items {
            item.cancel_delete();
        }
    }

    /// Apply a finished round trip.
    ///
    /// The originating form or item only sees the result if it is still
    /// mounted under the same token; the application controller always does.
    pub fn complete(&mut self, completion: Completion) {
        let Completion { origin, outcome } = completion;
        let ok = outcome.is_ok();

        match &origin {
            Origin::App => {}
            Origin::Form(token) => match self.form.as_mut() {
                Some(form) if form.mount() == *token => form.on_create_result(ok),
                _ => debug!(?origin, "form gone, dropping completion"),
            },
            Origin::Item { id, token } => {
                match self
                    .items
                    .iter_mut()
                    .find(|i| i.id() == id && i.mount() == *token)
                {
                    Some(item) => item.on_update_result(ok),
                    None => debug!(?origin, "item gone, dropping completion"),
                }
            }
        }

        self.app.apply(&outcome);
        self.sync_mounts();
    }

    /// Items only take input while the populated list is on screen.
    fn items_shown(&self) -> bool {
        self.page() == Page::List && matches!(self.list_view(), ListView::Populated(_))
    }

    fn shown_item_mut(&mut self) -> Option<&mut ItemController> {
        if !self.items_shown() {
            return None;
        }
        self.items.get_mut(self.selected)
    }

    fn fetch(&mut self) -> Dispatch {
        Dispatch {
            origin: Origin::App,
            request: self.app.fetch_all(),
        }
    }

    fn app_delete(&mut self, id: QuestionId) -> Dispatch {
        Dispatch {
            origin: Origin::App,
            request: self.app.delete(id),
        }
    }

    /// Mount what the current page shows and unmount the rest.
    fn sync_mounts(&mut self) {
        match self.app.page() {
            Page::Form => {
                self.items.clear();
                if self.form.is_none() {
                    self.form = Some(FormController::new(self.mounts.mount()));
                }
            }
            Page::List => {
                self.form = None;
                let mut previous = std::mem::take(&mut self.items);
                for question in self.app.questions() {
                    let item = match previous.iter().position(|i| i.id() == &question.id) {
                        Some(pos) => {
                            let mut item = previous.swap_remove(pos);
                            item.sync(question);
                            item
                        }
                        None => ItemController::new(
                            self.mounts.mount(),
                            question,
                            self.confirm_delete,
                        ),
                    };
                    self.items.push(item);
                }
            }
        }

        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}
