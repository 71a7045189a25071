//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::admin::{Admin, Dispatch};
use crate::controller::Page;

/// Apply one key press. Returns the store round trip it started, if any.
pub fn handle_key(admin: &mut Admin, key: KeyEvent) -> Option<Dispatch> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            admin.should_quit = true;
            return None;
        }
        KeyCode::F(1) => {
            admin.change_page(Page::List);
            return None;
        }
        KeyCode::F(2) => {
            admin.change_page(Page::Form);
            return None;
        }
        _ => {}
    }

    if admin.confirming().is_some() {
        return handle_confirm_input(admin, key.code);
    }

    match admin.page() {
        Page::List => handle_list_input(admin, key.code),
        Page::Form => handle_form_input(admin, key.code, ctrl),
    }
}

fn handle_confirm_input(admin: &mut Admin, key: KeyCode) -> Option<Dispatch> {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => admin.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            admin.cancel_delete();
            None
        }
        _ => None,
    }
}

fn handle_list_input(admin: &mut Admin, key: KeyCode) -> Option<Dispatch> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            admin.select_next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            admin.select_previous();
            None
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            admin.change_correct_answer(index)
        }
        KeyCode::Right | KeyCode::Char('l') => admin.cycle_correct_answer(true),
        KeyCode::Left | KeyCode::Char('h') => admin.cycle_correct_answer(false),
        KeyCode::Char('d') | KeyCode::Delete => admin.request_delete(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if admin.app().error().is_some() {
                Some(admin.retry())
            } else {
                Some(admin.refresh())
            }
        }
        KeyCode::Char('n') => {
            admin.change_page(Page::Form);
            None
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            admin.should_quit = true;
            None
        }
        _ => None,
    }
}

fn handle_form_input(admin: &mut Admin, key: KeyCode, ctrl: bool) -> Option<Dispatch> {
    match key {
        KeyCode::Esc => {
            admin.change_page(Page::List);
            return None;
        }
        KeyCode::Enter => return admin.submit_form(),
        _ => {}
    }

    let loading = admin.app().is_initial_load();
    let form = admin.form_mut()?;
    if form.is_disabled(loading) {
        return None;
    }

    match key {
        KeyCode::Char('r') if ctrl => form.on_reset(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Right => form.cycle_correct_index(true),
        KeyCode::Left => form.cycle_correct_index(false),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) if !ctrl => form.push_char(c),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::admin::Completion;
    use crate::error::StoreError;
    use crate::models::{DraftField, Question, QuestionId};
    use crate::store::{StoreOutcome, StoreRequest};

    fn press(admin: &mut Admin, code: KeyCode) -> Option<Dispatch> {
        handle_key(admin, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        let mut admin = Admin::new(false);
        press(&mut admin, KeyCode::F(2));
        assert_eq!(admin.page(), Page::Form);
        press(&mut admin, KeyCode::Esc);
        assert_eq!(admin.page(), Page::List);
        press(&mut admin, KeyCode::Char('n'));
        assert_eq!(admin.page(), Page::Form);
        press(&mut admin, KeyCode::F(1));
        assert_eq!(admin.page(), Page::List);
    }

    #[test]
    fn test_typing_into_form() {
        let mut admin = Admin::new(false);
        press(&mut admin, KeyCode::F(2));
        for c in "Which one?".chars() {
            press(&mut admin, KeyCode::Char(c));
        }
        press(&mut admin, KeyCode::Tab);
        press(&mut admin, KeyCode::Char('x'));

        let form = admin.form().unwrap();
        assert_eq!(form.draft().prompt, "Which one?");
        assert_eq!(form.draft().answer1, "x");
        assert_eq!(form.focus(), DraftField::Answer1);

        // invalid: answer 2 missing, nothing is sent
        assert!(press(&mut admin, KeyCode::Enter).is_none());
        assert!(admin.form().unwrap().errors().field(DraftField::Answer2).is_some());
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut admin = Admin::new(false);
        press(&mut admin, KeyCode::F(2));
        handle_key(
            &mut admin,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(admin.should_quit);
        assert_eq!(admin.form().unwrap().draft().prompt, "");
    }

    #[test]
    fn test_reload_from_list() {
        let mut admin = Admin::new(false);
        let dispatch = press(&mut admin, KeyCode::Char('r')).unwrap();
        assert_eq!(dispatch.request, StoreRequest::FetchAll);
        assert!(admin.app().is_loading());
    }

    #[test]
    fn test_item_keys_do_nothing_on_error_screen() {
        let mut admin = Admin::new(false);
        let dispatch = admin.activate();
        admin.complete(Completion::new(
            dispatch.origin,
            StoreOutcome::Fetched(Ok(vec![Question {
                id: QuestionId::Number(1),
                prompt: "lorem testum 1".to_string(),
                answers: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_index: 0,
            }])),
        ));
        let dispatch = press(&mut admin, KeyCode::Char('3')).unwrap();
        admin.complete(Completion::new(
            dispatch.origin,
            StoreOutcome::Updated {
                id: QuestionId::Number(1),
                correct_index: 2,
                result: Err(StoreError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                }),
            },
        ));
        assert!(admin.app().error().is_some());

        assert!(press(&mut admin, KeyCode::Char('d')).is_none());
        assert!(press(&mut admin, KeyCode::Char('2')).is_none());
        assert!(press(&mut admin, KeyCode::Char('l')).is_none());
        assert_eq!(admin.items()[0].local_correct_index(), 0);

        let dispatch = press(&mut admin, KeyCode::Char('r')).unwrap();
        assert_eq!(dispatch.request, StoreRequest::FetchAll);
        assert!(press(&mut admin, KeyCode::Char('d')).is_none());
    }
}
