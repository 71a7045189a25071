//! Headless controllers behind the admin screens.

pub mod app;
pub mod form;
pub mod item;
pub mod list;
pub mod mount;

pub use app::{AppController, Page};
pub use form::FormController;
pub use item::{DeleteAction, ItemController};
pub use list::{ListEntry, ListView};
pub use mount::{MountToken, Mounts};
