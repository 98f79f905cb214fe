//! Global Application State Store
//!
//! Uses Leptos reactive_stores so the book and the modal flag react separately.

use appointment_core::{AppointmentBook, BookConfig, Outcome, StoreResult};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::storage::LocalStorage;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Appointments with their filter, pagination, draft and edit buffer
    pub book: AppointmentBook<LocalStorage>,
    /// Whether the edit dialog is showing
    pub edit_modal_open: bool,
}

impl AppState {
    /// Read the saved list; an unusable storage backend starts an empty book
    pub fn load() -> Self {
        let book = AppointmentBook::load(LocalStorage, BookConfig::default()).unwrap_or_else(|err| {
            tracing::error!(error = %err, "could not read saved appointments");
            AppointmentBook::empty(LocalStorage, BookConfig::default())
        });
        Self {
            book,
            edit_modal_open: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each helper takes one write guard at a time: all subfields share the
// store's lock.

fn report(action: &str, result: StoreResult<Outcome>) -> Outcome {
    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(action, error = %err, "failed to save appointments");
            Outcome::Ignored
        }
    }
}

/// Add the appointment drafted in the form
pub fn store_submit_draft(store: &AppStore) {
    let result = store.book().write().submit_draft();
    report("add", result);
}

/// Delete by filtered-view index
pub fn store_delete_appointment(store: &AppStore, view_index: usize) {
    let result = store.book().write().delete_appointment(view_index);
    report("delete", result);
}

/// Stage a row for editing and show the dialog
pub fn store_open_edit(store: &AppStore, view_index: usize) {
    let staged = store.book().write().open_edit_modal(view_index);
    if staged.is_applied() {
        *store.edit_modal_open().write() = true;
    }
}

/// Commit the edit; the dialog closes only when the edit was applied
pub fn store_update_appointment(store: &AppStore) {
    let result = store.book().write().update_appointment();
    if report("update", result).is_applied() {
        *store.edit_modal_open().write() = false;
    }
}

/// Dismiss the dialog and drop the staged edit
pub fn store_close_edit(store: &AppStore) {
    store.book().write().cancel_edit();
    *store.edit_modal_open().write() = false;
}
