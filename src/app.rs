//! Appointment App
//!
//! Root component: form, search, the current page of cards, pagination and
//! the edit dialog.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AppointmentList, EditModal, NewAppointmentForm, PaginationBar, SearchBar};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::load());
    provide_context(store);

    let summary = move || {
        store.book().with(|book| {
            format!(
                "{} of {} appointments",
                book.filtered_len(),
                book.appointments().len()
            )
        })
    };

    view! {
        <div class="app-layout">
            <h1>"Appointments"</h1>

            <NewAppointmentForm />
            <SearchBar />
            <AppointmentList />
            <PaginationBar />

            <p class="item-count">{summary}</p>

            <EditModal />
        </div>
    }
}
