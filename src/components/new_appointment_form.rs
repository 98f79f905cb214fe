//! New Appointment Form Component
//!
//! Title and date inputs bound to the book's draft.

use leptos::prelude::*;

use crate::store::{store_submit_draft, use_app_store, AppStateStoreFields};

/// Form for creating appointments
#[component]
pub fn NewAppointmentForm() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_draft(&store);
    };

    view! {
        <form class="new-appointment-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Appointment title"
                prop:value=move || store.book().with(|book| book.draft().title.clone())
                on:input=move |ev| store.book().write().set_draft_title(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || store.book().with(|book| book.draft().date.clone())
                on:input=move |ev| store.book().write().set_draft_date(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
