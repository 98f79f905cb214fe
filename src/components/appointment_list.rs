//! Appointment List Component
//!
//! Cards for the current page. Row actions pass the row's index in the
//! filtered view, i.e. page offset plus position on the page.

use appointment_core::Appointment;
use leptos::prelude::*;

use crate::components::DeleteAppointmentButton;
use crate::store::{store_open_edit, use_app_store, AppStateStoreFields};

/// Current page of appointments
#[component]
pub fn AppointmentList() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        store.book().with(|book| {
            let offset = book.page_offset();
            book.paginated_appointments()
                .into_iter()
                .enumerate()
                .map(|(i, appt)| (offset + i, appt.clone()))
                .collect::<Vec<_>>()
        })
    };
    let has_rows = move || store.book().with(|book| book.filtered_len() > 0);

    view! {
        <Show
            when=has_rows
            fallback=|| view! { <p class="empty-state">"No appointments found."</p> }
        >
            <div class="appointment-grid">
                <For
                    each=rows
                    // Index is part of the key: the same entry at another index needs new handlers
                    key=|(index, appt)| (*index, appt.id, appt.title.clone(), appt.date)
                    children=move |(index, appt)| view! { <AppointmentCard index=index appointment=appt /> }
                />
            </div>
        </Show>
    }
}

/// Single appointment card with edit and delete actions
#[component]
fn AppointmentCard(index: usize, appointment: Appointment) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="appointment-card">
            <h3>{appointment.title.clone()}</h3>
            <p class="appointment-date">{appointment.display_date()}</p>
            <div class="appointment-actions">
                <button class="edit-btn" on:click=move |_| store_open_edit(&store, index)>
                    "Edit"
                </button>
                <DeleteAppointmentButton index=index title=appointment.title.clone() />
            </div>
        </div>
    }
}
