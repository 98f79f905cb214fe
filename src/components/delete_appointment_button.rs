//! Delete Appointment Button Component
//!
//! Two-step delete on a card: the first click asks about the appointment by
//! title, the second removes it.

use leptos::prelude::*;

use crate::store::{store_delete_appointment, use_app_store};

/// Delete button for the row at `index` of the filtered view
#[component]
pub fn DeleteAppointmentButton(index: usize, #[prop(into)] title: String) -> impl IntoView {
    let store = use_app_store();
    let (confirming, set_confirming) = signal(false);
    let prompt = format!("Delete \"{}\"?", title);

    let content = move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            set_confirming.set(false);
                            store_delete_appointment(&store, index);
                        }
                    >
                        "Yes"
                    </button>
                    <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                        "No"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" on:click=move |_| set_confirming.set(true)>
                    "Delete"
                </button>
            }
            .into_any()
        }
    };

    view! { {content} }
}
