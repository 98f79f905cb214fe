//! Edit Modal Component
//!
//! Dialog bound to the book's edit buffer. Shown while `edit_modal_open` is
//! set; a successful save or the close button dismisses it.

use leptos::prelude::*;

use crate::store::{store_close_edit, store_update_appointment, use_app_store, AppStateStoreFields};

#[component]
pub fn EditModal() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_update_appointment(&store);
    };

    let edit_title = move || {
        store.book().with(|book| book.edit_buffer().map(|e| e.title.clone()).unwrap_or_default())
    };
    let edit_date = move || {
        store.book().with(|book| book.edit_buffer().map(|e| e.date.clone()).unwrap_or_default())
    };

    // Row number as listed under the current search
    let heading = move || {
        store.book().with(|book| {
            book.edit_buffer()
                .map(|e| format!("Edit appointment #{}", e.view_index + 1))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || store.edit_modal_open().get()>
            <div class="modal-backdrop" on:click=move |_| store_close_edit(&store)>
                <form
                    class="modal"
                    on:submit=on_submit
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <h2>{heading}</h2>
                    <input
                        type="text"
                        prop:value=edit_title
                        on:input=move |ev| store.book().write().set_edit_title(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=edit_date
                        on:input=move |ev| store.book().write().set_edit_date(event_target_value(&ev))
                    />
                    <div class="modal-footer">
                        <button type="button" on:click=move |_| store_close_edit(&store)>
                            "Close"
                        </button>
                        <button type="submit">"Save changes"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
