//! Search Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Filters the list by title as the user types
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search appointments..."
                prop:value=move || store.book().with(|book| book.search_term().to_string())
                on:input=move |ev| store.book().write().set_search_term(event_target_value(&ev))
            />
        </div>
    }
}
