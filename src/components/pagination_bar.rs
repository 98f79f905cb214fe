//! Pagination Bar Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Previous / page numbers / next. Hidden while everything fits on one page.
#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_app_store();

    let pages = move || store.book().with(|book| book.page_numbers());
    let has_pages = move || store.book().with(|book| book.total_pages() > 1);

    view! {
        <Show when=has_pages>
            <nav class="pagination-bar">
                <button
                    disabled=move || store.book().with(|book| !book.has_prev_page())
                    on:click=move |_| store.book().write().prev_page()
                >
                    "Previous"
                </button>

                <For
                    each=pages
                    key=|page| *page
                    children=move |page| {
                        let is_active = move || store.book().with(|book| book.current_page() == page);
                        view! {
                            <button
                                class=move || if is_active() { "page-btn active" } else { "page-btn" }
                                on:click=move |_| store.book().write().go_to_page(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />

                <button
                    disabled=move || store.book().with(|book| !book.has_next_page())
                    on:click=move |_| store.book().write().next_page()
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
