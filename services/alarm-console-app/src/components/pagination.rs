//! Pagination controls

use leptos::prelude::*;

use crate::params::{QueryChange, PAGE_SIZE_OPTIONS};
use crate::view::Pagination;

/// Previous/next buttons and the page-size selector. Buttons at a boundary
/// are disabled, not hidden.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] page_size: Signal<u32>,
    on_change: Callback<QueryChange>,
) -> impl IntoView {
    view! {
        <footer class="pagination">
            <button
                class="control"
                disabled=move || pagination.get().prev_disabled
                on:click=move |_| on_change.run(QueryChange::page(pagination.get_untracked().prev_page()))
            >
                "< Previous"
            </button>
            <span>"Page " {move || pagination.get().page}</span>
            <button
                class="control"
                disabled=move || pagination.get().next_disabled
                on:click=move |_| on_change.run(QueryChange::page(pagination.get_untracked().next_page()))
            >
                "Next >"
            </button>
            <select
                class="control page-size"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(QueryChange::page_size(size));
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|n| view! { <option value=n.to_string()>{format!("{}/page", n)}</option> })
                    .collect_view()}
            </select>
        </footer>
    }
}
