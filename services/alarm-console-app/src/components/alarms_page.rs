//! Alarms page: filters, table and pagination driven by the location query

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::api::{AlarmListResponse, Severity};
use crate::components::alarm_table::AlarmTable;
use crate::components::filter_bar::FilterBar;
use crate::components::pagination::PaginationControls;
use crate::components::severity_badge::severity_class;
use crate::params::{ListParams, LocationQuery, QueryChange};
use crate::query::{AlarmsQuery, QueryState};
use crate::view::AlarmsPageView;

/// The alarm list. Parameters come from the location query only; controls
/// navigate to a new query string and everything else follows from that.
#[component]
pub fn AlarmsPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let params = Memo::new(move |_| {
        ListParams::from_query(&LocationQuery::parse(&location.search.get()))
    });
    let state = RwSignal::new(QueryState::<AlarmListResponse>::default());

    let query = match crate::default_client() {
        Ok(client) => Some(Arc::new(AlarmsQuery::new(client))),
        Err(e) => {
            tracing::error!("Cannot create alarm API client: {}", e);
            state.set(QueryState {
                error: Some(e),
                ..QueryState::default()
            });
            None
        }
    };
    let query = StoredValue::new(query);

    Effect::new(move |_| {
        let params = params.get();
        if let Some(query) = query.get_value() {
            spawn_local(async move {
                query.load(params, move |s| state.set(s)).await;
            });
        }
    });

    let refresh = move |_: leptos::ev::MouseEvent| {
        if let Some(query) = query.get_value() {
            spawn_local(async move {
                query.refresh(move |s| state.set(s)).await;
            });
        }
    };

    let on_change = Callback::new(move |change: QueryChange| {
        tracing::debug!("Query change {:?}", change.updates());
        let next = LocationQuery::parse(&location.search.get_untracked()).apply(change);
        navigate(
            &next.href(&location.pathname.get_untracked()),
            NavigateOptions::default(),
        );
    });

    let page_view = Memo::new(move |_| AlarmsPageView::new(&params.get(), &state.get()));

    view! {
        <main class="page">
            <header class="page-header">
                <h1>"Alarms"</h1>
                <div class="totals">
                    <span class="totals-label">"On this page:"</span>
                    {Severity::KNOWN
                        .iter()
                        .cloned()
                        .map(|severity| {
                            let class = severity_class(&severity);
                            let label = severity.to_string();
                            view! {
                                <span class=class>
                                    {label}": "
                                    {move || page_view.get().totals.on_page.count(&severity)}
                                </span>
                            }
                        })
                        .collect_view()}
                    <span class="badge badge-total">
                        "Total matching: " {move || page_view.get().totals.total}
                    </span>
                    <Show when=move || page_view.get().is_fetching>
                        <span class="muted">"Refreshing..."</span>
                    </Show>
                    <button class="control" on:click=refresh>
                        "Refresh"
                    </button>
                </div>
            </header>
            <FilterBar params=params on_change=on_change />
            <AlarmTable body=Signal::derive(move || page_view.get().body) />
            <PaginationControls
                pagination=Signal::derive(move || page_view.get().pagination)
                page_size=Signal::derive(move || params.get().page_size_or_default())
                on_change=on_change
            />
        </main>
    }
}
