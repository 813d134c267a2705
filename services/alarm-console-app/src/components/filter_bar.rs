//! Filter controls for the alarms page

use leptos::prelude::*;

use crate::api::{AlarmStatus, Severity};
use crate::format::datetime_local_value;
use crate::params::{ListParams, ParamUpdate, QueryChange, ORDERING_OPTIONS};

fn first_value(values: Option<Vec<String>>) -> String {
    values
        .and_then(|v| v.into_iter().next())
        .unwrap_or_default()
}

/// `(value, label)` for each select option; the wire value doubles as label
fn option_pairs<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

/// Search box, severity/status/ordering selects and the time range.
///
/// Every control writes one query key through `on_change`. The search box
/// only commits on Enter so typing does not fire a request per keystroke.
#[component]
pub fn FilterBar(
    #[prop(into)] params: Signal<ListParams>,
    on_change: Callback<QueryChange>,
) -> impl IntoView {
    let commit = move |key: &'static str, value: String| {
        on_change.run(QueryChange::set(key, ParamUpdate::from_value(value)));
    };

    view! {
        <section class="filters">
            <input
                type="search"
                class="control"
                placeholder="Search site or alarm"
                prop:value=move || params.get().q.unwrap_or_default()
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        commit("q", event_target_value(&ev).trim().to_string());
                    }
                }
            />
            <select
                class="control"
                prop:value=move || first_value(params.get().severity)
                on:change=move |ev| commit("severity", event_target_value(&ev))
            >
                <option value="">"Severity (all)"</option>
                {option_pairs(Severity::KNOWN.iter().map(Severity::as_str))
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <select
                class="control"
                prop:value=move || first_value(params.get().status)
                on:change=move |ev| commit("status", event_target_value(&ev))
            >
                <option value="">"Status (all)"</option>
                {option_pairs(AlarmStatus::KNOWN.iter().map(AlarmStatus::as_str))
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <select
                class="control"
                prop:value=move || params.get().ordering_or_default().to_string()
                on:change=move |ev| commit("ordering", event_target_value(&ev))
            >
                {ORDERING_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <label class="range">
                "From "
                <input
                    type="datetime-local"
                    class="control"
                    prop:value=move || datetime_local_value(params.get().from.as_deref())
                    on:change=move |ev| commit("from", event_target_value(&ev))
                />
            </label>
            <label class="range">
                "To "
                <input
                    type="datetime-local"
                    class="control"
                    prop:value=move || datetime_local_value(params.get().to.as_deref())
                    on:change=move |ev| commit("to", event_target_value(&ev))
                />
            </label>
        </section>
    }
}
