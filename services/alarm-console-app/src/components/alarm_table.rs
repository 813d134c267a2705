//! Alarm table component

use leptos::prelude::*;

use crate::api::Alarm;
use crate::components::severity_badge::SeverityBadge;
use crate::format::format_timestamp;
use crate::view::{TableBody, TABLE_COLUMNS};

/// The alarm table. Loading, error and empty states each render as a single
/// row spanning every column.
#[component]
pub fn AlarmTable(#[prop(into)] body: Signal<TableBody>) -> impl IntoView {
    view! {
        <section class="table-wrap">
            <table class="alarm-table">
                <thead>
                    <tr>
                        <th class="left">"Site"</th>
                        <th class="left">"Alarm"</th>
                        <th>"Severity"</th>
                        <th>"Status"</th>
                        <th>"Started"</th>
                        <th>"Cleared"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match body.get() {
                        TableBody::Loading => {
                            view! { <MessageRow class="message" text="Loading...".to_string() /> }
                                .into_any()
                        }
                        TableBody::Error(message) => {
                            view! {
                                <MessageRow
                                    class="message error"
                                    text=format!("Failed to load alarms: {}", message)
                                />
                            }
                                .into_any()
                        }
                        TableBody::Empty => {
                            view! { <MessageRow class="message" text="No alarms".to_string() /> }
                                .into_any()
                        }
                        TableBody::Rows(items) => {
                            items
                                .into_iter()
                                .map(|alarm| view! { <AlarmRow alarm=alarm /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn MessageRow(class: &'static str, text: String) -> impl IntoView {
    view! {
        <tr>
            <td class=class colspan=TABLE_COLUMNS.to_string()>{text}</td>
        </tr>
    }
}

#[component]
fn AlarmRow(alarm: Alarm) -> impl IntoView {
    let started = format_timestamp(Some(&alarm.started_at));
    let cleared = format_timestamp(alarm.cleared_at.as_deref());
    let Alarm {
        site_id,
        site_name,
        alarm_code,
        alarm_label,
        severity,
        status,
        ..
    } = alarm;

    view! {
        <tr class="alarm-row">
            <td>{site_name}" "<span class="muted">"("{site_id}")"</span></td>
            <td>{alarm_label}" "<span class="muted">"["{alarm_code}"]"</span></td>
            <td class="center">
                <SeverityBadge severity=severity />
            </td>
            <td class="center">
                <span class="status">{status.to_string()}</span>
            </td>
            <td>{started}</td>
            <td>{cleared}</td>
        </tr>
    }
}
