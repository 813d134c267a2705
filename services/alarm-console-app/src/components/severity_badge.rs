//! Severity badge component

use leptos::prelude::*;

use crate::api::Severity;

/// CSS class for a severity badge. Unknown severities get a visible
/// fallback style rather than no badge at all.
pub fn severity_class(severity: &Severity) -> &'static str {
    match severity {
        Severity::Info => "badge badge-info",
        Severity::Warn => "badge badge-warn",
        Severity::Major => "badge badge-major",
        Severity::Critical => "badge badge-critical",
        Severity::Other(_) => "badge badge-unknown",
    }
}

/// A colored badge showing the alarm severity
#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    let class = severity_class(&severity);
    view! {
        <span class=class>{severity.to_string()}</span>
    }
}
