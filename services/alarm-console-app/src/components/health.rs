//! Landing page with the API liveness indicator

use leptos::prelude::*;

use crate::api::Health;

/// Shows the status reported by /api/health
#[component]
pub fn HomePage() -> impl IntoView {
    let health = LocalResource::new(|| async move { fetch_health().await });

    view! {
        <main class="page">
            <h1>"Alarm Supervision Centre"</h1>
            <p>
                "API health: "
                {move || match health.get() {
                    None => "...".to_string(),
                    Some(Ok(h)) => h.status,
                    Some(Err(e)) => e.to_string(),
                }}
            </p>
            <a href="/alarms">"View alarms"</a>
        </main>
    }
}

async fn fetch_health() -> crate::Result<Health> {
    let client = crate::default_client()?;
    client.get_json::<Health>("/api/health").await
}
