//! Main App component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::alarms_page::AlarmsPage;
use crate::components::health::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Alarm Console" />
        <Router>
            <Routes fallback=|| view! { <p>"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/alarms") view=AlarmsPage />
            </Routes>
        </Router>
    }
}
