//! Timeline Frontend App
//!
//! Shares the configuration, creates the page store and routes `/` to the timeline page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use timeline_core::TimelineConfig;

use crate::components::TimelinePage;
use crate::store::PageState;

#[component]
pub fn App(config: TimelineConfig) -> impl IntoView {
    // Provide configuration and the page store to all children
    provide_context(config);
    provide_context(Store::new(PageState::default()));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=TimelinePage />
            </Routes>
        </Router>
    }
}
