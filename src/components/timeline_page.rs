//! Timeline Page
//!
//! The only page: year-grouped milestone cards plus the add/edit form.

use leptos::prelude::*;
use timeline_core::group_by_year;

use crate::components::{MilestoneModal, YearSection};
use crate::commands;
use crate::store::{store_load, store_open_create, use_milestone_storage, use_page_store, PageStateStoreFields};

#[component]
pub fn TimelinePage() -> impl IntoView {
    let store = use_page_store();
    let storage = use_milestone_storage();

    // Load milestones on mount
    Effect::new(move |_| {
        store_load(&store, &storage, commands::now_ms());
    });

    // Regrouped from the full collection on every change
    let year_groups = move || {
        group_by_year(&store.milestones().read())
            .into_iter()
            .map(|group| view! { <YearSection group=group /> })
            .collect_view()
    };

    view! {
        <div class="timeline-wrapper">
            <div class="timeline-box">
                <h2 class="timeline-title">"TimeLine Visualizer"</h2>

                <button class="add-milestone-btn" on:click=move |_| store_open_create(&store)>
                    <i class="bi bi-journal-plus me-2"></i>
                    " Add MileStone"
                </button>

                {year_groups}
            </div>

            <Show when=move || store.form_open().get()>
                <MilestoneModal />
            </Show>
        </div>
    }
}
