//! Year Section Component
//!
//! A year badge followed by that year's milestone cards.

use leptos::prelude::*;
use timeline_core::{Milestone, YearGroup};

use crate::store::{store_open_edit, use_page_store};

#[component]
pub fn YearSection(group: YearGroup) -> impl IntoView {
    view! {
        <div class="year-section">
            <h4 class="year-badge">{group.year}</h4>
            {group
                .milestones
                .into_iter()
                .map(|milestone| view! { <MilestoneCard milestone=milestone /> })
                .collect_view()}
        </div>
    }
}

/// Clicking a card opens it in the form for editing
#[component]
fn MilestoneCard(milestone: Milestone) -> impl IntoView {
    let store = use_page_store();

    let class = match milestone.category() {
        Some(category) => format!("timeline-card category-{}", category.css_class()),
        None => "timeline-card".to_string(),
    };
    let date = milestone.date.clone();
    let category = milestone.category.clone();
    let note = milestone.note.clone();

    view! {
        <div class=class on:click=move |_| store_open_edit(&store, &milestone)>
            <small>{date}</small>
            <h6>{category}</h6>
            <p>{note}</p>
        </div>
    }
}
