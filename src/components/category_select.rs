//! Category Select Component
//!
//! Dropdown over the fixed category set, bound to the draft.

use leptos::prelude::*;
use timeline_core::{Category, Field};

use crate::store::{store_set_field, use_page_store, PageStateStoreFields};

#[component]
pub fn CategorySelect() -> impl IntoView {
    let store = use_page_store();
    let current = move || store.editor().read().draft().category.clone();

    view! {
        <select
            name=Field::Category.as_str()
            prop:value=current
            on:change=move |ev| store_set_field(&store, Field::Category, event_target_value(&ev))
        >
            <option value="">"Select Category"</option>
            {Category::ALL
                .iter()
                .map(|category| {
                    let label = category.as_str();
                    view! {
                        <option value=label selected=move || current() == label>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
