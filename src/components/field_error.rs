use leptos::prelude::*;
use timeline_core::Field;

use crate::store::{use_page_store, PageStateStoreFields};

/// Validation message slot under a form field
#[component]
pub fn FieldError(field: Field) -> impl IntoView {
    let store = use_page_store();

    let message = move || {
        let message = store.editor().read().error(field).map(str::to_string);
        message.map(|message| view! { <small class="field-error">{message}</small> })
    };

    view! { <div class="error-slot">{message}</div> }
}
