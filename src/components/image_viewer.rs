//! Image Viewer
//!
//! Full-size view of the draft image. Clicking the backdrop closes it.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::store::{store_set_image_viewer, use_page_store, PageStateStoreFields};

#[component]
pub fn ImageViewer() -> impl IntoView {
    let store = use_page_store();
    let image = move || store.editor().read().draft().image_base64.clone();

    view! {
        <div
            class="custom-modal-backdrop"
            style="z-index: 3000;"
            on:click=move |_| store_set_image_viewer(&store, false)
        >
            <div class="image-view-modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
                <img src=image alt="full-view" />
                <button on:click=move |_| store_set_image_viewer(&store, false)>"✕"</button>
            </div>
        </div>
    }
}
