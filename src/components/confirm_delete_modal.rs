//! Confirm Delete Modal
//!
//! Second step of deleting a milestone, stacked above the form.

use leptos::prelude::*;

use crate::store::{store_cancel_delete, store_confirm_delete, use_milestone_storage, use_page_store};

#[component]
pub fn ConfirmDeleteModal() -> impl IntoView {
    let store = use_page_store();
    let storage = use_milestone_storage();

    view! {
        <div class="custom-modal-backdrop">
            <div class="custom-modal confirm-modal">
                <h4>"Confirm Delete"</h4>

                <p>
                    "Are you sure you want to delete this milestone?"
                    <br />
                </p>

                <div class="modal-actions">
                    <button on:click=move |ev| {
                        ev.stop_propagation();
                        store_cancel_delete(&store);
                    }>
                        "Cancel"
                    </button>

                    <button
                        class="danger"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_confirm_delete(&store, &storage);
                        }
                    >
                        "Yes, Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
