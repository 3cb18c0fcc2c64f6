//! Milestone Form Modal
//!
//! Add/edit form for one milestone with image picker, preview and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use timeline_core::Field;
use web_sys::HtmlInputElement;

use crate::commands;
use crate::components::{CategorySelect, ConfirmDeleteModal, FieldError, ImageViewer};
use crate::store::{
    store_apply_image, store_close_form, store_request_delete, store_save_draft, store_set_field,
    store_set_image_viewer, use_milestone_storage, use_page_store, PageStateStoreFields,
};

#[component]
pub fn MilestoneModal() -> impl IntoView {
    let store = use_page_store();
    let storage = use_milestone_storage();

    let is_edit = move || store.editor().read().is_edit();
    let heading = move || if is_edit() { "Edit Milestone" } else { "Add Milestone" };
    let has_image = move || store.editor().read().draft().has_image();
    let image = move || store.editor().read().draft().image_base64.clone();

    // The read finishes after this handler returns; its result is applied
    // to whatever draft is open at that point.
    let pick_image = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match commands::read_image_as_data_url(file).await {
                Ok(image) => store_apply_image(&store, image),
                Err(e) => log::error!(target: "page", "Image not attached: {}", e),
            }
        });
    };

    view! {
        <div class="custom-modal-backdrop">
            <div class="custom-modal">
                <h4>{heading}</h4>

                <div class="field-group">
                    <input
                        type="date"
                        name=Field::Date.as_str()
                        prop:value=move || store.editor().read().date_input_value()
                        on:input=move |ev| store_set_field(&store, Field::Date, event_target_value(&ev))
                    />
                    <FieldError field=Field::Date />
                </div>

                <div class="field-group">
                    <CategorySelect />
                    <FieldError field=Field::Category />
                </div>

                <div class="field-group">
                    <textarea
                        name=Field::Note.as_str()
                        placeholder="Important note"
                        prop:value=move || store.editor().read().draft().note.clone()
                        on:input=move |ev| store_set_field(&store, Field::Note, event_target_value(&ev))
                    ></textarea>
                    <FieldError field=Field::Note />
                </div>

                <label class="file-btn">
                    "Choose Image"
                    <input type="file" name="image" accept="image/*" hidden=true on:change=pick_image />
                </label>

                <Show when=has_image>
                    <div class="image-preview-wrapper">
                        <img
                            src=image
                            alt="preview"
                            on:click=move |_| store_set_image_viewer(&store, true)
                        />
                    </div>
                </Show>

                <Show when=move || store.image_viewer_open().get()>
                    <ImageViewer />
                </Show>

                <div class="modal-actions">
                    <Show when=is_edit>
                        <button class="danger" on:click=move |_| store_request_delete(&store)>
                            "Delete"
                        </button>
                    </Show>
                    <button on:click=move |_| store_close_form(&store)>"Cancel"</button>
                    <button class="success" on:click=move |_| store_save_draft(&store, &storage, commands::now_ms())>
                        "Save"
                    </button>
                </div>
            </div>

            <Show when=move || store.delete_flow().read().is_pending()>
                <ConfirmDeleteModal />
            </Show>
        </div>
    }
}
