//! Page State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Every mutation of
//! the page goes through one of the `store_*` commands below.

use leptos::prelude::*;
use reactive_stores::Store;
use timeline_core::{
    assign_missing_ids, DeleteFlow, Editor, EncodedImage, Field, KeyValueStore, Milestone,
    MilestoneStore, TimelineConfig,
};

use crate::commands::{self, LocalStorage};

/// Everything the timeline page shows or edits
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// All milestones, in storage order
    pub milestones: Vec<Milestone>,
    /// Form draft, mode and validation errors
    pub editor: Editor,
    /// Add/edit form visibility
    pub form_open: bool,
    /// Delete confirmation
    pub delete_flow: DeleteFlow,
    /// Full-size image overlay visibility
    pub image_viewer_open: bool,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Milestone storage behind the page
pub type BrowserMilestones = MilestoneStore<LocalStorage>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

/// Local storage slot named by the configuration in context
pub fn use_milestone_storage() -> BrowserMilestones {
    let config = expect_context::<TimelineConfig>();
    commands::milestone_store(&config.storage_key)
}

// ========================
// Store Commands
// ========================

/// Read the collection from storage. Records stored without an id get one
/// and are written back.
pub fn store_load<S: KeyValueStore>(store: &PageStore, storage: &MilestoneStore<S>, now_ms: u64) {
    let mut milestones = storage.load();
    log::info!(target: "page", "Loaded {} milestones from '{}'", milestones.len(), storage.key());

    let assigned = assign_missing_ids(&mut milestones, now_ms);
    if assigned > 0 {
        log::info!(target: "page", "Assigned ids to {} stored milestones", assigned);
        store_commit(store, storage, milestones);
    } else {
        *store.milestones().write() = milestones;
    }
}

/// Replace the collection and mirror it to storage
fn store_commit<S: KeyValueStore>(store: &PageStore, storage: &MilestoneStore<S>, milestones: Vec<Milestone>) {
    if let Err(e) = storage.save(&milestones) {
        log::error!(target: "page", "Failed to persist milestones: {}", e);
    }
    *store.milestones().write() = milestones;
}

pub fn store_open_create(store: &PageStore) {
    store.editor().write().open_for_create();
    store.delete_flow().write().cancel();
    store.form_open().set(true);
}

pub fn store_open_edit(store: &PageStore, milestone: &Milestone) {
    store.editor().write().open_for_edit(milestone);
    store.delete_flow().write().cancel();
    store.form_open().set(true);
}

/// Close the form together with any modal stacked on it
pub fn store_close_form(store: &PageStore) {
    store.delete_flow().write().cancel();
    store.image_viewer_open().set(false);
    store.form_open().set(false);
}

pub fn store_set_field(store: &PageStore, field: Field, value: String) {
    store.editor().write().set_field(field, value);
}

/// Resume point of an image read: lands on the draft current right now
pub fn store_apply_image(store: &PageStore, image: EncodedImage) {
    store.editor().write().apply_image(image);
}

pub fn store_set_image_viewer(store: &PageStore, open: bool) {
    store.image_viewer_open().set(open);
}

/// Validate the draft and, if it passes, commit it and close the form
pub fn store_save_draft<S: KeyValueStore>(store: &PageStore, storage: &MilestoneStore<S>, now_ms: u64) {
    let current = store.milestones().get_untracked();
    let saved = store.editor().write().save(&current, now_ms);
    match saved {
        Ok(updated) => {
            store_commit(store, storage, updated);
            store_close_form(store);
        }
        Err(errors) => {
            log::debug!(target: "page", "Draft rejected, {} field(s) missing", errors.len());
        }
    }
}

pub fn store_request_delete(store: &PageStore) {
    let editor = store.editor().get_untracked();
    let requested = store.delete_flow().write().request(&editor);
    if let Err(e) = requested {
        log::warn!(target: "page", "{}", e);
    }
}

pub fn store_cancel_delete(store: &PageStore) {
    store.delete_flow().write().cancel();
}

/// Remove the pending milestone and close every modal
pub fn store_confirm_delete<S: KeyValueStore>(store: &PageStore, storage: &MilestoneStore<S>) {
    let current = store.milestones().get_untracked();
    let confirmed = store.delete_flow().write().confirm(&current);
    if let Some(updated) = confirmed {
        log::info!(target: "page", "Deleted milestone, {} remaining", updated.len());
        store_commit(store, storage, updated);
    }
    store_close_form(store);
}
