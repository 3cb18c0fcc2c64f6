//! UI Components
//!
//! Leptos components of the timeline page.

mod category_select;
mod confirm_delete_modal;
mod field_error;
mod image_viewer;
mod milestone_modal;
mod timeline_page;
mod year_section;

pub use category_select::CategorySelect;
pub use confirm_delete_modal::ConfirmDeleteModal;
pub use field_error::FieldError;
pub use image_viewer::ImageViewer;
pub use milestone_modal::MilestoneModal;
pub use timeline_page::TimelinePage;
pub use year_section::YearSection;
