//! Timeline Core
//!
//! Browser-independent logic behind the timeline page:
//! - milestone: the persisted entity and its category set
//! - date: two-format date parsing
//! - view: sorted and year-grouped derivation
//! - draft: form draft, validation and commit
//! - deletion: two-step delete confirmation
//! - storage: load/save boundary over a key-value backend

mod config;
mod date;
mod deletion;
mod draft;
mod error;
mod milestone;
mod storage;
mod view;

pub use config::{TimelineConfig, DEFAULT_STORAGE_KEY};
pub use date::{detect_format, parse_milestone_date, to_iso_date, DateFormat};
pub use deletion::{remove_milestone, DeleteFlow, DeletePhase};
pub use draft::{assign_missing_ids, next_id, validate, Editor, EditorMode, Field, FieldErrors, REQUIRED_MESSAGE};
pub use error::{TimelineError, TimelineResult};
pub use milestone::{Category, EncodedImage, Milestone, MilestoneId};
pub use storage::{decode_collection, encode_collection, KeyValueStore, MemoryStore, MilestoneStore};
pub use view::{group_by_year, sorted_milestones, YearGroup};
