//! Delete Confirmation
//!
//! `Idle -> PendingConfirm(id) -> Idle`. Only an existing milestone open in
//! the editor can be deleted; confirming filters it out of the collection.

use crate::draft::Editor;
use crate::error::{TimelineError, TimelineResult};
use crate::milestone::{Milestone, MilestoneId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Idle,
    PendingConfirm(MilestoneId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteFlow {
    phase: DeletePhase,
}

impl DeleteFlow {
    pub fn phase(&self) -> DeletePhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, DeletePhase::PendingConfirm(_))
    }

    /// Ask for confirmation to delete the milestone open in `editor`.
    pub fn request(&mut self, editor: &Editor) -> TimelineResult<MilestoneId> {
        match editor.draft().id {
            Some(id) if editor.is_edit() => {
                self.phase = DeletePhase::PendingConfirm(id);
                Ok(id)
            }
            _ => Err(TimelineError::DeleteUnavailable),
        }
    }

    pub fn cancel(&mut self) {
        self.phase = DeletePhase::Idle;
    }

    /// Apply a pending delete. Returns the new collection, or `None` when
    /// nothing was pending.
    pub fn confirm(&mut self, collection: &[Milestone]) -> Option<Vec<Milestone>> {
        let DeletePhase::PendingConfirm(id) = self.phase else {
            return None;
        };
        self.phase = DeletePhase::Idle;
        Some(remove_milestone(collection, id))
    }
}

/// Collection without the milestone `id`; unchanged if it is absent
pub fn remove_milestone(collection: &[Milestone], id: MilestoneId) -> Vec<Milestone> {
    collection
        .iter()
        .filter(|m| m.id != Some(id))
        .cloned()
        .collect()
}
