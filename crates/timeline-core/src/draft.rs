//! Draft Controller
//!
//! Holds the milestone being added or edited in the form, its mode and the
//! per-field validation errors. Commit never touches storage; the caller
//! persists the returned collection.

use std::collections::BTreeMap;

use crate::date::to_iso_date;
use crate::milestone::{EncodedImage, Milestone, MilestoneId};

/// Message shown under every missing required field
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Form fields that can be edited as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Name,
    Category,
    Note,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Name => "name",
            Field::Category => "category",
            Field::Note => "note",
        }
    }
}

/// Field -> human readable message, empty when the draft is valid
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit,
}

/// Check the required fields of a draft.
pub fn validate(draft: &Milestone) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if draft.date.is_empty() {
        errors.insert(Field::Date, REQUIRED_MESSAGE.to_string());
    }
    if draft.category.is_empty() {
        errors.insert(Field::Category, REQUIRED_MESSAGE.to_string());
    }
    if draft.note.trim().is_empty() {
        errors.insert(Field::Note, REQUIRED_MESSAGE.to_string());
    }
    errors
}

/// Id for a new milestone: the clock reading, or the next integer above
/// the largest existing id when the clock has not moved past it.
pub fn next_id(now_ms: u64, existing: &[Milestone]) -> MilestoneId {
    match existing.iter().filter_map(|m| m.id).max() {
        Some(max) if now_ms <= max => max.saturating_add(1),
        _ => now_ms,
    }
}

/// Give every record loaded without an id a fresh one, so it can be edited
/// and deleted like any other. Returns how many ids were assigned.
pub fn assign_missing_ids(collection: &mut [Milestone], now_ms: u64) -> usize {
    let mut assigned = 0;
    for index in 0..collection.len() {
        if collection[index].id.is_none() {
            let id = next_id(now_ms, collection);
            collection[index].id = Some(id);
            assigned += 1;
        }
    }
    assigned
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Editor {
    draft: Milestone,
    mode: EditorMode,
    errors: FieldErrors,
}

impl Editor {
    pub fn draft(&self) -> &Milestone {
        &self.draft
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Reset to an empty draft in create mode
    pub fn open_for_create(&mut self) {
        self.draft = Milestone::default();
        self.mode = EditorMode::Create;
        self.errors.clear();
    }

    /// Copy an existing record into the draft in edit mode
    pub fn open_for_edit(&mut self, existing: &Milestone) {
        self.draft = existing.clone();
        self.mode = EditorMode::Edit;
        self.errors.clear();
    }

    /// Update one field and drop its pending error, if any
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Date => self.draft.date = value,
            Field::Name => self.draft.name = value,
            Field::Category => self.draft.category = value,
            Field::Note => self.draft.note = value,
        }
        self.errors.remove(&field);
    }

    /// Store a finished image read into whatever draft is current.
    ///
    /// The read may have started for an earlier draft; the latest draft wins.
    pub fn apply_image(&mut self, image: EncodedImage) {
        self.draft.image_base64 = image.into_inner();
    }

    pub fn validate(&self) -> FieldErrors {
        validate(&self.draft)
    }

    /// Fold the draft into `collection`.
    ///
    /// Edit mode replaces the element with the draft's id in place; create
    /// mode appends the draft under a fresh id. Only call this with a draft
    /// that passed [`Editor::validate`].
    pub fn commit(&self, collection: &[Milestone], now_ms: u64) -> Vec<Milestone> {
        match self.mode {
            EditorMode::Edit => collection
                .iter()
                .map(|m| {
                    if m.id.is_some() && m.id == self.draft.id {
                        self.draft.clone()
                    } else {
                        m.clone()
                    }
                })
                .collect(),
            EditorMode::Create => {
                let mut updated = collection.to_vec();
                updated.push(Milestone {
                    id: Some(next_id(now_ms, collection)),
                    ..self.draft.clone()
                });
                updated
            }
        }
    }

    /// Validate, then commit. Errors are kept on the editor for display.
    pub fn save(&mut self, collection: &[Milestone], now_ms: u64) -> Result<Vec<Milestone>, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();
        Ok(self.commit(collection, now_ms))
    }

    /// Draft date as `YYYY-MM-DD` for the browser date input
    pub fn date_input_value(&self) -> String {
        to_iso_date(&self.draft.date).unwrap_or_else(|| self.draft.date.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_milestone(id: u64, date: &str, note: &str) -> Milestone {
        Milestone {
            id: Some(id),
            date: date.to_string(),
            category: "Travel".to_string(),
            note: note.to_string(),
            ..Default::default()
        }
    }

    fn filled_editor() -> Editor {
        let mut editor = Editor::default();
        editor.open_for_create();
        editor.set_field(Field::Date, "2024-03-01");
        editor.set_field(Field::Category, "Work");
        editor.set_field(Field::Note, "first day");
        editor
    }

    #[test]
    fn test_validate_only_missing_date() {
        let draft = Milestone {
            category: "Work".to_string(),
            note: "hi".to_string(),
            ..Default::default()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Date).map(String::as_str), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_validate_blank_note() {
        let draft = Milestone {
            date: "2024-01-01".to_string(),
            category: "Work".to_string(),
            note: "  \n\t ".to_string(),
            ..Default::default()
        };
        let errors = validate(&draft);
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Note]);
    }

    #[test]
    fn test_validate_empty_draft() {
        let errors = validate(&Milestone::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Date, Field::Category, Field::Note]
        );
        // name is optional
        assert!(!errors.contains_key(&Field::Name));
    }

    #[test]
    fn test_validate_valid_draft() {
        assert!(filled_editor().validate().is_empty());
    }

    #[test]
    fn test_set_field_clears_only_its_error() {
        let mut editor = Editor::default();
        editor.open_for_create();
        assert!(editor.save(&[], 1).is_err());
        assert_eq!(editor.errors().len(), 3);

        editor.set_field(Field::Note, "x");
        assert_eq!(editor.error(Field::Note), None);
        assert_eq!(editor.error(Field::Date), Some(REQUIRED_MESSAGE));
        assert_eq!(editor.error(Field::Category), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_set_field_does_not_revalidate() {
        let mut editor = filled_editor();
        editor.set_field(Field::Note, "");
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn test_create_appends_with_unique_id() {
        let existing = vec![make_milestone(100, "2020-01-01", "a"), make_milestone(200, "2021-01-01", "b")];
        let mut editor = filled_editor();

        let updated = editor.save(&existing, 5_000).unwrap();
        assert_eq!(updated.len(), existing.len() + 1);
        let new_id = updated[2].id.unwrap();
        assert_eq!(new_id, 5_000);
        assert!(existing.iter().all(|m| m.id != Some(new_id)));
        assert_eq!(updated[2].note, "first day");
        assert_eq!(&updated[..2], &existing[..]);
    }

    #[test]
    fn test_next_id_never_collides() {
        let existing = vec![make_milestone(1_000, "2020-01-01", "a")];
        assert_eq!(next_id(999, &existing), 1_001);
        assert_eq!(next_id(1_000, &existing), 1_001);
        assert_eq!(next_id(1_002, &existing), 1_002);
        assert_eq!(next_id(42, &[]), 42);
    }

    #[test]
    fn test_two_creates_in_same_millisecond() {
        let mut editor = filled_editor();
        let once = editor.save(&[], 7).unwrap();
        editor.open_for_create();
        editor.set_field(Field::Date, "2024-03-02");
        editor.set_field(Field::Category, "Work");
        editor.set_field(Field::Note, "second");
        let twice = editor.save(&once, 7).unwrap();
        assert_eq!(twice[0].id, Some(7));
        assert_eq!(twice[1].id, Some(8));
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let existing = vec![
            make_milestone(1, "2020-01-01", "a"),
            make_milestone(2, "2021-01-01", "b"),
            make_milestone(3, "2022-01-01", "c"),
        ];
        let mut editor = Editor::default();
        editor.open_for_edit(&existing[1]);
        assert!(editor.is_edit());
        editor.set_field(Field::Note, "changed");

        let updated = editor.save(&existing, 99).unwrap();
        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0], existing[0]);
        assert_eq!(updated[2], existing[2]);
        assert_eq!(updated[1].id, Some(2));
        assert_eq!(updated[1].note, "changed");
    }

    #[test]
    fn test_save_rejects_invalid_without_commit() {
        let existing = vec![make_milestone(1, "2020-01-01", "a")];
        let mut editor = Editor::default();
        editor.open_for_edit(&existing[0]);
        editor.set_field(Field::Category, "");

        let errors = editor.save(&existing, 1).unwrap_err();
        assert!(errors.contains_key(&Field::Category));
        assert_eq!(editor.error(Field::Category), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_open_for_create_resets() {
        let mut editor = Editor::default();
        editor.open_for_edit(&make_milestone(5, "2020-01-01", "a"));
        editor.open_for_create();
        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.draft(), &Milestone::default());
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn test_apply_image_to_current_draft() {
        let mut editor = filled_editor();
        // a read started before the reset still lands on the new draft
        editor.open_for_create();
        editor.apply_image(EncodedImage::new("data:image/png;base64,AAAA"));
        assert_eq!(editor.draft().image_base64, "data:image/png;base64,AAAA");
        assert!(editor.draft().has_image());
    }

    #[test]
    fn test_assign_missing_ids() {
        let mut collection = vec![
            Milestone { note: "legacy a".to_string(), ..Default::default() },
            make_milestone(50, "2020-01-01", "kept"),
            Milestone { note: "legacy b".to_string(), ..Default::default() },
        ];

        assert_eq!(assign_missing_ids(&mut collection, 10), 2);
        assert_eq!(collection[0].id, Some(51));
        assert_eq!(collection[1].id, Some(50));
        assert_eq!(collection[2].id, Some(52));
        assert_eq!(assign_missing_ids(&mut collection, 10), 0);
    }

    #[test]
    fn test_edit_record_loaded_without_id() {
        let mut collection = vec![Milestone {
            date: "2024-01-01".to_string(),
            category: "Work".to_string(),
            note: "legacy".to_string(),
            ..Default::default()
        }];
        assign_missing_ids(&mut collection, 5);

        let mut editor = Editor::default();
        editor.open_for_edit(&collection[0]);
        editor.set_field(Field::Note, "changed");
        let updated = editor.save(&collection, 6).unwrap();

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].note, "changed");
        assert_eq!(updated[0].id, Some(5));
    }

    #[test]
    fn test_set_name_field() {
        let mut editor = filled_editor();
        editor.set_field(Field::Name, "Graduation");
        assert_eq!(editor.draft().name, "Graduation");
        assert!(editor.validate().is_empty());
        assert_eq!(Field::Name.as_str(), "name");
    }

    #[test]
    fn test_date_input_value() {
        let mut editor = Editor::default();
        editor.open_for_edit(&make_milestone(1, "01-03-2024", "a"));
        assert_eq!(editor.date_input_value(), "2024-03-01");
        editor.set_field(Field::Date, "");
        assert_eq!(editor.date_input_value(), "");
    }
}
