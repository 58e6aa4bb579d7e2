//! In-memory holder of the draft for one wizard lifetime.

use crate::vehicle::{FormDraft, MediaDescriptor, MediaKind, NumberInput};

/// Single source of truth for the draft while the wizard is open.
///
/// Nothing here is persisted; dropping the store discards all progress.
/// Updates never trigger validation, validators pull from [`FormStore::draft`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormStore {
    initial: FormDraft,
    draft: FormDraft,
}

impl FormStore {
    /// Seed the draft with defaults, then lay the caller's partial data on top.
    pub fn initialize(partial: FormDraft, current_year: i32) -> Self {
        let initial = Self::defaults(current_year).merged(partial);
        Self {
            draft: initial.clone(),
            initial,
        }
    }

    /// Current year pre-selected, empty text everywhere else.
    pub fn defaults(current_year: i32) -> FormDraft {
        FormDraft {
            make: Some(String::new()),
            model: Some(String::new()),
            year: Some(NumberInput::from(i64::from(current_year))),
            license_plate: Some(String::new()),
            fuel_type: Some(String::new()),
            transmission: Some(String::new()),
            vin: Some(String::new()),
            images: Some(Vec::new()),
            documents: Some(Vec::new()),
            notes: Some(String::new()),
            ..Default::default()
        }
    }

    pub fn update(&mut self, patch: FormDraft) {
        self.draft.merge(patch);
    }

    /// Append picked files to the photo or document list as one merge.
    pub fn append_media(&mut self, kind: MediaKind, picked: Vec<MediaDescriptor>) {
        let current = match kind {
            MediaKind::Image => &self.draft.images,
            MediaKind::Document => &self.draft.documents,
        };
        let mut list = current.clone().unwrap_or_default();
        list.extend(picked);

        let mut patch = FormDraft::default();
        match kind {
            MediaKind::Image => patch.images = Some(list),
            MediaKind::Document => patch.documents = Some(list),
        }
        self.update(patch);
    }

    /// Back to the draft as it was right after [`FormStore::initialize`].
    pub fn reset(&mut self) {
        self.draft = self.initial.clone();
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_merges_partial_over_defaults() {
        let store = FormStore::initialize(
            FormDraft {
                make: Some("Lancia".into()),
                ..Default::default()
            },
            2024,
        );

        assert_eq!(store.draft().make.as_deref(), Some("Lancia"));
        assert_eq!(store.draft().model.as_deref(), Some(""));
        assert_eq!(store.draft().year, Some(NumberInput::Number(2024.0)));
    }

    #[test]
    fn update_touches_only_patched_fields() {
        let mut store = FormStore::initialize(FormDraft::default(), 2024);
        let before = store.draft().clone();

        store.update(FormDraft {
            license_plate: Some("ab12345".into()),
            ..Default::default()
        });

        assert_eq!(store.draft().license_plate.as_deref(), Some("AB12345"));
        let mut rest = store.draft().clone();
        rest.license_plate = before.license_plate.clone();
        assert_eq!(rest, before);
    }

    fn descriptor(name: &str) -> MediaDescriptor {
        MediaDescriptor {
            uri: format!("file:///m/{name}"),
            name: name.to_string(),
            size: None,
            mime_type: None,
        }
    }

    #[test]
    fn append_media_extends_only_the_matching_list() {
        let mut store = FormStore::initialize(FormDraft::default(), 2024);

        store.append_media(MediaKind::Image, vec![descriptor("front.jpg")]);
        store.append_media(MediaKind::Image, vec![descriptor("rear.jpg")]);
        store.append_media(MediaKind::Document, vec![descriptor("libretto.pdf")]);

        let images = store.draft().images.clone().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[1].name, "rear.jpg");
        assert_eq!(store.draft().documents.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn reset_restores_initial_shape() {
        let partial = FormDraft {
            model: Some("Ypsilon".into()),
            ..Default::default()
        };
        let mut store = FormStore::initialize(partial, 2023);
        let initial = store.draft().clone();

        store.update(FormDraft {
            model: Some("Delta".into()),
            fuel_type: Some("diesel".into()),
            ..Default::default()
        });
        store.reset();

        assert_eq!(store.draft(), &initial);
    }
}
