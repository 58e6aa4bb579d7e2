use tokio::sync::{Mutex, MutexGuard};

use mb_core::{FormDraft, FormStore, MediaDescriptor, MediaKind, VehicleId, WizardState};

/// Everything one open wizard owns.
#[derive(Debug, Clone)]
pub(super) struct WizardSession {
    pub state: WizardState,
    pub store: FormStore,
    pub submitted: Option<VehicleId>,
}

/// Shared wizard context containing the session and the dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: serializes `dispatch` so transition + actions + state update run as one unit.
/// - `session`: short-lived, used for reads, draft merges and state writes.
pub(super) struct WizardContext {
    session: Mutex<WizardSession>,
    dispatch_lock: Mutex<()>,
}

impl WizardContext {
    pub fn new(state: WizardState, store: FormStore) -> Self {
        Self {
            session: Mutex::new(WizardSession {
                state,
                store,
                submitted: None,
            }),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub async fn session(&self) -> WizardSession {
        self.session.lock().await.clone()
    }

    pub async fn set_state(&self, state: WizardState) {
        self.session.lock().await.state = state;
    }

    pub async fn update_draft(&self, patch: FormDraft) {
        self.session.lock().await.store.update(patch);
    }

    /// Read and extend the media list under one lock so overlapping attaches keep every file.
    pub async fn append_media(&self, kind: MediaKind, picked: Vec<MediaDescriptor>) {
        self.session.lock().await.store.append_media(kind, picked);
    }

    pub async fn reset_draft(&self) {
        self.session.lock().await.store.reset();
    }

    pub async fn draft(&self) -> FormDraft {
        self.session.lock().await.store.draft().clone()
    }

    pub async fn mark_submitted(&self, id: VehicleId) {
        self.session.lock().await.submitted = Some(id);
    }

    pub async fn submitted(&self) -> Option<VehicleId> {
        self.session.lock().await.submitted.clone()
    }
}
