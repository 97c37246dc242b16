use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::AppState;

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone, Default)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    /// Borrowing read, for views that should not clone the snapshot.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let guard = self.lock();
        f(&*guard)
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }
}
