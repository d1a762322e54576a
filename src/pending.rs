use std::sync::{Mutex, MutexGuard, PoisonError};

/// Document paths waiting for the UI to claim them.
///
/// Producers append from any thread; the UI drains. The lock only ever covers a
/// push or a swap, and the inner vector is never handed out by reference.
#[derive(Default)]
pub struct PendingFileQueue {
    files: Mutex<Vec<String>>,
}

impl PendingFileQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        // A panicking producer cannot leave a half-written Vec behind, so the
        // data is still valid after poisoning.
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn enqueue(&self, path: impl Into<String>) {
        let path = path.into();
        self.guard().push(path);
    }

    /// Take everything queued since the last drain, leaving the queue empty.
    pub fn drain_and_clear(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}
