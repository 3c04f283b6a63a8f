use alloc::sync::Arc;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::BatchId;
use crate::error::PlaybackError;
use crate::options::BatchSettledCallback;

/// Final tally of one batch of per-element animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchOutcome {
    pub completed: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.completed + self.failed
    }

    /// `true` when every per-element animation resolved without failure.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

struct BatchShared {
    id: BatchId,
    total: usize,
    completed: AtomicUsize,
    failed: AtomicUsize,
    on_settled: Option<BatchSettledCallback>,
}

impl BatchShared {
    fn settled_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst) + self.failed.load(Ordering::SeqCst)
    }

    fn outcome(&self) -> BatchOutcome {
        BatchOutcome {
            completed: self.completed.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
        }
    }

    fn record(&self, failure: Option<PlaybackError>) {
        match failure {
            Some(error) => {
                lawarn!(batch = self.id.0, error = %error, "playback failed");
                let _ = error;
                self.failed.fetch_add(1, Ordering::SeqCst);
            }
            None => {
                self.completed.fetch_add(1, Ordering::SeqCst);
            }
        }
        self.notify_if_settled();
    }

    fn notify_if_settled(&self) {
        // Each slot records exactly once, so the count reaches `total` exactly
        // once and the callback cannot double-fire.
        if self.settled_count() == self.total {
            latrace!(batch = self.id.0, total = self.total, "batch settled");
            if let Some(on_settled) = &self.on_settled {
                on_settled(self.id, self.outcome());
            }
        }
    }
}

/// The combined completion for one layout-change firing.
///
/// One slot exists per signaled element; the batch settles only once every
/// slot has resolved or failed, in no particular order. A single failure does
/// not block the remaining slots, but it does mark the whole batch as failed.
/// Handles are cheap to clone and safe to poll from the host loop.
#[derive(Clone)]
pub struct AnimationBatch {
    shared: Arc<BatchShared>,
}

impl AnimationBatch {
    pub(crate) fn new(
        id: BatchId,
        total: usize,
        on_settled: Option<BatchSettledCallback>,
    ) -> Self {
        let batch = Self {
            shared: Arc::new(BatchShared {
                id,
                total,
                completed: AtomicUsize::new(0),
                failed: AtomicUsize::new(0),
                on_settled,
            }),
        };
        if total == 0 {
            // Nothing to wait for: settle immediately (spurious or empty fire).
            batch.shared.notify_if_settled();
        }
        batch
    }

    pub(crate) fn slot(&self) -> PlaybackCompletion {
        PlaybackCompletion {
            shared: Some(Arc::clone(&self.shared)),
        }
    }

    pub fn id(&self) -> BatchId {
        self.shared.id
    }

    /// Number of per-element slots in this batch.
    pub fn total(&self) -> usize {
        self.shared.total
    }

    pub fn completed(&self) -> usize {
        self.shared.completed.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.shared.failed.load(Ordering::SeqCst)
    }

    pub fn is_settled(&self) -> bool {
        self.shared.settled_count() >= self.shared.total
    }

    /// The final tally, or `None` while any slot is still outstanding.
    pub fn outcome(&self) -> Option<BatchOutcome> {
        self.is_settled().then(|| self.shared.outcome())
    }
}

impl fmt::Debug for AnimationBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationBatch")
            .field("id", &self.shared.id)
            .field("total", &self.shared.total)
            .field("completed", &self.completed())
            .field("failed", &self.failed())
            .finish()
    }
}

/// One element's completion signal, handed to the host playback primitive.
///
/// The handle is one-shot: `resolve` or `fail` consumes it. Dropping it
/// without resolving records a [`PlaybackError::Abandoned`] failure so an
/// abandoned playback can never leave the batch hanging.
pub struct PlaybackCompletion {
    shared: Option<Arc<BatchShared>>,
}

impl PlaybackCompletion {
    /// Marks this element's animation as finished.
    pub fn resolve(mut self) {
        if let Some(shared) = self.shared.take() {
            shared.record(None);
        }
    }

    /// Marks this element's animation as failed.
    pub fn fail(mut self, error: PlaybackError) {
        if let Some(shared) = self.shared.take() {
            shared.record(Some(error));
        }
    }

    pub fn batch_id(&self) -> Option<BatchId> {
        self.shared.as_ref().map(|shared| shared.id)
    }
}

impl Drop for PlaybackCompletion {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            shared.record(Some(PlaybackError::Abandoned));
        }
    }
}

impl fmt::Debug for PlaybackCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackCompletion")
            .field("batch_id", &self.batch_id())
            .finish()
    }
}
