use alloc::string::String;
use alloc::sync::Arc;

use crate::ElementId;
use crate::completion::{BatchOutcome, PlaybackCompletion};
use crate::driver::PlaybackRequest;
use crate::types::{BatchId, LayoutRect, SubscriptionId};

/// Reads an element's current on-screen bounding box.
///
/// Must be a side-effect-free synchronous read; the scheduler calls it once
/// per watched element at arm time and once per signaled element at fire time.
pub type MeasureCallback<E> = Arc<dyn Fn(&E) -> LayoutRect + Send + Sync>;

/// Returns an element's existing base transform (empty string for none).
///
/// The driver composes the synthesized starting keyframe on top of it and
/// uses it alone as the resting end frame.
pub type BaseTransformCallback<E> = Arc<dyn Fn(&E) -> String + Send + Sync>;

/// The host's element-transform-animation primitive.
///
/// Plays the two-frame request and resolves (or fails) the completion when
/// native playback finishes. The scheduler never retries: a failure is
/// reflected in the batch outcome as-is.
pub type PlayCallback<E> = Arc<dyn Fn(&E, &PlaybackRequest, PlaybackCompletion) + Send + Sync>;

/// Installs a one-shot layout-change watch over the given elements.
///
/// The host must invoke [`crate::LayoutAnimator::notify_layout_change`] at
/// most once per installed watch, and must stand the watch down when the
/// matching [`UnwatchCallback`] fires.
pub type WatchCallback<E> = Arc<dyn Fn(SubscriptionId, &[E]) + Send + Sync>;

/// Disposes a previously installed layout-change watch.
pub type UnwatchCallback = Arc<dyn Fn(SubscriptionId) + Send + Sync>;

/// Fired exactly once when every per-element animation of a batch has
/// resolved or failed.
pub type BatchSettledCallback = Arc<dyn Fn(BatchId, BatchOutcome) + Send + Sync>;

/// Configuration for [`crate::LayoutAnimator`].
///
/// This type is designed to be cheap to clone: every callback is stored in an
/// `Arc`, so hosts can swap a single hook and call `set_options` without
/// reallocating the rest.
pub struct AnimatorOptions<E = ElementId> {
    pub measure: MeasureCallback<E>,

    /// The playback primitive. When absent (a host without transform
    /// animation support), per-element slots resolve immediately and the
    /// layout change simply stands uncompensated.
    pub play: Option<PlayCallback<E>>,

    pub base_transform: Option<BaseTransformCallback<E>>,

    pub on_watch: Option<WatchCallback<E>>,

    pub on_unwatch: Option<UnwatchCallback>,

    pub on_batch_settled: Option<BatchSettledCallback>,
}

impl<E> AnimatorOptions<E> {
    /// Creates options around the one required host capability: geometry
    /// reads.
    pub fn new(measure: impl Fn(&E) -> LayoutRect + Send + Sync + 'static) -> Self {
        Self {
            measure: Arc::new(measure),
            play: None,
            base_transform: None,
            on_watch: None,
            on_unwatch: None,
            on_batch_settled: None,
        }
    }

    pub fn with_play(
        mut self,
        play: Option<impl Fn(&E, &PlaybackRequest, PlaybackCompletion) + Send + Sync + 'static>,
    ) -> Self {
        self.play = play.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_base_transform(
        mut self,
        base_transform: Option<impl Fn(&E) -> String + Send + Sync + 'static>,
    ) -> Self {
        self.base_transform = base_transform.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_watch(
        mut self,
        on_watch: Option<impl Fn(SubscriptionId, &[E]) + Send + Sync + 'static>,
    ) -> Self {
        self.on_watch = on_watch.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_unwatch(
        mut self,
        on_unwatch: Option<impl Fn(SubscriptionId) + Send + Sync + 'static>,
    ) -> Self {
        self.on_unwatch = on_unwatch.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_batch_settled(
        mut self,
        on_batch_settled: Option<impl Fn(BatchId, BatchOutcome) + Send + Sync + 'static>,
    ) -> Self {
        self.on_batch_settled = on_batch_settled.map(|f| Arc::new(f) as _);
        self
    }
}

impl<E> Clone for AnimatorOptions<E> {
    fn clone(&self) -> Self {
        Self {
            measure: Arc::clone(&self.measure),
            play: self.play.clone(),
            base_transform: self.base_transform.clone(),
            on_watch: self.on_watch.clone(),
            on_unwatch: self.on_unwatch.clone(),
            on_batch_settled: self.on_batch_settled.clone(),
        }
    }
}

impl<E> core::fmt::Debug for AnimatorOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnimatorOptions")
            .field("play", &self.play.is_some())
            .field("base_transform", &self.base_transform.is_some())
            .field("on_watch", &self.on_watch.is_some())
            .field("on_unwatch", &self.on_unwatch.is_some())
            .field("on_batch_settled", &self.on_batch_settled.is_some())
            .finish_non_exhaustive()
    }
}
