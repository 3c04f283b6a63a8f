use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use layout_animation::{
    PlayCallback, PlaybackCompletion, PlaybackError, PlaybackRequest, compose_transforms,
};

use crate::tween::TransformTween;

type ApplyTransformCallback<E> = Arc<dyn Fn(&E, &str) + Send + Sync>;

/// A tick-driven implementation of the transform playback primitive.
///
/// Frame-loop hosts (TUIs, game loops, test harnesses) have no native
/// element-animation API, so this player stands in for one: it turns each
/// playback request into a [`TransformTween`], and `tick(now_ms)` samples
/// every active playback, pushes the composed transform string to the `apply`
/// callback, and resolves the completion when a playback finishes.
///
/// Wire it up by passing [`TickPlayer::play_callback`] into
/// `AnimatorOptions::with_play`, then call `tick` from the host loop.
pub struct TickPlayer<E> {
    inner: Arc<PlayerInner<E>>,
}

struct PlayerInner<E> {
    active: Mutex<Vec<ActivePlayback<E>>>,
    apply: Option<ApplyTransformCallback<E>>,
    now_ms: AtomicU64,
}

struct ActivePlayback<E> {
    element: E,
    tween: TransformTween,
    end_transform: String,
    completion: Option<PlaybackCompletion>,
}

impl<E> TickPlayer<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PlayerInner {
                active: Mutex::new(Vec::new()),
                apply: None,
                now_ms: AtomicU64::new(0),
            }),
        }
    }

    /// Creates a player that pushes sampled transform strings to `apply`.
    pub fn with_apply(apply: impl Fn(&E, &str) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(PlayerInner {
                active: Mutex::new(Vec::new()),
                apply: Some(Arc::new(apply)),
                now_ms: AtomicU64::new(0),
            }),
        }
    }

    pub fn active_len(&self) -> usize {
        self.inner
            .active
            .lock()
            .map(|active| active.len())
            .unwrap_or(0)
    }

    pub fn is_idle(&self) -> bool {
        self.active_len() == 0
    }

    /// Advances every active playback to `now_ms`.
    ///
    /// Finished playbacks apply their resting transform, resolve their
    /// completion, and are retired. Returns the number still active.
    pub fn tick(&self, now_ms: u64) -> usize {
        self.inner.now_ms.store(now_ms, Ordering::SeqCst);
        let Ok(mut active) = self.inner.active.lock() else {
            return 0;
        };
        active.retain_mut(|playback| {
            if playback.tween.is_done(now_ms) {
                if let Some(apply) = &self.inner.apply {
                    apply(&playback.element, &playback.end_transform);
                }
                if let Some(completion) = playback.completion.take() {
                    completion.resolve();
                }
                return false;
            }
            let sampled = playback.tween.sample(now_ms);
            if let Some(apply) = &self.inner.apply {
                apply(
                    &playback.element,
                    &compose_transforms(&playback.end_transform, &sampled),
                );
            }
            true
        });
        active.len()
    }

    /// Fails every outstanding playback with [`PlaybackError::Canceled`].
    pub fn cancel_all(&self) {
        let Ok(mut active) = self.inner.active.lock() else {
            return;
        };
        for mut playback in active.drain(..) {
            if let Some(completion) = playback.completion.take() {
                completion.fail(PlaybackError::Canceled);
            }
        }
    }
}

impl<E: Clone + Send + Sync + 'static> TickPlayer<E> {
    /// Manufactures the `play` callback to wire into `AnimatorOptions`.
    ///
    /// Playbacks start at the player's most recent tick time; the starting
    /// frame is applied immediately (the `backwards` fill edge policy).
    pub fn play_callback(&self) -> PlayCallback<E> {
        let inner = Arc::clone(&self.inner);
        Arc::new(
            move |element: &E, request: &PlaybackRequest, completion: PlaybackCompletion| {
                let start_ms = inner.now_ms.load(Ordering::SeqCst);
                let playback = ActivePlayback {
                    element: element.clone(),
                    tween: TransformTween::new(request.starting, &request.timing, start_ms),
                    end_transform: request.end_transform.clone(),
                    completion: Some(completion),
                };
                if let Some(apply) = &inner.apply {
                    apply(&playback.element, &request.start_transform);
                }
                // A poisoned lock drops the playback, which records it as
                // abandoned.
                if let Ok(mut active) = inner.active.lock() {
                    active.push(playback);
                }
            },
        )
    }
}

impl<E> Default for TickPlayer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for TickPlayer<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> core::fmt::Debug for TickPlayer<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TickPlayer")
            .field("active", &self.active_len())
            .field("apply", &self.inner.apply.is_some())
            .finish()
    }
}
