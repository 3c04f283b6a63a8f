use alloc::string::String;
use alloc::vec::Vec;

use crate::completion::AnimationBatch;
use crate::driver::build_playback_request;
use crate::error::LayoutAnimationError;
use crate::key::{ElementKey, RectMap};
use crate::keyframe::starting_keyframe;
use crate::registry::ElementRegistry;
use crate::{AnimationConfig, AnimatorOptions, BatchId, ElementId, LayoutRect, SubscriptionId};

/// The layout-animation scheduler.
///
/// One instance is the animation-arming authority for an application: it owns
/// the element registry, the per-cycle geometry cache, and the pending
/// config. It is intentionally UI-agnostic — host capabilities (geometry
/// reads, the layout-change watch, the playback primitive) are supplied
/// through [`AnimatorOptions`] callbacks, and the host drives the machine by
/// calling methods on its single logical thread.
///
/// The cycle: `arm(config)` snapshots every registered element's geometry and
/// installs a one-shot watch → the host mutates layout → the host reports the
/// change via `notify_layout_change` → the scheduler synthesizes one inverse
/// starting transform per changed element and hands each to the playback
/// primitive → the returned [`AnimationBatch`] settles when every element is
/// done. The machine then sits in the idle state and can be armed again
/// indefinitely.
#[derive(Clone, Debug)]
pub struct LayoutAnimator<E = ElementId> {
    options: AnimatorOptions<E>,
    registry: ElementRegistry<E>,
    prev_rects: RectMap<E>,
    pending: Option<AnimationConfig>,
    subscription: Option<SubscriptionId>,
    next_subscription: u64,
    next_batch: u64,
}

impl<E: ElementKey> LayoutAnimator<E> {
    pub fn new(options: AnimatorOptions<E>) -> Self {
        Self {
            options,
            registry: ElementRegistry::new(),
            prev_rects: RectMap::new(),
            pending: None,
            subscription: None,
            next_subscription: 0,
            next_batch: 0,
        }
    }

    pub fn options(&self) -> &AnimatorOptions<E> {
        &self.options
    }

    /// Replaces the host callbacks.
    ///
    /// An armed cycle is not disturbed: the already-captured geometry cache
    /// and installed watch stay valid, and only subsequent operations see the
    /// new callbacks.
    pub fn set_options(&mut self, options: AnimatorOptions<E>) {
        self.options = options;
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut AnimatorOptions<E>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Adds an element to the registry (mount).
    ///
    /// Elements registered while a cycle is armed are not part of that
    /// cycle's watched set — only the next `arm` picks them up.
    pub fn register(&mut self, element: E) -> bool {
        let inserted = self.registry.register(element);
        if inserted {
            latrace!(registered = self.registry.len(), "element registered");
        }
        inserted
    }

    /// Removes an element from the registry (unmount). Idempotent.
    pub fn deregister(&mut self, element: &E) -> bool {
        let removed = self.registry.deregister(element);
        if removed {
            latrace!(registered = self.registry.len(), "element deregistered");
        }
        removed
    }

    pub fn is_registered(&self, element: &E) -> bool {
        self.registry.contains(element)
    }

    pub fn registered_len(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &ElementRegistry<E> {
        &self.registry
    }

    /// `true` between an `arm` and the firing (or superseding) that consumes
    /// it.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_config(&self) -> Option<AnimationConfig> {
        self.pending
    }

    /// The currently installed watch, if any.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// The arm-time rect captured for `element` in the current cycle.
    pub fn cached_rect(&self, element: &E) -> Option<LayoutRect> {
        self.prev_rects.get(element).copied()
    }

    /// Number of arm-time rects held for the current cycle.
    pub fn cache_len(&self) -> usize {
        self.prev_rects.len()
    }

    /// Visits the arm-time geometry cache without allocating.
    pub fn for_each_cached_rect(&self, mut f: impl FnMut(&E, LayoutRect)) {
        for (element, rect) in &self.prev_rects {
            f(element, *rect);
        }
    }

    /// Arms the scheduler: the next observed layout change will be animated
    /// with `config`.
    ///
    /// Valid from the idle or the armed state. Re-arming supersedes the
    /// previous arm wholesale — its config is overwritten, its geometry cache
    /// is rebuilt, and its watch is disposed *before* the new one is
    /// installed so two subscriptions can never overlap.
    ///
    /// Ordering within one arm is load-bearing: the config is stored, then
    /// geometry is captured for every registered element, then the watch is
    /// installed. Capturing after installation could race a layout change
    /// arriving in between.
    pub fn arm(&mut self, config: AnimationConfig) {
        self.dispose_subscription();

        self.pending = Some(config);
        self.prev_rects.clear();

        let watched = self.registry.snapshot();
        for element in &watched {
            let rect = (self.options.measure)(element);
            self.prev_rects.insert(element.clone(), rect);
        }

        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscription = Some(id);

        ladebug!(
            subscription = id.0,
            watched = watched.len(),
            duration_ms = config.duration_ms,
            "armed"
        );

        if let Some(watch) = &self.options.on_watch {
            watch(id, &watched);
        }
    }

    /// Reports that the watched layout changed, listing the affected
    /// elements.
    ///
    /// The subscription is torn down first (at most one firing per arm). A
    /// fire with no pending config — duplicate delivery, or a signal that
    /// raced a consuming fire — is benign and returns an already-settled
    /// empty batch without touching any state.
    ///
    /// Every signaled element must carry an arm-time rect; a missing entry is
    /// a host wiring bug and aborts the firing with
    /// [`LayoutAnimationError::MissingSnapshot`] before any playback starts.
    ///
    /// Per element: geometry is re-measured; an unchanged rect completes as a
    /// no-op, a changed rect gets a synthesized starting keyframe played by
    /// the host primitive. The returned batch settles once every element has
    /// resolved or failed.
    pub fn notify_layout_change(
        &mut self,
        changed: &[E],
    ) -> Result<AnimationBatch, LayoutAnimationError> {
        self.dispose_subscription();

        let Some(config) = self.pending.take() else {
            latrace!("layout change with no pending config, resolving as no-op");
            return Ok(self.empty_batch());
        };

        // Validate the whole set up front so a contract violation aborts the
        // firing before any animation starts.
        for element in changed {
            if !self.prev_rects.contains_key(element) {
                lawarn!("layout change fired for an element with no cached rect");
                self.prev_rects.clear();
                return Err(LayoutAnimationError::MissingSnapshot);
            }
        }

        let batch = AnimationBatch::new(
            self.alloc_batch_id(),
            changed.len(),
            self.options.on_batch_settled.clone(),
        );

        for element in changed {
            let Some(prev) = self.prev_rects.get(element).copied() else {
                continue; // validated above
            };
            let next = (self.options.measure)(element);
            let completion = batch.slot();

            if prev == next {
                latrace!("geometry unchanged, completing without playback");
                completion.resolve();
                continue;
            }

            let starting = starting_keyframe(prev, next);
            let base = match &self.options.base_transform {
                Some(base_transform) => base_transform(element),
                None => String::new(),
            };
            let request = build_playback_request(&base, &starting, &config);

            match &self.options.play {
                Some(play) => play(element, &request, completion),
                // No playback primitive wired: the layout change stands
                // uncompensated and the slot completes immediately.
                None => completion.resolve(),
            }
        }

        self.prev_rects.clear();
        ladebug!(
            batch = batch.id().0,
            elements = changed.len(),
            "layout change dispatched"
        );
        Ok(batch)
    }

    fn dispose_subscription(&mut self) {
        if let Some(id) = self.subscription.take() {
            latrace!(subscription = id.0, "subscription disposed");
            if let Some(unwatch) = &self.options.on_unwatch {
                unwatch(id);
            }
        }
    }

    fn empty_batch(&mut self) -> AnimationBatch {
        AnimationBatch::new(self.alloc_batch_id(), 0, self.options.on_batch_settled.clone())
    }

    fn alloc_batch_id(&mut self) -> BatchId {
        let id = BatchId(self.next_batch);
        self.next_batch += 1;
        id
    }

    /// Returns the elements watched by the current cycle.
    pub fn watched_elements(&self) -> Vec<E> {
        self.prev_rects.keys().cloned().collect()
    }
}
