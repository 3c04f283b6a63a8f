use thiserror::Error;

/// Errors surfaced by [`crate::LayoutAnimator::notify_layout_change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutAnimationError {
    /// The layout-change signal named an element with no captured starting
    /// rect.
    ///
    /// This cannot happen when arming and signal installation are sequenced
    /// correctly (geometry is captured for every watched element before the
    /// watch is installed), so it indicates a host wiring bug: most likely a
    /// signal delivered for an element that was registered after `arm`, or a
    /// stale observer that outlived its subscription. The firing is aborted
    /// before any playback starts.
    #[error("layout change fired for an element without a captured starting rect")]
    MissingSnapshot,
}

/// A per-element playback failure reported by the host primitive.
///
/// These never crash the scheduler; they are absorbed into the batch outcome
/// and logged, leaving the underlying (non-animated) layout change in effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The primitive refused to start the animation.
    #[error("playback was rejected by the host primitive")]
    Rejected,
    /// The animation was canceled before it finished.
    #[error("playback was canceled before it finished")]
    Canceled,
    /// The completion handle was dropped without being resolved.
    #[error("playback completion was dropped without being resolved")]
    Abandoned,
}
