//! A headless FLIP layout-animation engine.
//!
//! For host-side utilities (a tick-driven playback player, capability
//! detection, mount guards), see the `layout-animation-adapter` crate.
//!
//! This crate focuses on the core of a First-Last-Invert-Play pipeline:
//! snapshotting element geometry before a layout change, detecting the change
//! through a one-shot signal, synthesizing the inverse transform that makes
//! the instantaneous jump look continuous, and joining per-element playback
//! completions into one.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - element bounding-box reads
//! - a one-shot layout-change signal over a watched element set
//! - a transform playback primitive (duration/delay/easing/fill/composite)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod completion;
mod driver;
mod error;
mod key;
mod keyframe;
mod options;
mod registry;
mod types;


pub use animator::LayoutAnimator;
pub use completion::{AnimationBatch, BatchOutcome, PlaybackCompletion};
pub use driver::{
    CompositeMode, FillMode, PlaybackRequest, PlaybackTiming, TRANSFORM_ORIGIN, WILL_CHANGE,
    build_playback_request,
};
pub use error::{LayoutAnimationError, PlaybackError};
pub use keyframe::{compose_transforms, starting_keyframe, transform_css};
pub use options::{
    AnimatorOptions, BaseTransformCallback, BatchSettledCallback, MeasureCallback, PlayCallback,
    UnwatchCallback, WatchCallback,
};
pub use registry::ElementRegistry;
pub use types::{
    AnimationConfig, BatchId, Easing, ElementId, LayoutRect, SubscriptionId, TransformKeyframe,
};

#[doc(hidden)]
pub use key::ElementKey;
