//! Host-side utilities for the `layout-animation` crate.
//!
//! The `layout-animation` crate is UI-agnostic and focuses on the core
//! scheduling and keyframe math. This crate provides small, framework-neutral
//! helpers commonly needed by hosts:
//!
//! - A tick-driven playback player for frame-loop environments (std)
//! - A transform tween with CSS timing-function evaluation
//! - Host-capability detection (the feature-gate pattern)
//! - RAII mount guards tying registration to value lifetime (std)
//!
//! This crate is intentionally framework-agnostic (no DOM/GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod capabilities;
mod key;
#[cfg(feature = "std")]
mod mount;
#[cfg(feature = "std")]
mod player;
mod tween;

#[cfg(test)]
mod tests;

pub use capabilities::HostCapabilities;
pub use key::AnimatorKey;
#[cfg(feature = "std")]
pub use mount::{ElementMount, SharedAnimator};
#[cfg(feature = "std")]
pub use player::TickPlayer;
pub use tween::{TransformTween, evaluate};
