use alloc::string::{String, ToString};

use crate::keyframe::compose_transforms;
use crate::types::{AnimationConfig, Easing, TransformKeyframe};

/// The transform origin the keyframe math assumes.
///
/// Scale compensation is computed relative to the element's top-left corner;
/// hosts must style animated elements with this origin or scaled frames will
/// drift.
pub const TRANSFORM_ORIGIN: &str = "top left";

/// Style hint hosts should set on animated elements so the compositor keeps
/// them on their own layer.
pub const WILL_CHANGE: &str = "transform";

/// CSS fill-mode vocabulary for the playback primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillMode {
    #[default]
    None,
    Forwards,
    /// The starting frame's value holds from animation-creation time until
    /// playback begins, covering any configured delay.
    Backwards,
    Both,
}

impl FillMode {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forwards => "forwards",
            Self::Backwards => "backwards",
            Self::Both => "both",
        }
    }
}

/// CSS composite-operation vocabulary for the playback primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositeMode {
    #[default]
    Replace,
    /// The animated transform is layered on top of whatever transform is
    /// already applied by other means.
    Add,
    Accumulate,
}

impl CompositeMode {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Add => "add",
            Self::Accumulate => "accumulate",
        }
    }
}

/// Timing parameters handed to the playback primitive alongside the frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackTiming {
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
    pub fill: FillMode,
    pub composite: CompositeMode,
}

/// A ready-to-play two-frame animation for one element.
///
/// The start frame paints the element where it used to be; the end frame is
/// the element's resting transform, so playback relaxes the compensation back
/// to the new layout. The raw starting keyframe rides along for hosts that
/// sample transforms themselves instead of handing strings to a style system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackRequest {
    /// The synthesized starting keyframe before rendering.
    pub starting: TransformKeyframe,
    /// The element's base transform composed with the synthesized starting
    /// keyframe.
    pub start_transform: String,
    /// The element's base transform alone.
    pub end_transform: String,
    pub timing: PlaybackTiming,
}

/// Builds the playback request for one element.
///
/// Fill is pinned to `backwards` so the starting frame holds through the
/// delay (no flash of the resting position), and composition is pinned to
/// `add` so the animation layers over transforms applied by other means.
pub fn build_playback_request(
    base_transform: &str,
    starting: &TransformKeyframe,
    config: &AnimationConfig,
) -> PlaybackRequest {
    PlaybackRequest {
        starting: *starting,
        start_transform: compose_transforms(base_transform, starting),
        end_transform: base_transform.to_string(),
        timing: PlaybackTiming {
            duration_ms: config.duration_ms,
            delay_ms: config.delay_ms,
            easing: config.easing,
            fill: FillMode::Backwards,
            composite: CompositeMode::Add,
        },
    }
}
