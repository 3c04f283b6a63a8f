/// Default element handle for hosts that identify nodes by a numeric id.
pub type ElementId = u64;

/// An element's on-screen bounding box at a point in time, in CSS pixels.
///
/// Captured synchronously when the animator is armed and again when the
/// layout-change signal fires; immutable once captured. Comparison is
/// structural over all four fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A translate + scale descriptor used to build the starting animation frame.
///
/// The default value is the identity transform (no visual change).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformKeyframe {
    /// Horizontal offset in CSS pixels.
    pub translate_x: f64,
    /// Vertical offset in CSS pixels.
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for TransformKeyframe {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl TransformKeyframe {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// CSS timing-function vocabulary accepted by the playback primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// The timing-function name as the host's style system spells it.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Configuration for the next observed layout change.
///
/// At most one config is pending at a time: arming again before the signal
/// fires overwrites the previous config (last write wins, no queueing), and
/// the config is cleared the moment a firing consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
}

impl AnimationConfig {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::Linear,
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Identifies one installed layout-change watch.
///
/// A fresh id is allocated on every `arm`, and the same id is handed to the
/// `on_watch`/`on_unwatch` callbacks so the host can pair the disposal with
/// the installation it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionId(pub u64);

/// Identifies the combined completion produced by one signal firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchId(pub u64);
