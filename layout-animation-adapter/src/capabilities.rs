use layout_animation::AnimatorOptions;

/// Which of the two host capabilities the engine depends on are actually
/// wired: a one-shot layout-change signal source and a transform playback
/// primitive.
///
/// The engine degrades gracefully without them (layout changes land
/// instantly, uncompensated), so hosts typically gate the animated experience
/// on `is_compliant` and otherwise skip arming altogether.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostCapabilities {
    pub layout_signal: bool,
    pub transform_playback: bool,
}

impl HostCapabilities {
    pub fn detect<E>(options: &AnimatorOptions<E>) -> Self {
        Self {
            layout_signal: options.on_watch.is_some() && options.on_unwatch.is_some(),
            transform_playback: options.play.is_some(),
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.layout_signal && self.transform_playback
    }
}
