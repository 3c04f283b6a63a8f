use layout_animation::{Easing, PlaybackTiming, TransformKeyframe};

/// Samples a synthesized starting keyframe back to the identity transform.
///
/// Timing mirrors the playback request it is built from: the starting frame
/// holds from creation until the delay has elapsed (the `backwards` fill edge
/// policy), then progress runs over the duration shaped by the easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformTween {
    pub from: TransformKeyframe,
    pub start_ms: u64,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TransformTween {
    pub fn new(from: TransformKeyframe, timing: &PlaybackTiming, start_ms: u64) -> Self {
        Self {
            from,
            start_ms,
            delay_ms: timing.delay_ms,
            duration_ms: timing.duration_ms.max(1),
            easing: timing.easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.delay_ms.saturating_add(self.duration_ms)
    }

    pub fn sample(&self, now_ms: u64) -> TransformKeyframe {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed < self.delay_ms {
            // fill=backwards: hold the starting frame through the delay.
            return self.from;
        }

        let t = ((elapsed - self.delay_ms) as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = evaluate(self.easing, t) as f64;

        let identity = TransformKeyframe::default();
        TransformKeyframe {
            translate_x: lerp(self.from.translate_x, identity.translate_x, eased),
            translate_y: lerp(self.from.translate_y, identity.translate_y, eased),
            scale_x: lerp(self.from.scale_x, identity.scale_x, eased),
            scale_y: lerp(self.from.scale_y, identity.scale_y, eased),
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Evaluates a CSS timing function at linear progress `t` in `[0, 1]`.
///
/// The named curves use the control points the CSS specification assigns
/// them; the bezier is solved for the curve parameter with Newton-Raphson.
pub fn evaluate(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
        Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
        Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
        Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    // Find the curve parameter whose x coordinate matches the input progress,
    // then evaluate y there.
    let mut t = progress;
    for _ in 0..8 {
        let x = bezier_axis(x1, x2, t) - progress;
        if (-1e-6..=1e-6).contains(&x) {
            break;
        }
        let dx = bezier_axis_derivative(x1, x2, t);
        if (-1e-6..=1e-6).contains(&dx) {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    bezier_axis(y1, y2, t)
}

/// One axis of the bezier: `3(1-t)²t·p1 + 3(1-t)t²·p2 + t³`.
fn bezier_axis(p1: f32, p2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t2 * p2 + t3
}

fn bezier_axis_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
