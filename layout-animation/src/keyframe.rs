use alloc::format;
use alloc::string::String;

use crate::{LayoutRect, TransformKeyframe};

/// Computes the transform that repaints an element at its pre-change position
/// and size.
///
/// Applying this keyframe at animation start and relaxing it to the identity
/// lets the compositor interpolate smoothly from the old layout to the new one
/// without the application re-deriving any intermediate layout. The math
/// assumes a `top left` transform origin (see [`crate::TRANSFORM_ORIGIN`]).
pub fn starting_keyframe(prev: LayoutRect, next: LayoutRect) -> TransformKeyframe {
    let mut result = TransformKeyframe::default();

    if prev.left != next.left {
        result.translate_x = prev.left - next.left;
    }

    if prev.top != next.top {
        result.translate_y = prev.top - next.top;
    }

    if prev.width != next.width {
        result.scale_x = scale_factor(prev.width, next.width);
    }

    if prev.height != next.height {
        result.scale_y = scale_factor(prev.height, next.height);
    }

    result
}

fn scale_factor(prev: f64, next: f64) -> f64 {
    if next == 0.0 {
        // Zero-sized target dimension: no finite scale maps onto it, so skip
        // scale compensation for this axis rather than emit inf/NaN.
        lawarn!(prev, next, "degenerate target dimension, skipping scale");
        return 1.0;
    }
    prev / next
}

/// Renders a keyframe as a CSS transform-function list.
///
/// The functions are emitted from a fixed, explicit order — translateX,
/// translateY, scaleX, scaleY — so the output is deterministic and the
/// translate components are applied before the scale components.
pub fn transform_css(keyframe: &TransformKeyframe) -> String {
    let TransformKeyframe {
        translate_x,
        translate_y,
        scale_x,
        scale_y,
    } = *keyframe;
    format!(
        "translateX({translate_x}px) translateY({translate_y}px) scaleX({scale_x}) scaleY({scale_y})"
    )
}

/// Appends a rendered keyframe to an element's existing base transform.
///
/// The base comes first so the synthesized functions layer on top of whatever
/// transform the element already carries; an empty base yields the rendered
/// keyframe alone.
pub fn compose_transforms(base: &str, keyframe: &TransformKeyframe) -> String {
    let rendered = transform_css(keyframe);
    if base.is_empty() {
        rendered
    } else {
        format!("{base} {rendered}")
    }
}
