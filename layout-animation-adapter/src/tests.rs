use crate::*;

use std::collections::HashMap;
use std::string::{String, ToString};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use layout_animation::{
    AnimationConfig, AnimatorOptions, CompositeMode, Easing, ElementId, FillMode, LayoutAnimator,
    LayoutRect, PlaybackCompletion, PlaybackRequest, PlaybackTiming, SubscriptionId,
    TransformKeyframe,
};

fn rect(left: f64, top: f64, width: f64, height: f64) -> LayoutRect {
    LayoutRect::new(left, top, width, height)
}

fn timing(duration_ms: u64, delay_ms: u64, easing: Easing) -> PlaybackTiming {
    PlaybackTiming {
        duration_ms,
        delay_ms,
        easing,
        fill: FillMode::Backwards,
        composite: CompositeMode::Add,
    }
}

#[test]
fn tween_holds_the_starting_frame_through_the_delay() {
    let from = TransformKeyframe {
        translate_x: -100.0,
        ..TransformKeyframe::default()
    };
    let tween = TransformTween::new(from, &timing(100, 50, Easing::Linear), 0);

    assert_eq!(tween.sample(0), from);
    assert_eq!(tween.sample(49), from);
    assert!(!tween.is_done(49));
}

#[test]
fn tween_relaxes_to_identity() {
    let from = TransformKeyframe {
        translate_x: -100.0,
        scale_x: 2.0,
        ..TransformKeyframe::default()
    };
    let tween = TransformTween::new(from, &timing(100, 0, Easing::Linear), 0);

    let mid = tween.sample(50);
    assert_eq!(mid.translate_x, -50.0);
    assert_eq!(mid.scale_x, 1.5);

    assert!(tween.is_done(100));
    assert_eq!(tween.sample(100), TransformKeyframe::default());
    assert_eq!(tween.sample(10_000), TransformKeyframe::default());
}

#[test]
fn easing_curves_hit_their_endpoints() {
    let all = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];
    for easing in all {
        assert_eq!(evaluate(easing, 0.0), 0.0);
        assert_eq!(evaluate(easing, 1.0), 1.0);
    }

    // ease-in lags linear at the midpoint, ease-out leads it.
    assert!(evaluate(Easing::EaseIn, 0.5) < 0.5);
    assert!(evaluate(Easing::EaseOut, 0.5) > 0.5);
}

#[test]
fn capabilities_reflect_wired_callbacks() {
    let bare = AnimatorOptions::new(|_: &ElementId| LayoutRect::default());
    let caps = HostCapabilities::detect(&bare);
    assert!(!caps.layout_signal);
    assert!(!caps.transform_playback);
    assert!(!caps.is_compliant());

    let wired = AnimatorOptions::new(|_: &ElementId| LayoutRect::default())
        .with_play(Some(
            |_: &ElementId, _: &PlaybackRequest, completion: PlaybackCompletion| {
                completion.resolve();
            },
        ))
        .with_on_watch(Some(|_: SubscriptionId, _: &[ElementId]| {}))
        .with_on_unwatch(Some(|_: SubscriptionId| {}));
    assert!(HostCapabilities::detect(&wired).is_compliant());
}

#[test]
fn mount_guard_registers_and_deregisters() {
    let animator: SharedAnimator<ElementId> = Arc::new(Mutex::new(LayoutAnimator::new(
        AnimatorOptions::new(|_: &ElementId| LayoutRect::default()),
    )));

    {
        let mount = ElementMount::new(Arc::clone(&animator), 5);
        assert_eq!(mount.element(), &5);
        assert!(animator.lock().unwrap().is_registered(&5));
    }
    assert!(!animator.lock().unwrap().is_registered(&5));
}

struct PlayerHarness {
    rects: Arc<Mutex<HashMap<ElementId, LayoutRect>>>,
    applied: Arc<Mutex<Vec<(ElementId, String)>>>,
    player: TickPlayer<ElementId>,
    animator: LayoutAnimator<ElementId>,
}

impl PlayerHarness {
    fn new() -> Self {
        let rects = Arc::new(Mutex::new(HashMap::new()));
        let applied: Arc<Mutex<Vec<(ElementId, String)>>> = Arc::new(Mutex::new(Vec::new()));

        let player = TickPlayer::with_apply({
            let applied = Arc::clone(&applied);
            move |element: &ElementId, transform: &str| {
                applied
                    .lock()
                    .unwrap()
                    .push((*element, transform.to_string()));
            }
        });

        let mut options = AnimatorOptions::new({
            let rects = Arc::clone(&rects);
            move |element: &ElementId| {
                rects
                    .lock()
                    .unwrap()
                    .get(element)
                    .copied()
                    .unwrap_or_default()
            }
        });
        options.play = Some(player.play_callback());

        Self {
            rects,
            applied,
            player,
            animator: LayoutAnimator::new(options),
        }
    }

    fn set_rect(&self, element: ElementId, rect: LayoutRect) {
        self.rects.lock().unwrap().insert(element, rect);
    }

    fn last_applied(&self) -> Option<(ElementId, String)> {
        self.applied.lock().unwrap().last().cloned()
    }
}

#[test]
fn tick_player_drives_a_batch_to_settlement() {
    let mut h = PlayerHarness::new();
    h.set_rect(1, rect(0.0, 0.0, 50.0, 50.0));
    h.animator.register(1);

    h.player.tick(0);
    h.animator.arm(AnimationConfig::new(100));
    h.set_rect(1, rect(100.0, 0.0, 50.0, 50.0));

    let batch = h.animator.notify_layout_change(&[1]).unwrap();
    assert!(!batch.is_settled());
    assert_eq!(h.player.active_len(), 1);

    // The starting frame lands immediately, before any tick.
    assert_eq!(
        h.last_applied().unwrap().1,
        "translateX(-100px) translateY(0px) scaleX(1) scaleY(1)"
    );

    h.player.tick(50);
    assert!(!batch.is_settled());
    assert_eq!(
        h.last_applied().unwrap().1,
        "translateX(-50px) translateY(0px) scaleX(1) scaleY(1)"
    );

    h.player.tick(100);
    assert!(batch.is_settled());
    assert!(batch.outcome().unwrap().is_success());
    assert!(h.player.is_idle());
    // The resting transform (empty base) is applied last.
    assert_eq!(h.last_applied().unwrap().1, "");
}

#[test]
fn playback_delay_holds_the_start_frame() {
    let mut h = PlayerHarness::new();
    h.set_rect(1, rect(0.0, 0.0, 50.0, 50.0));
    h.animator.register(1);

    h.animator
        .arm(AnimationConfig::new(100).with_delay_ms(50));
    h.set_rect(1, rect(0.0, 80.0, 50.0, 50.0));
    let batch = h.animator.notify_layout_change(&[1]).unwrap();

    h.player.tick(25);
    assert_eq!(
        h.last_applied().unwrap().1,
        "translateX(0px) translateY(-80px) scaleX(1) scaleY(1)"
    );
    assert!(!batch.is_settled());

    h.player.tick(150);
    assert!(batch.is_settled());
}

#[test]
fn cancel_all_fails_outstanding_playbacks() {
    let mut h = PlayerHarness::new();
    h.set_rect(1, rect(0.0, 0.0, 50.0, 50.0));
    h.animator.register(1);

    h.animator.arm(AnimationConfig::new(100));
    h.set_rect(1, rect(10.0, 0.0, 50.0, 50.0));
    let batch = h.animator.notify_layout_change(&[1]).unwrap();

    h.player.cancel_all();
    assert!(batch.is_settled());
    let outcome = batch.outcome().unwrap();
    assert_eq!(outcome.failed, 1);
    assert!(!outcome.is_success());
    assert!(h.player.is_idle());
}
