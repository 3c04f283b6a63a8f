// Example: drive playback from a simulated 60fps frame loop.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use layout_animation::{AnimationConfig, AnimatorOptions, Easing, ElementId, LayoutAnimator, LayoutRect};
use layout_animation_adapter::TickPlayer;

fn main() {
    let rects: Arc<Mutex<HashMap<ElementId, LayoutRect>>> = Arc::new(Mutex::new(HashMap::new()));
    rects
        .lock()
        .unwrap()
        .insert(1, LayoutRect::new(0.0, 0.0, 80.0, 80.0));

    let player = TickPlayer::with_apply(|element: &ElementId, transform: &str| {
        println!("  style[{element}].transform = {transform:?}");
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

    let mut animator = LayoutAnimator::new(options);
    animator.register(1);

    animator.arm(AnimationConfig::new(240).with_easing(Easing::EaseInOut));

    // The element jumps to a new position and doubles in width.
    rects
        .lock()
        .unwrap()
        .insert(1, LayoutRect::new(120.0, 40.0, 160.0, 80.0));

    let batch = animator.notify_layout_change(&[1]).unwrap();

    // Simulate a 60fps tick loop until playback finishes.
    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        println!("t={now_ms}ms");
        if player.tick(now_ms) == 0 {
            break;
        }
    }

    println!("settled: {:?}", batch.outcome());
}
