// Example: minimal arm → mutate → fire cycle.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use layout_animation::{
    AnimationConfig, AnimatorOptions, ElementId, LayoutAnimator, LayoutRect, PlaybackCompletion,
    PlaybackRequest,
};

fn main() {
    let rects: Arc<Mutex<HashMap<ElementId, LayoutRect>>> = Arc::new(Mutex::new(HashMap::new()));
    rects
        .lock()
        .unwrap()
        .insert(1, LayoutRect::new(0.0, 0.0, 50.0, 50.0));

    let options = AnimatorOptions::new({
        let rects = Arc::clone(&rects);
        move |element: &ElementId| {
            rects
                .lock()
                .unwrap()
                .get(element)
                .copied()
                .unwrap_or_default()
        }
    })
    .with_play(Some(
        |element: &ElementId, request: &PlaybackRequest, completion: PlaybackCompletion| {
            println!("play element {element}:");
            println!("  start: {}", request.start_transform);
            println!("  end:   {:?}", request.end_transform);
            println!("  {:?}", request.timing);
            // A real host resolves once native playback finishes.
            completion.resolve();
        },
    ));

    let mut animator = LayoutAnimator::new(options);
    animator.register(1);

    animator.arm(AnimationConfig::new(300));

    // The layout change lands instantly...
    rects
        .lock()
        .unwrap()
        .insert(1, LayoutRect::new(100.0, 0.0, 50.0, 50.0));

    // ...and the fire synthesizes the compensating animation.
    let batch = animator.notify_layout_change(&[1]).unwrap();
    println!("settled: {:?}", batch.outcome());
}
