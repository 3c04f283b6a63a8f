// Example: animate a hot-reload style relayout across several elements,
// with watch/unwatch callbacks standing in for a resize-observer layer.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use layout_animation::{
    AnimationConfig, AnimatorOptions, BatchId, Easing, ElementId, LayoutAnimator, LayoutRect,
    PlaybackCompletion, PlaybackRequest, SubscriptionId,
};

fn main() {
    let rects: Arc<Mutex<HashMap<ElementId, LayoutRect>>> = Arc::new(Mutex::new(HashMap::new()));
    {
        let mut rects = rects.lock().unwrap();
        rects.insert(1, LayoutRect::new(0.0, 0.0, 200.0, 100.0));
        rects.insert(2, LayoutRect::new(0.0, 120.0, 200.0, 100.0));
        rects.insert(3, LayoutRect::new(0.0, 240.0, 200.0, 100.0));
    }

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
            println!("animate element {element}: {}", request.start_transform);
            completion.resolve();
        },
    ))
    .with_on_watch(Some(|id: SubscriptionId, elements: &[ElementId]| {
        println!("observe {} elements (subscription {})", elements.len(), id.0);
    }))
    .with_on_unwatch(Some(|id: SubscriptionId| {
        println!("subscription {} disposed", id.0);
    }))
    .with_on_batch_settled(Some(|id: BatchId, outcome| {
        println!("batch {} settled: {outcome:?}", id.0);
    }));

    let mut animator = LayoutAnimator::new(options);
    for element in 1..=3 {
        animator.register(element);
    }

    // "If the result of a reload causes a change in layout, animate it."
    animator.arm(AnimationConfig::new(1000).with_easing(Easing::Ease));

    // The new revision lands: the middle element grows and pushes the rest.
    {
        let mut rects = rects.lock().unwrap();
        rects.insert(2, LayoutRect::new(0.0, 120.0, 200.0, 160.0));
        rects.insert(3, LayoutRect::new(0.0, 300.0, 200.0, 100.0));
    }

    let batch = animator.notify_layout_change(&[2, 3]).unwrap();
    println!("outcome: {:?}", batch.outcome());

    // The machine is idle again and can be re-armed for the next reload.
    assert!(!animator.is_armed());
}
