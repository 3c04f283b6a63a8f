use std::sync::{Arc, Mutex};

use layout_animation::LayoutAnimator;

use crate::AnimatorKey;

/// Shared handle to an application's single animator instance.
pub type SharedAnimator<E> = Arc<Mutex<LayoutAnimator<E>>>;

/// RAII registration for one animatable element.
///
/// Construction registers the element; dropping the guard deregisters it —
/// the headless counterpart of a UI component registering in its mount hook
/// and deregistering in its unmount hook. Both ends are idempotent, so a
/// guard outliving an explicit deregistration is harmless.
pub struct ElementMount<E: AnimatorKey> {
    animator: SharedAnimator<E>,
    element: E,
}

impl<E: AnimatorKey> ElementMount<E> {
    pub fn new(animator: SharedAnimator<E>, element: E) -> Self {
        if let Ok(mut guard) = animator.lock() {
            guard.register(element.clone());
        }
        Self { animator, element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}

impl<E: AnimatorKey> Drop for ElementMount<E> {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.animator.lock() {
            guard.deregister(&self.element);
        }
    }
}

impl<E: AnimatorKey + core::fmt::Debug> core::fmt::Debug for ElementMount<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElementMount")
            .field("element", &self.element)
            .finish()
    }
}
