use alloc::vec::Vec;

use crate::ElementId;
use crate::key::{ElementKey, ElementSet};

/// The set of currently-mounted animatable elements.
///
/// Elements self-register on mount and deregister on unmount; membership is
/// by identity and both operations are idempotent. Iteration is exposed two
/// ways: `for_each` for zero-allocation walks, and `snapshot` for passes that
/// must keep working while the host mutates membership as a side effect (the
/// scheduler snapshots before measuring, so a deregistration triggered by a
/// measurement callback cannot corrupt the pass).
#[derive(Clone, Debug)]
pub struct ElementRegistry<E = ElementId> {
    members: ElementSet<E>,
}

impl<E: ElementKey> ElementRegistry<E> {
    pub fn new() -> Self {
        Self {
            members: ElementSet::new(),
        }
    }

    /// Adds an element. Registering an existing member is a no-op.
    ///
    /// Returns `true` when membership actually changed.
    pub fn register(&mut self, element: E) -> bool {
        self.members.insert(element)
    }

    /// Removes an element. Deregistering a non-member is a no-op.
    ///
    /// Returns `true` when membership actually changed.
    pub fn deregister(&mut self, element: &E) -> bool {
        self.members.remove(element)
    }

    pub fn contains(&self, element: &E) -> bool {
        self.members.contains(element)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Visits every member without allocating. Order is unspecified.
    pub fn for_each(&self, mut f: impl FnMut(&E)) {
        for element in &self.members {
            f(element);
        }
    }

    /// Returns an owned copy of the current membership.
    pub fn snapshot(&self) -> Vec<E> {
        self.members.iter().cloned().collect()
    }
}

impl<E: ElementKey> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}
