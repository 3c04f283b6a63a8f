#[cfg(feature = "std")]
pub trait AnimatorKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> AnimatorKey for T {}

#[cfg(not(feature = "std"))]
pub trait AnimatorKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> AnimatorKey for T {}
