#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::LayoutRect;

#[cfg(feature = "std")]
pub(crate) type RectMap<E> = HashMap<E, LayoutRect>;
#[cfg(not(feature = "std"))]
pub(crate) type RectMap<E> = BTreeMap<E, LayoutRect>;

#[cfg(feature = "std")]
pub(crate) type ElementSet<E> = HashSet<E>;
#[cfg(not(feature = "std"))]
pub(crate) type ElementSet<E> = BTreeSet<E>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait ElementKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<E: core::hash::Hash + Eq + Clone> ElementKey for E {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait ElementKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<E: Ord + Clone> ElementKey for E {}
