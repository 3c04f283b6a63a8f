#[cfg(feature = "tracing")]
macro_rules! latrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "layout_animation", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! latrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ladebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "layout_animation", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ladebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! lawarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "layout_animation", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lawarn {
    ($($tt:tt)*) => {};
}
