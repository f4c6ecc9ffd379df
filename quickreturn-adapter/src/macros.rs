#[cfg(feature = "tracing")]
macro_rules! qrtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "quickreturn_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! qrtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! qrdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "quickreturn_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! qrdebug {
    ($($tt:tt)*) => {};
}
