#[cfg(feature = "tracing")]
macro_rules! qrtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "quickreturn", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! qrtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! qrdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "quickreturn", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! qrdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! qrwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "quickreturn", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! qrwarn {
    ($($tt:tt)*) => {};
}
