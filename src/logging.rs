//! Internal logging macros.
//!
//! Forward to the `log` facade when the `logging` feature is enabled and
//! expand to nothing otherwise.

#[cfg(feature = "logging")]
macro_rules! rules_trace {
    ($($arg:tt)*) => { log::trace!(target: "powerup_chess", $($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! rules_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! rules_debug {
    ($($arg:tt)*) => { log::debug!(target: "powerup_chess", $($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! rules_debug {
    ($($arg:tt)*) => {};
}
