//! Hexseq logging facade.
//!
//! This crate is a wrapper of the crate [`log`].
//!
//! [`log`]: https://docs.rs/log/*/log/index.html
//!
//! The macro `debug!(target: "global", "message")` is unfriendly to `cargo fmt`, so the basic
//! macros here do not accept `target: `. Use `debug_target!("global", "message")` instead.
pub use log::{self as internal, LevelFilter};

/// Logs a message at the trace level using the default target.
///
/// # Examples
///
/// ```
/// use hexseq_logger::trace;
///
/// let len = 32;
/// trace!("drawing {} random bytes", len);
/// ```
#[macro_export]
macro_rules! trace {
    ($( $args:tt )*) => {
        $crate::internal::trace!($( $args )*);
    }
}

/// Logs a message at the debug level using the default target.
#[macro_export]
macro_rules! debug {
    ($( $args:tt )*) => {
        $crate::internal::debug!($( $args )*);
    }
}

/// Logs a message at the warn level using the default target.
///
/// # Examples
///
/// ```
/// use hexseq_logger::warn;
///
/// warn!("{} is 0", "random.default_length");
/// ```
#[macro_export]
macro_rules! warn {
    ($( $args:tt )*) => {
        $crate::internal::warn!($( $args )*);
    }
}

/// Logs a message at the error level using the default target.
#[macro_export]
macro_rules! error {
    ($( $args:tt )*) => {
        $crate::internal::error!($( $args )*);
    }
}

/// Logs a message at the debug level using the specified target.
///
/// # Examples
///
/// ```
/// use hexseq_logger::debug_target;
///
/// debug_target!("hexseq::config", "loaded from {}", "hexseq.toml");
/// ```
#[macro_export]
macro_rules! debug_target {
    ($target:expr, $( $args:tt )*) => {
        $crate::internal::debug!(target: $target, $( $args )*);
    }
}

