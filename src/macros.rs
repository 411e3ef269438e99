//! Statement-style logging macros.
//!
//! Each macro builds a temporary [`Log`](crate::Log), activates it and
//! writes the formatted message; the temporary is dropped at the end of the
//! statement, which is where the emit decision is made.
//!
//! # Examples
//!
//! ```
//! use scope_log::{loge, logd, logi, logw};
//!
//! logi!("Server started");
//! logw!("Retry attempt {} of {}", 3, 5);
//! loge!("Failed to connect to {}", "db.internal");
//! logd!("payload bytes: {}", 512);
//! ```

/// Log at an explicit severity.
///
/// # Examples
///
/// ```
/// use scope_log::{log_at, Severity};
/// log_at!(Severity::Info, "Simple message");
/// log_at!(Severity::Error, "Error code: {}", 500);
/// log_at!(Severity::Debug);
/// ```
#[macro_export]
macro_rules! log_at {
    ($level:expr) => {{
        let mut __log = $crate::Log::new();
        __log.get($level);
    }};
    ($level:expr, $($arg:tt)+) => {{
        use ::std::fmt::Write as _;
        let mut __log = $crate::Log::new();
        let _ = ::std::write!(__log.get($level), $($arg)+);
    }};
}

/// Log an error-level message.
#[macro_export]
macro_rules! loge {
    () => {
        $crate::log_at!($crate::Severity::Error)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! logw {
    () => {
        $crate::log_at!($crate::Severity::Warn)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! logi {
    () => {
        $crate::log_at!($crate::Severity::Info)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! logd {
    () => {
        $crate::log_at!($crate::Severity::Debug)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Debug, $($arg)+)
    };
}

/// Check the threshold first, and only build and format the statement when
/// it will be emitted.
///
/// # Examples
///
/// ```
/// use scope_log::{file_log, Severity};
/// file_log!(Severity::Debug, "expensive: {:?}", vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! file_log {
    ($level:expr, $($arg:tt)+) => {{
        let __level: $crate::Severity = $level;
        if __level <= $crate::reporting_level() {
            $crate::log_at!(__level, $($arg)+);
        }
    }};
}

/// Run a block only when debug output is enabled.
///
/// # Examples
///
/// ```
/// use scope_log::{if_debug, logd};
/// if_debug! {
///     let snapshot = format!("{:?}", (1, 2));
///     logd!("state {}", snapshot);
/// }
/// ```
#[macro_export]
macro_rules! if_debug {
    ($($body:tt)*) => {
        if $crate::Severity::Debug <= $crate::reporting_level() {
            $($body)*
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Severity;

    #[test]
    fn test_log_at_macro() {
        log_at!(Severity::Info, "Test message");
        log_at!(Severity::Info, "Formatted: {}", 42);
        log_at!(Severity::Warn);
    }

    #[test]
    fn test_level_macros() {
        loge!("Error message");
        logw!("Retry {} of {}", 1, 3);
        logi!("Items: {}", 100);
        logd!("Count: {}", 5);
        logd!();
    }

    #[test]
    fn test_file_log_macro() {
        file_log!(Severity::Error, "Code: {}", 500);
    }

    #[test]
    fn test_if_debug_macro() {
        let mut ran = false;
        if_debug! {
            ran = true;
        }
        assert!(ran);
    }
}
