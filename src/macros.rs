//! `format!`-style entry points for `ProcessLogger`.

/// Log a phase-tagged line.
///
/// ```rust,no_run
/// use phaselog::{ProcessLogger, plog};
///
/// let logger = ProcessLogger::default();
/// plog!(logger, "loaded {} entries", 42);
/// ```
#[macro_export]
macro_rules! plog {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(::std::format_args!($($arg)+))
    };
}

/// Write a fatal message and terminate the process with status 1.
///
/// The format string is written as-is; add `\n` yourself if you want one.
#[macro_export]
macro_rules! plog_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_fatal(::std::format_args!($($arg)+))
    };
}

/// Fatal-log unless the condition holds.
#[macro_export]
macro_rules! guarantee {
    ($logger:expr, $cond:expr, $($arg:tt)+) => {
        $logger.guarantee($cond, ::std::format_args!($($arg)+))
    };
}
