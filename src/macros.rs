//! Variadic call shape over [`Log`](crate::Log): `info!(logger, "took %dms", elapsed)`.
//!
//! Every argument expression goes through `Arg::from`, so anything with a `From`
//! impl (strings, integers, floats, bools, chars) can be passed directly.

/// Logs at an explicit level: `log!(logger, Level::Warn, "retry %d of %d", n, max)`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Log as _;
        ($logger).log($level, $template, &[$($crate::fmt::Arg::from($arg)),*]);
    }};
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Trace, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warn, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $template $(, $arg)*)
    };
}

/// Same as the other levels: formats and emits, never exits.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Fatal, $template $(, $arg)*)
    };
}
