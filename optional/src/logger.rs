// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

// Only trace-level records are emitted: a rejected construction is caller
// misuse that is already reported through the returned error.

#[cfg(feature = "logger")]
pub use log::trace;

/// Returns true if rejected constructions are being traced
#[cfg(feature = "logger")]
#[must_use]
pub fn trace_enabled() -> bool {
    log::log_enabled!(log::Level::Trace)
}

#[cfg(not(feature = "logger"))]
#[macro_export]
/// Discards a trace record without the logger feature; the arguments are
/// still type-checked
macro_rules! optional_trace {
    ($($arg:tt)+) => {
        if $crate::logger::trace_enabled() {
            let _ = format!($($arg)+);
        }
    };
}

#[cfg(not(feature = "logger"))]
pub use optional_trace as trace;

/// Always false without the logger feature
#[cfg(not(feature = "logger"))]
#[inline]
#[must_use]
pub const fn trace_enabled() -> bool {
    false
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Operation, OptionalError};

    #[test]
    fn trace_accepts_format_arguments() {
        let operation = Operation::FlatMap;
        trace!("{operation} rejected an absent value");
        trace!("{:?}", OptionalError::NoSuchElement);
    }

    #[cfg(not(feature = "logger"))]
    #[test]
    fn trace_disabled_without_logger_feature() {
        assert!(!trace_enabled());
    }

    #[cfg(feature = "logger")]
    #[test]
    fn trace_level_follows_log_max_level() {
        log::set_max_level(log::LevelFilter::Off);
        assert!(!trace_enabled());
    }
}
