//! Metrics declaration and recording.

use crate::freshness::Freshness;

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
lazy_static! {
    /// Track number of fresh verdicts.
    pub static ref FRESH_VERDICT_COUNTER: &'static str = {
        metrics::describe_counter!(
            "fresh_verdict_fresh_total",
            "Total number of conditional requests evaluated as fresh."
        );
        "fresh_verdict_fresh_total"
    };
    /// Track number of stale verdicts, labeled by reason.
    pub static ref STALE_VERDICT_COUNTER: &'static str = {
        metrics::describe_counter!(
            "fresh_verdict_stale_total",
            "Total number of requests evaluated as stale."
        );
        "fresh_verdict_stale_total"
    };
}

/// Record a freshness verdict.
///
/// When the `metrics` feature is disabled, this function is a no-op
/// and will be eliminated by the compiler.
#[cfg(feature = "metrics")]
#[inline]
pub fn record_verdict(verdict: &Freshness) {
    match verdict {
        Freshness::Fresh => metrics::counter!(*FRESH_VERDICT_COUNTER).increment(1),
        Freshness::Stale(reason) => {
            metrics::counter!(*STALE_VERDICT_COUNTER, "reason" => reason.as_str()).increment(1)
        }
    }
}

/// No-op version when metrics feature is disabled.
#[cfg(not(feature = "metrics"))]
#[inline]
pub fn record_verdict(_verdict: &Freshness) {}
