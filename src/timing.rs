//! Wall-clock timing of individual operations.
//!
//! Measurements are reported as `tracing` events on the
//! `tortoise_maps::timing` target and never change or abort the measured
//! operation.

use std::time::{Duration, Instant};

/// Reports the time elapsed since `start` under `label` and returns it.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use tortoise_maps::timing::display_operation_time;
///
/// let start = Instant::now();
/// let elapsed = display_operation_time(start, "nothing at all");
/// assert!(elapsed <= start.elapsed());
/// ```
pub fn display_operation_time(start: Instant, label: &str) -> Duration {
    let elapsed = start.elapsed();
    // Saturate instead of failing on a duration that does not fit.
    let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
    tracing::info!(target: "tortoise_maps::timing", label, elapsed_ns, "operation timed");
    elapsed
}

/// Runs `operation`, reports how long it took under `label`, and returns its
/// result untouched.
///
/// # Examples
///
/// ```
/// use tortoise_maps::timing::measure;
///
/// let sum = measure("sum", || (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// ```
pub fn measure<T>(label: &str, operation: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let output = operation();
    display_operation_time(start, label);
    output
}
