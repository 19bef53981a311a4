//! Arrival-time math for stale feeds.

/// Shown ETA after `elapsed_minutes` without a refresh, floored at zero.
///
/// Stored ETAs are never mutated; this is re-derived at projection time, so
/// repeated draws at the same age agree.
pub fn extrapolated(eta_minutes: i16, elapsed_minutes: u32) -> i16 {
    let elapsed = elapsed_minutes.min(i16::MAX as u32) as i16;
    eta_minutes.saturating_sub(elapsed).max(0)
}

/// Minutes below which a bus counts as barely catchable, from the walk
/// distance to the stop: one minute of margin plus 90 s per 100 m.
pub fn approach_limit(distance_m: i32) -> i16 {
    let meters = i64::from(distance_m.max(0));
    let limit = 1 + (meters * 3 + 199) / 200;
    limit.min(i64::from(i16::MAX)) as i16
}
