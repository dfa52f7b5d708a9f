//! Warranty-expiry arithmetic.
//!
//! A warranty "month" is a fixed 30 days expressed in milliseconds, not a
//! calendar month. Every call site that cares about expiry (the horizon
//! filter and the warranty-status split) goes through this module, so the
//! conversion exists exactly once.

use chrono::{DateTime, Duration, Utc};

/// Milliseconds in one warranty month (30 days).
const MONTH_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// The instant a product's warranty ends.
///
/// Total for any input: `warranty_months = 0` yields the purchase date
/// itself, and an addition past the representable range saturates at the
/// maximum instant.
pub fn warranty_expiry(date_of_purchase: DateTime<Utc>, warranty_months: u32) -> DateTime<Utc> {
    add_months(date_of_purchase, warranty_months)
}

/// The cutoff for an "expiring within N months" horizon, using the same
/// month conversion as [`warranty_expiry`].
pub fn horizon_threshold(now: DateTime<Utc>, horizon_months: u32) -> DateTime<Utc> {
    add_months(now, horizon_months)
}

fn add_months(instant: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let ms = i64::from(months).saturating_mul(MONTH_MS);
    instant
        .checked_add_signed(Duration::milliseconds(ms))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
