use rand::Rng;
use std::time::Duration;

/// Exponent cap; with a 500ms base this tops out a little over eight minutes.
const MAX_EXPONENT: u32 = 10;

/// Exponential backoff with ±30% jitter for the `attempt`-th retry (0-based).
pub fn calculate_backoff_delay(attempt: u32, base: Duration) -> Duration {
    let capped_attempt = attempt.min(MAX_EXPONENT);
    let base_ms = u64::try_from(base.as_millis()).unwrap_or(u64::MAX);
    let delay_ms = base_ms.saturating_mul(2_u64.saturating_pow(capped_attempt));

    let jitter_factor = rand::thread_rng().gen_range(0.7..1.3);
    Duration::from_millis((delay_ms as f64 * jitter_factor).round() as u64)
}
