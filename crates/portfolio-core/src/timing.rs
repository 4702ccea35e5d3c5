//! Duration helpers for browser timers.

use std::time::Duration;

/// Whole milliseconds as the `u32` browser timers take, saturating.
pub fn timer_ms(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_ms_saturates() {
        assert_eq!(timer_ms(Duration::from_millis(100)), 100);
        assert_eq!(timer_ms(Duration::ZERO), 0);
        assert_eq!(timer_ms(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
