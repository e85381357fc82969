//! Time unit conversions, a resettable elapsed timer and local timestamps.

use std::time::Instant;

// From seconds
pub const S_TO_MS: f64 = 1e3;
pub const S_TO_US: f64 = 1e6;
pub const S_TO_NS: f64 = 1e9;

// From milliseconds
pub const MS_TO_S: f64 = 1e-3;
pub const MS_TO_US: f64 = 1e3;
pub const MS_TO_NS: f64 = 1e6;

// From microseconds
pub const US_TO_S: f64 = 1e-6;
pub const US_TO_MS: f64 = 1e-3;
pub const US_TO_NS: f64 = 1e3;

// From nanoseconds
pub const NS_TO_S: f64 = 1e-9;
pub const NS_TO_MS: f64 = 1e-6;
pub const NS_TO_US: f64 = 1e-3;

/// Format used by [`time_stamp`]: `19-10-2026 17-03-59`.
pub const TIME_STAMP_FORMAT: &str = "%d-%m-%Y %H-%M-%S";

/// Measures wall-clock time since construction or the last [`reset`].
///
/// A fresh timer is not *valid* until it has been reset once, so callers that
/// must not trust the construction instant can check [`is_valid`].
///
/// [`reset`]: ElapsedTimer::reset
/// [`is_valid`]: ElapsedTimer::is_valid
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    reference: Instant,
    valid: bool,
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedTimer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reference: Instant::now(),
            valid: false,
        }
    }

    /// Restart the measurement and mark the timer valid.
    pub fn reset(&mut self) -> &mut Self {
        self.valid = true;
        self.reference = Instant::now();
        self
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn elapsed_ns(&self) -> f64 {
        self.reference.elapsed().as_nanos() as f64
    }

    #[must_use]
    pub fn elapsed_us(&self) -> f64 {
        self.elapsed_ns() * NS_TO_US
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ns() * NS_TO_MS
    }

    #[must_use]
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_ns() * NS_TO_S
    }
}

/// Current local time formatted with [`TIME_STAMP_FORMAT`].
#[must_use]
pub fn time_stamp() -> String {
    chrono::Local::now().format(TIME_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timer_invalid_until_reset() {
        let mut timer = ElapsedTimer::new();
        assert!(!timer.is_valid());
        timer.reset();
        assert!(timer.is_valid());
    }

    #[test]
    fn test_timer_measures_sleep() {
        let mut timer = ElapsedTimer::new();
        timer.reset();
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed_ms() > 9.0);
        assert!(timer.elapsed_s() < timer.elapsed_ms());
    }

    #[test]
    fn test_conversions_are_inverse() {
        assert_eq!(S_TO_MS * MS_TO_S, 1.0);
        assert_eq!(MS_TO_NS * NS_TO_MS, 1.0);
        assert_eq!(US_TO_NS * NS_TO_US, 1.0);
    }

    #[test]
    fn test_time_stamp_shape() {
        let stamp = time_stamp();
        // dd-mm-YYYY HH-MM-SS
        assert_eq!(stamp.len(), 19);
        assert_eq!(stamp.as_bytes()[10], b' ');
        assert_eq!(stamp.matches('-').count(), 4);
    }
}
