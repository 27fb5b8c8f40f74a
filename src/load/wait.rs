//! Pause between two tasks of a virtual user.

use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitTime {
    min: Duration,
    max: Duration,
}

/// Seconds to a `Duration`: negative and NaN become zero, values too large
/// for a `Duration` saturate.
fn saturating_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::MAX)
}

impl WaitTime {
    /// Uniformly random wait between `min_secs` and `max_secs`.
    ///
    /// Negative bounds are treated as zero and swapped bounds are reordered.
    pub fn between(min_secs: f64, max_secs: f64) -> Self {
        let min = saturating_secs(min_secs);
        let max = saturating_secs(max_secs);

        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn constant(secs: f64) -> Self {
        Self::between(secs, secs)
    }

    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::rng().random_range(self.min..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_within_bounds() {
        let wait = WaitTime::between(1.0, 3.0);

        for _ in 0..100 {
            let sample = wait.sample();
            assert!(sample >= Duration::from_secs(1));
            assert!(sample <= Duration::from_secs(3));
        }
    }

    #[test]
    fn bounds_are_normalized() {
        assert_eq!(WaitTime::between(3.0, 1.0), WaitTime::between(1.0, 3.0));
        assert_eq!(WaitTime::between(-1.0, 0.0).sample(), Duration::ZERO);
    }

    #[test]
    fn out_of_range_bounds_saturate() {
        assert_eq!(WaitTime::constant(f64::NAN).sample(), Duration::ZERO);
        assert_eq!(WaitTime::constant(1e300).sample(), Duration::MAX);
        assert_eq!(WaitTime::constant(f64::INFINITY).sample(), Duration::MAX);

        let wait = WaitTime::between(-5.0, f64::INFINITY);
        assert_eq!(wait, WaitTime::between(0.0, 1e300));
        wait.sample();
    }
}
