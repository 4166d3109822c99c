//! Animated statistic counters.

use std::time::Duration;

pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_START_DELAY: Duration = Duration::from_millis(400);
pub const COUNTER_TICK: Duration = Duration::from_millis(30);
/// Approximate number of ticks from zero to the target.
pub const COUNTER_STEPS: i64 = 50;

/// Parse the integer at the start of `text`, the way browsers read `"50+"`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit follows.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Values shown while counting up to a target.
///
/// Each step adds `ceil(target / 50)`. The final value is exactly the target
/// and no value ever exceeds it.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    step: i64,
    current: i64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        let step = (target as f64 / COUNTER_STEPS as f64).ceil() as i64;
        Self {
            target,
            step,
            current: 0,
            finished: false,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        match self.current.checked_add(self.step) {
            Some(next) if next < self.target => {
                self.current = next;
                Some(next)
            }
            // reached, passed or overflowed past the target
            _ => {
                self.finished = true;
                Some(self.target)
            }
        }
    }
}

/// Each displayed value paired with the wait before showing it. The first
/// value lands right after the start delay, the rest one tick apart.
pub fn counter_schedule(target: i64) -> impl Iterator<Item = (Duration, i64)> {
    CounterAnimation::new(target).enumerate().map(|(i, value)| {
        let wait = if i == 0 { COUNTER_START_DELAY } else { COUNTER_TICK };
        (wait, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_to_exact_target() {
        let values: Vec<i64> = CounterAnimation::new(137).collect();
        assert_eq!(values.first(), Some(&3));
        assert_eq!(values.last(), Some(&137));
        assert!(values.iter().all(|v| *v <= 137));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values.len(), 46);
    }

    #[test]
    fn test_small_target_steps_by_one() {
        let values: Vec<i64> = CounterAnimation::new(5).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_exact_multiple_of_steps() {
        let values: Vec<i64> = CounterAnimation::new(100).collect();
        assert_eq!(values.len(), 50);
        assert_eq!(values.last(), Some(&100));
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let values: Vec<i64> = CounterAnimation::new(0).collect();
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn test_negative_target_terminates() {
        let values: Vec<i64> = CounterAnimation::new(-20).collect();
        assert_eq!(values, vec![-20]);
    }

    #[test]
    fn test_largest_target_never_overflows() {
        let target = parse_leading_int("9223372036854775807").unwrap();
        assert_eq!(target, i64::MAX);
        let values: Vec<i64> = CounterAnimation::new(target).take(60).collect();
        assert_eq!(values.last(), Some(&i64::MAX));
        assert!(values.iter().all(|v| *v > 0));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values.len() <= 51);
    }

    #[test]
    fn test_first_value_shown_after_start_delay() {
        let schedule: Vec<(Duration, i64)> = counter_schedule(137).collect();
        assert_eq!(schedule[0], (Duration::from_millis(400), 3));
        assert_eq!(schedule[1], (Duration::from_millis(30), 6));
        assert!(schedule[1..].iter().all(|(wait, _)| *wait == COUNTER_TICK));
        assert_eq!(schedule.last(), Some(&(COUNTER_TICK, 137)));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("137"), Some(137));
        assert_eq!(parse_leading_int("50+"), Some(50));
        assert_eq!(parse_leading_int("  12 projects"), Some(12));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+9"), Some(9));
        assert_eq!(parse_leading_int("∞"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
