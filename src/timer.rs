//! Fire-once deadlines owned by the widget that scheduled them.
//!
//! Nothing here reads the clock. Callers pass `now` in, which keeps every
//! debounce race reproducible in tests.

use std::time::{Duration, Instant};

/// A single pending deadline. Scheduling again replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
	due: Option<Instant>,
}

impl Timer {
	/// Arm the timer to fire `delay` after `now`.
	pub fn schedule(&mut self, now: Instant, delay: Duration) {
		self.due = Some(now + delay);
	}

	pub fn cancel(&mut self) {
		self.due = None;
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.due.is_some()
	}

	#[must_use]
	pub fn due(&self) -> Option<Instant> {
		self.due
	}

	/// Return `true` exactly once when the deadline has passed.
	pub fn fire(&mut self, now: Instant) -> bool {
		match self.due {
			Some(due) if now >= due => {
				self.due = None;
				true
			}
			_ => false,
		}
	}
}

/// Delays used by the focus machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
	/// Blur debounce for the main search inputs.
	pub search_blur: Duration,
	/// Blur debounce for the tag and location inputs.
	pub field_blur: Duration,
	/// Delay before the caret is moved to the end of the text after focus.
	pub caret_restore: Duration,
	/// Delay before focus returns to an input after clear or a click on its
	/// committed-text layer.
	pub refocus: Duration,
	/// How long a re-focused search box keeps its suggestions revealed.
	pub reveal_hold: Duration,
}

impl Default for Timing {
	fn default() -> Self {
		Self {
			search_blur: Duration::from_millis(150),
			field_blur: Duration::from_millis(200),
			caret_restore: Duration::from_millis(10),
			refocus: Duration::ZERO,
			reveal_hold: Duration::from_millis(100),
		}
	}
}

/// Earliest of a set of optional deadlines.
pub fn earliest<I>(deadlines: I) -> Option<Instant>
where
	I: IntoIterator<Item = Option<Instant>>,
{
	deadlines.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_once_after_deadline() {
		let start = Instant::now();
		let mut timer = Timer::default();
		timer.schedule(start, Duration::from_millis(150));

		assert!(!timer.fire(start + Duration::from_millis(149)));
		assert!(timer.fire(start + Duration::from_millis(150)));
		assert!(!timer.fire(start + Duration::from_millis(500)));
		assert!(!timer.is_pending());
	}

	#[test]
	fn rescheduling_supersedes_previous_deadline() {
		let start = Instant::now();
		let mut timer = Timer::default();
		timer.schedule(start, Duration::from_millis(10));
		timer.schedule(start, Duration::from_millis(200));

		assert!(!timer.fire(start + Duration::from_millis(50)));
		assert_eq!(timer.due(), Some(start + Duration::from_millis(200)));
	}

	#[test]
	fn cancelled_timer_never_fires() {
		let start = Instant::now();
		let mut timer = Timer::default();
		timer.schedule(start, Duration::ZERO);
		timer.cancel();
		assert!(!timer.fire(start + Duration::from_secs(1)));
	}

	#[test]
	fn earliest_skips_idle_timers() {
		let start = Instant::now();
		let later = start + Duration::from_millis(5);
		assert_eq!(earliest([None, Some(later), Some(start)]), Some(start));
		assert_eq!(earliest([None, None]), None);
	}
}
