//! Timestamps

// Imports
use {
	chrono::{NaiveTime, Timelike},
	std::fmt,
};

/// A source of the current time of day
pub trait Clock {
	/// Returns the current time of day
	fn now(&mut self) -> NaiveTime;
}

/// Local wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
	fn now(&mut self) -> NaiveTime {
		chrono::Local::now().time()
	}
}

/// Log line timestamp.
///
/// Displayed as `[HH:MM:SS.ffffff]`, on a 24-hour clock.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct Timestamp(NaiveTime);

impl Timestamp {
	/// Creates a timestamp from a time of day
	pub const fn new(time: NaiveTime) -> Self {
		Self(time)
	}

	/// Returns the time of day
	pub const fn time(self) -> NaiveTime {
		self.0
	}

	/// Returns a display of this timestamp as `HH:MM:SS.ff`, without brackets
	pub const fn centis(self) -> CentisTimestamp {
		CentisTimestamp(self.0)
	}
}

impl fmt::Display for Timestamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.0.format("%H:%M:%S%.6f"))
	}
}

/// Timestamp displayed with centisecond precision.
///
/// See [`Timestamp::centis`].
#[derive(Clone, Copy, Debug)]
pub struct CentisTimestamp(NaiveTime);

impl fmt::Display for CentisTimestamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Note: Leap seconds are represented with over a second of nanoseconds
		let centis = (self.0.nanosecond() / 10_000_000).min(99);
		write!(f, "{}.{centis:02}", self.0.format("%H:%M:%S"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_is_zero_padded_micros() {
		let time = NaiveTime::from_hms_micro_opt(14, 3, 27, 118_542).unwrap();
		assert_eq!(Timestamp::new(time).to_string(), "[14:03:27.118542]");

		let time = NaiveTime::from_hms_micro_opt(4, 5, 6, 7).unwrap();
		assert_eq!(Timestamp::new(time).to_string(), "[04:05:06.000007]");
	}

	#[test]
	fn display_truncates_nanos() {
		let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap();
		assert_eq!(Timestamp::new(time).to_string(), "[23:59:59.999999]");
	}

	#[test]
	fn display_centis() {
		let time = NaiveTime::from_hms_micro_opt(9, 8, 7, 65_432).unwrap();
		assert_eq!(Timestamp::new(time).centis().to_string(), "09:08:07.06");

		let time = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap();
		assert_eq!(Timestamp::new(time).centis().to_string(), "23:59:59.99");
	}
}
