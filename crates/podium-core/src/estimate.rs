//! Spoken reading-time estimate from a word count and a reading speed.

use core::fmt;

/// Outcome of [`estimate`]. Every variant is a valid answer, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadingTime {
    /// The reading speed was zero or negative.
    InvalidRate,
    /// There are no words to read.
    NothingToRead,
    /// Some words, but less than a second of reading.
    UnderOneSecond,
    /// `seconds` is always in `0..=59`; at least one field is non-zero.
    Duration { minutes: u64, seconds: u8 },
}

/// Estimates how long `word_count` words take at `wpm` words per minute.
///
/// Totals under one second are reported as such. Otherwise leftover seconds
/// round up so the remaining time is never under-reported, and a remainder
/// that rounds up to a full minute carries into `minutes`.
pub fn estimate(word_count: usize, wpm: i32) -> ReadingTime {
    if wpm <= 0 {
        return ReadingTime::InvalidRate;
    }
    if word_count == 0 {
        return ReadingTime::NothingToRead;
    }

    let total_minutes = word_count as f64 / f64::from(wpm);
    if total_minutes * 60.0 < 1.0 {
        return ReadingTime::UnderOneSecond;
    }

    let mut minutes = total_minutes as u64;
    let mut seconds = ceil_non_negative((total_minutes - minutes as f64) * 60.0);

    if seconds >= 60 {
        minutes += 1;
        seconds = 0;
    }

    if minutes == 0 && seconds == 0 {
        return ReadingTime::UnderOneSecond;
    }

    ReadingTime::Duration {
        minutes,
        seconds: seconds as u8,
    }
}

// `f64::ceil` needs std; the input here is always in `0.0..=60.0`.
fn ceil_non_negative(value: f64) -> u32 {
    let truncated = value as u32;
    if f64::from(truncated) < value {
        truncated + 1
    } else {
        truncated
    }
}

/// `"1 minute"`, `"0 seconds"`, `"2 seconds"`: singular only for exactly one.
pub struct Quantity<'a> {
    pub count: u64,
    pub singular: &'a str,
    pub plural: &'a str,
}

impl fmt::Display for Quantity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.count == 1 {
            self.singular
        } else {
            self.plural
        };
        write!(f, "{} {}", self.count, unit)
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidRate => f.write_str("reading speed must be greater than 0"),
            Self::NothingToRead => f.write_str("nothing to read"),
            Self::UnderOneSecond => f.write_str("less than 1 second"),
            Self::Duration { minutes, seconds } => {
                let minutes = (minutes > 0).then_some(Quantity {
                    count: minutes,
                    singular: "minute",
                    plural: "minutes",
                });
                let seconds = (seconds > 0).then_some(Quantity {
                    count: u64::from(seconds),
                    singular: "second",
                    plural: "seconds",
                });

                match (minutes, seconds) {
                    (Some(m), Some(s)) => write!(f, "{m} and {s}"),
                    (Some(m), None) => write!(f, "{m}"),
                    (None, Some(s)) => write!(f, "{s}"),
                    (None, None) => f.write_str("less than 1 second"),
                }
            }
        }
    }
}
