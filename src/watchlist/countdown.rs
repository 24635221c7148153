//! Repeating "next scout" countdown.
//!
//! The countdown owns only the transition function; whoever drives it
//! (a timer, a test) decides when a second has elapsed.

use crate::error::{Result, WatchlistError};
use std::fmt;
use std::str::FromStr;

pub const MAX_HOURS: u8 = 12;

/// Hours, minutes and seconds remaining until the next scout.
///
/// Always within `0 <= hours <= 12` and `0 <= minutes, seconds <= 59`.
///
/// # Examples
///
/// ```rust
/// use fpl_watchlist::Countdown;
///
/// let mut c = Countdown::new(0, 1, 0).unwrap();
/// c.tick();
/// assert_eq!(c.to_string(), "00:00:59");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Countdown {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Countdown {
    /// Value the countdown wraps to after reaching zero.
    pub const RESET: Countdown = Countdown {
        hours: 12,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        if hours > MAX_HOURS || minutes > 59 || seconds > 59 {
            return Err(WatchlistError::InvalidCountdown {
                value: format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    pub fn total_seconds(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// State one second later. Borrows from the next larger unit when the
    /// smaller one is exhausted and wraps to [`Countdown::RESET`] from zero.
    pub fn next(self) -> Self {
        if self.seconds > 0 {
            Self {
                seconds: self.seconds - 1,
                ..self
            }
        } else if self.minutes > 0 {
            Self {
                minutes: self.minutes - 1,
                seconds: 59,
                ..self
            }
        } else if self.hours > 0 {
            Self {
                hours: self.hours - 1,
                minutes: 59,
                seconds: 59,
            }
        } else {
            Self::RESET
        }
    }

    pub fn tick(&mut self) {
        *self = self.next();
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            hours: 7,
            minutes: 23,
            seconds: 45,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for Countdown {
    type Err = WatchlistError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WatchlistError::InvalidCountdown {
            value: s.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let mut fields = [0u8; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }
        Countdown::new(fields[0], fields[1], fields[2]).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cd(h: u8, m: u8, s: u8) -> Countdown {
        Countdown::new(h, m, s).unwrap()
    }

    #[test]
    fn test_seconds_decrement() {
        assert_eq!(cd(7, 23, 45).next(), cd(7, 23, 44));
    }

    #[test]
    fn test_cascade_from_minutes() {
        assert_eq!(cd(0, 1, 0).next(), cd(0, 0, 59));
        assert_eq!(cd(3, 10, 0).next(), cd(3, 9, 59));
    }

    #[test]
    fn test_cascade_from_hours() {
        assert_eq!(cd(1, 0, 0).next(), cd(0, 59, 59));
        assert_eq!(cd(12, 0, 0).next(), cd(11, 59, 59));
    }

    #[test]
    fn test_wraps_to_reset_at_zero() {
        let mut c = cd(0, 0, 1);
        c.tick();
        assert_eq!(c, cd(0, 0, 0));
        assert!(c.is_zero());
        c.tick();
        assert_eq!(c, Countdown::RESET);
        assert_eq!(c, cd(12, 0, 0));
    }

    #[test]
    fn test_full_cycle_length() {
        // From the reset value it takes 12h of ticks to hit zero and one more to wrap.
        let mut c = Countdown::RESET;
        for _ in 0..Countdown::RESET.total_seconds() {
            c.tick();
        }
        assert!(c.is_zero());
        c.tick();
        assert_eq!(c, Countdown::RESET);
    }

    #[test]
    fn test_total_seconds_decreases_by_one_per_tick() {
        let mut c = Countdown::default();
        let start = c.total_seconds();
        for i in 1..=500 {
            c.tick();
            assert_eq!(c.total_seconds(), start - i);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Countdown::new(13, 0, 0).is_err());
        assert!(Countdown::new(0, 60, 0).is_err());
        assert!(Countdown::new(0, 0, 60).is_err());
        assert!(Countdown::new(12, 59, 59).is_ok());
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Countdown::default().to_string(), "07:23:45");
        assert_eq!("00:01:00".parse::<Countdown>().unwrap(), cd(0, 1, 0));
        assert!("7:23".parse::<Countdown>().is_err());
        assert!("aa:00:00".parse::<Countdown>().is_err());
        assert!("13:00:00".parse::<Countdown>().is_err());
    }
}
