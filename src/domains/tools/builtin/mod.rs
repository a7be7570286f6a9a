//! Behavior modules compiled into the binary.

mod countdown;

pub use countdown::{COUNTDOWN_ID, Countdown, NewYearCountdown};
