//! Clock and dice implementations.

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for SystemRandom {
    fn roll_percent(&self) -> u32 {
        rand::thread_rng().gen_range(0..100)
    }

    fn pick_index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }

    fn new_save_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Clock frozen at one instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Every percent roll returns the same value; picks always take the first
/// entry. 0 always succeeds, 99 never does.
#[cfg(test)]
pub struct FixedRoll(pub u32);

#[cfg(test)]
impl RandomPort for FixedRoll {
    fn roll_percent(&self) -> u32 {
        self.0
    }

    fn pick_index(&self, _len: usize) -> usize {
        0
    }

    fn new_save_id(&self) -> Uuid {
        Uuid::nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        let random = SystemRandom::new();
        for _ in 0..200 {
            assert!(random.roll_percent() < 100);
            assert!(random.pick_index(11) < 11);
        }
        assert_eq!(random.pick_index(1), 0);
        assert_ne!(random.new_save_id(), random.new_save_id());
    }
}
