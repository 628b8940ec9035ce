/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::time::Instant;

/// Monotonic time source driving cabin motion.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;
