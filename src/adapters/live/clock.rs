//! Wall-clock adapter for the `Clock` port.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Reads the system clock; task directory timestamps come from here.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_system_time() {
        let before = Utc::now();
        let now = LiveClock.now();
        assert!(now >= before && now <= Utc::now());
    }
}
