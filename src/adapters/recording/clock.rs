//! Recording adapter for the `Clock` port.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Clock;

/// Records clock readings while delegating to an inner clock.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClock {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Clock>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        record_interaction(&self.recorder, "clock", "now", &(), &now);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveClock;
    use crate::adapters::recording::test_support::finish;

    #[test]
    fn records_each_reading() {
        let path = std::env::temp_dir().join("pdt_rec_clock.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "clock", "abc")));
        let first = {
            let clock = RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder));
            let first = clock.now();
            let _ = clock.now();
            first
        };

        let interactions = finish(recorder, &path);
        assert_eq!(interactions.len(), 2);
        let recorded: DateTime<Utc> = serde_json::from_value(interactions[0].output.clone()).unwrap();
        assert_eq!(recorded, first);
    }
}
