use ars_core::ports::ClockPort;
use chrono::Utc;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
