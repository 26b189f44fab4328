use chrono::{DateTime, SubsecRound, Utc};
use dh_core::ports::ClockPort;

/// Wall clock at millisecond precision, the resolution `t_device.created_at` keeps.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
