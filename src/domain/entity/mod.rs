pub mod duration;
pub mod notification;
pub mod period;
pub mod snapshot;

pub use duration::{format_clock, PeriodDuration};
pub use notification::NotificationMessage;
pub use period::Period;
pub use snapshot::TimerSnapshot;
