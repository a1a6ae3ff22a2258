mod duration;
mod notification;

pub use duration::DurationConfiguration;
pub use notification::NotificationConfiguration;
