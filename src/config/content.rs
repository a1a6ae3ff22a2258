use std::path::PathBuf;

use serde::Deserialize;

/// Content of the configuration file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    pub duration: DurationContent,
    pub notification: NotificationContent,
    pub runtime: RuntimeContent,
}

/// Lengths of the periods in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurationContent {
    pub work: u64,
    pub rest: u64,
}

impl Default for DurationContent {
    fn default() -> Self {
        Self {
            work: 25 * 60,
            rest: 5 * 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationContent {
    pub work: MessageContent,
    pub rest: MessageContent,
}

impl Default for NotificationContent {
    fn default() -> Self {
        Self {
            work: MessageContent {
                summary: "Pomodoro: Work Time!".to_owned(),
                body: Some("Time to focus! Start your work session.".to_owned()),
            },
            rest: MessageContent {
                summary: "Pomodoro: Break Time!".to_owned(),
                body: Some("Take a break and relax.".to_owned()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageContent {
    pub summary: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeContent {
    pub socket: Option<PathBuf>,
}
