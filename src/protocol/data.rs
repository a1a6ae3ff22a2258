use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use tokio::time::Duration;

use crate::domain::entity::TimerSnapshot;

/// Message carried by an error response for an unrecognized command.
pub const UNKNOWN_COMMAND: &str = "Unknown command";

/// A [`Request`] represents the single command token sent by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Get,
    Switch,
}

impl Request {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Switch => "switch",
        }
    }
}

impl FromStr for Request {
    type Err = ParseRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "get" => Ok(Self::Get),
            "switch" => Ok(Self::Switch),
            command => UnknownCommandSnafu { command }.fail(),
        }
    }
}

/// An error type for parsing a [`Request`] token.
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseRequestError {
    #[snafu(display("Unknown command {command:?}"))]
    UnknownCommand { command: String },
}

/// A [`Response`] represents a daemon's reply. Exactly one of `status` and
/// `error` appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    #[serde(rename = "status")]
    Status(Status),
    #[serde(rename = "error")]
    Error(String),
}

impl Response {
    /// The reply to a command the daemon does not recognize.
    pub fn unknown_command() -> Self {
        Self::Error(UNKNOWN_COMMAND.to_owned())
    }
}

impl From<TimerSnapshot> for Response {
    fn from(value: TimerSnapshot) -> Self {
        Self::Status(value.into())
    }
}

/// The timer's status on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub period: String,
    #[serde(with = "nanoseconds")]
    pub rest_of_time: Duration,
    pub rest_of_time_str: String,
}

impl From<TimerSnapshot> for Status {
    fn from(value: TimerSnapshot) -> Self {
        Self {
            period: value.period().to_string(),
            rest_of_time: value.remaining(),
            rest_of_time_str: value.formatted_remaining(),
        }
    }
}

/// (De)serialize a [`Duration`] as an integer count of nanoseconds.
mod nanoseconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use tokio::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        serializer.serialize_u64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}
