pub mod client;
pub mod command;
pub mod connector;

pub use client::{Client, ClientError};
pub use command::Command;
