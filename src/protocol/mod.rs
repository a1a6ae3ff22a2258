pub mod connection;

mod data;

pub use connection::{Connection, ReceiveError, SendError, REQUEST_LIMIT};
pub use data::{ParseRequestError, Request, Response, Status, UNKNOWN_COMMAND};
