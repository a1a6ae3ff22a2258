pub mod listener;

mod server;

pub use listener::{DuplexListener, ListenError, Listener, UnixListener};
pub use server::{Server, ServerError};
