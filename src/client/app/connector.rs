use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::PathBuf;
use std::sync::Arc;

use snafu::prelude::*;
use tokio::io::DuplexStream;
use tokio::net::UnixStream;
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::utils::stream::Stream;

/// Opens a fresh stream to the daemon for every request.
#[async_trait::async_trait]
pub trait Connector: Send + Sync + 'static {
    /// Open a new stream to the daemon.
    ///
    /// # Errors
    ///
    /// This function will return an error if nobody is listening on the
    /// endpoint or the system refuses to connect.
    async fn connect(&self) -> Result<Box<dyn Stream>, ConnectError>;
}

/// An error for connecting to the daemon.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum ConnectError {
    #[snafu(display("No daemon is listening on {endpoint}"))]
    Unavailable { endpoint: String },
    #[snafu(display("Could not connect to {endpoint}"))]
    System {
        endpoint: String,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}

/// A [`Connector`] for the daemon's UNIX socket.
#[derive(Debug, Clone)]
pub struct UnixConnector {
    socket: PathBuf,
}

impl UnixConnector {
    pub fn new<P: Into<PathBuf>>(socket: P) -> Self {
        Self {
            socket: socket.into(),
        }
    }
}

#[async_trait::async_trait]
impl Connector for UnixConnector {
    async fn connect(&self) -> Result<Box<dyn Stream>, ConnectError> {
        let endpoint = self.socket.display().to_string();

        // A leftover socket file without a daemon behind it refuses the
        // connection instead of being missing.
        match UnixStream::connect(&self.socket).await {
            Ok(stream) => Ok(Box::new(stream)),
            Err(err) => match err.kind() {
                IoErrorKind::NotFound | IoErrorKind::ConnectionRefused => {
                    UnavailableSnafu { endpoint }.fail()
                }
                _ => Err(err).context(SystemSnafu { endpoint }),
            },
        }
    }
}

/// A [`Connector`] handing the daemon side of an in-memory stream to a
/// channel, for tests.
#[derive(Debug, Clone)]
pub struct DuplexConnector {
    daemon: Sender<DuplexStream>,
    capacity: usize,
}

impl DuplexConnector {
    /// Create a [`DuplexConnector`] together with the receiver that plays the
    /// daemon.
    pub fn new(capacity: usize) -> (Self, Receiver<DuplexStream>) {
        let (daemon, accepted) = mpsc::channel(1);
        (Self { daemon, capacity }, accepted)
    }
}

#[async_trait::async_trait]
impl Connector for DuplexConnector {
    async fn connect(&self) -> Result<Box<dyn Stream>, ConnectError> {
        let (client, daemon) = tokio::io::duplex(self.capacity);
        if self.daemon.send(daemon).await.is_err() {
            return UnavailableSnafu {
                endpoint: "<memory>",
            }
            .fail();
        }
        Ok(Box::new(client))
    }
}
