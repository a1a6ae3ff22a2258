use std::fs;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use snafu::prelude::*;
use tokio::io::DuplexStream;
use tokio::net::UnixListener as TokioUnixListener;
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::utils::stream::Stream;

/// Source of client connections, one stream per request.
#[async_trait::async_trait]
pub trait Listener: Send + Sync {
    /// Wait for the next client and return its stream.
    ///
    /// # Errors
    ///
    /// This function will return an error if no client can be accepted. A
    /// [`ListenError::Closed`] means no client will ever arrive again.
    async fn accept(&self) -> Result<Box<dyn Stream>, ListenError>;
}

/// An error for binding the daemon's endpoint or accepting clients.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum ListenError {
    #[snafu(display("Could not remove stale socket {}", path.display()))]
    RemoveStale {
        path: PathBuf,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
    #[snafu(display("Endpoint {endpoint} is already in use"))]
    InUse { endpoint: String },
    #[snafu(display("Could not bind the socket"))]
    BindSystem {
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
    #[snafu(display("Listener is closed: {message}"))]
    Closed { message: String },
    #[snafu(display("Could not accept a client"))]
    AcceptSystem {
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}

/// A [`Listener`] implementation which accepts connections on a UNIX socket.
#[derive(Debug)]
pub struct UnixListener {
    listener: TokioUnixListener,
}

impl UnixListener {
    /// Create a [`UnixListener`] with a given UNIX socket path. A file left at
    /// the path by a previous run is removed before binding.
    ///
    /// # Errors
    ///
    /// This function will return an error if the stale file can not be removed
    /// or it fails to bind to the socket.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, ListenError> {
        let path = path.as_ref();
        Self::remove_stale(path)?;

        match TokioUnixListener::bind(path) {
            Ok(listener) => Ok(Self { listener }),
            Err(err) => match err.kind() {
                IoErrorKind::AddrInUse => InUseSnafu {
                    endpoint: path.to_string_lossy(),
                }
                .fail(),
                _ => Err(err).context(BindSystemSnafu),
            },
        }
    }

    fn remove_stale(path: &Path) -> Result<(), ListenError> {
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Removed stale socket");
                Ok(())
            }
            Err(err) if err.kind() == IoErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).context(RemoveStaleSnafu { path }),
        }
    }
}

#[async_trait::async_trait]
impl Listener for UnixListener {
    async fn accept(&self) -> Result<Box<dyn Stream>, ListenError> {
        self.listener
            .accept()
            .await
            .map(|(stream, _)| -> Box<dyn Stream> { Box::new(stream) })
            .context(AcceptSystemSnafu)
    }
}

/// A [`Listener`] handing the client side of an in-memory stream to a
/// channel, for tests. Dropping the receiver closes the listener.
#[derive(Debug)]
pub struct DuplexListener {
    clients: Sender<DuplexStream>,
    capacity: usize,
}

impl DuplexListener {
    /// Create a [`DuplexListener`] together with the receiver that plays the
    /// clients.
    pub fn new(capacity: usize) -> (Self, Receiver<DuplexStream>) {
        let (clients, connected) = mpsc::channel(1);
        (Self { clients, capacity }, connected)
    }
}

#[async_trait::async_trait]
impl Listener for DuplexListener {
    async fn accept(&self) -> Result<Box<dyn Stream>, ListenError> {
        let (daemon, client) = tokio::io::duplex(self.capacity);
        if self.clients.send(client).await.is_err() {
            return ClosedSnafu {
                message: "no more clients",
            }
            .fail();
        }
        Ok(Box::new(daemon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::{prelude::*, TempDir};
    use bytes::BytesMut;
    use predicates::path as path_pred;
    use predicates::prelude::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::UnixStream;

    #[tokio::test]
    async fn unix_listener_accept() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let path = tmp.child("pomodoro.sock");
        let listener = UnixListener::new(path.path()).unwrap();

        let mut client = UnixStream::connect(path.path()).await.unwrap();
        let mut server = listener.accept().await.unwrap();
        client.write_all(b"get").await.unwrap();

        let mut buf = [0u8; 3];
        server.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"get");
    }

    #[tokio::test]
    async fn unix_listener_remove_stale() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let path = tmp.child("stale.sock");
        path.touch().unwrap();
        path.assert(path_pred::is_file());

        assert!(UnixListener::new(path.path()).is_ok());
        path.assert(path_pred::exists().and(path_pred::is_file().not()));
    }

    #[tokio::test]
    async fn unix_listener_error_remove_stale() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let path = tmp.child("directory.sock");
        path.create_dir_all().unwrap();

        assert!(matches!(
            UnixListener::new(path.path()),
            Err(ListenError::RemoveStale { .. })
        ));
    }

    #[tokio::test]
    async fn unix_listener_error_bind() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let path = tmp.child("missing/pomodoro.sock");

        assert!(matches!(
            UnixListener::new(path.path()),
            Err(ListenError::BindSystem { .. })
        ));
    }

    #[tokio::test]
    async fn duplex_listener() {
        let (listener, mut connected) = DuplexListener::new(256);
        let mut daemon = listener.accept().await.unwrap();
        let mut client = connected.recv().await.unwrap();
        client.write_all(b"switch").await.unwrap();
        drop(client);

        let mut request = BytesMut::new();
        daemon.read_buf(&mut request).await.unwrap();
        assert_eq!(&request[..], b"switch");
    }

    #[tokio::test]
    async fn duplex_listener_error_closed() {
        let (listener, connected) = DuplexListener::new(256);
        drop(connected);
        assert!(matches!(
            listener.accept().await,
            Err(ListenError::Closed { .. })
        ));
    }
}
