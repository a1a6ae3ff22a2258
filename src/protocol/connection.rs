use std::str::Utf8Error;
use std::sync::Arc;

use bytes::BytesMut;
use serde_json::Error as SerdeError;
use snafu::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt, Error};

use crate::protocol::data::{Request, Response};
use crate::utils::stream::Stream;

/// Upper bound of a request in bytes. A request is taken from a single read
/// of at most this many bytes.
pub const REQUEST_LIMIT: usize = 1024;

/// Upper bound of a response in bytes.
pub const RESPONSE_LIMIT: usize = 64 * 1024;

/// A wrapper of a stream (typically a socket) carrying exactly one request
/// and one response. The end of a response is signaled by closing the
/// stream.
pub struct Connection<S: Stream> {
    stream: S,
}

impl<S: Stream> Connection<S> {
    /// Receive one command token and trim the surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an error if network IO fails, the peer
    /// closes without sending anything or the bytes are not valid UTF-8.
    pub async fn receive_command(&mut self) -> Result<String, ReceiveError> {
        let mut buffer = [0u8; REQUEST_LIMIT];
        let len = self
            .stream
            .read(&mut buffer)
            .await
            .context(NetworkSnafuR)?;
        ensure!(len > 0, ClosedSnafuR);

        let command = std::str::from_utf8(&buffer[..len]).context(EncodingSnafuR)?;
        Ok(command.trim().to_owned())
    }

    /// Serialize a [`Response`], send it and close the sending side.
    ///
    /// # Errors
    ///
    /// This function will return an error if serialization fails or network
    /// IO fails.
    pub async fn send_response(&mut self, response: &Response) -> Result<(), SendError> {
        let data = serde_json::to_vec(response).context(SerializationSnafuS)?;
        self.stream.write_all(&data).await.context(NetworkSnafuS)?;
        self.stream.shutdown().await.context(NetworkSnafuS)?;
        Ok(())
    }

    /// Send the token of a [`Request`].
    ///
    /// # Errors
    ///
    /// This function will return an error if network IO fails.
    pub async fn send_request(&mut self, request: Request) -> Result<(), SendError> {
        self.stream
            .write_all(request.as_str().as_bytes())
            .await
            .context(NetworkSnafuS)?;
        self.stream.flush().await.context(NetworkSnafuS)?;
        Ok(())
    }

    /// Receive bytes until the peer closes the stream and then deserialize
    /// the [`Response`].
    ///
    /// # Errors
    ///
    /// This function will return an error if network IO fails, nothing or too
    /// much is received, or deserialization fails.
    pub async fn receive_response(&mut self) -> Result<Response, ReceiveError> {
        let mut buffer = BytesMut::with_capacity(REQUEST_LIMIT);

        loop {
            let len = self
                .stream
                .read_buf(&mut buffer)
                .await
                .context(NetworkSnafuR)?;
            if len == 0 {
                break;
            }
            ensure!(buffer.len() <= RESPONSE_LIMIT, TooLargeSnafuR);
        }

        ensure!(!buffer.is_empty(), ClosedSnafuR);
        serde_json::from_slice(&buffer).context(DeserializationSnafuR)
    }
}

impl<S: Stream> From<S> for Connection<S> {
    fn from(value: S) -> Self {
        Self { stream: value }
    }
}

#[derive(Debug, Snafu, Clone)]
#[snafu(context(suffix(SnafuS)))]
#[non_exhaustive]
pub enum SendError {
    #[snafu(display("Could not serialize response"))]
    Serialization {
        #[snafu(source(from(SerdeError, Arc::new)))]
        source: Arc<SerdeError>,
    },
    #[snafu(display("Could not send bytes through inner stream"))]
    Network {
        #[snafu(source(from(Error, Arc::new)))]
        source: Arc<Error>,
    },
}

#[derive(Debug, Snafu, Clone)]
#[snafu(context(suffix(SnafuR)))]
#[non_exhaustive]
pub enum ReceiveError {
    #[snafu(display("Connection is closed by the peer"))]
    Closed,
    #[snafu(display("Could not decode a message that is not UTF-8"))]
    Encoding { source: Utf8Error },
    #[snafu(display("Message exceeds {RESPONSE_LIMIT} bytes"))]
    TooLarge,
    #[snafu(display("Could not deserialize response"))]
    Deserialization {
        #[snafu(source(from(SerdeError, Arc::new)))]
        source: Arc<SerdeError>,
    },
    #[snafu(display("Could not receive bytes through inner stream"))]
    Network {
        #[snafu(source(from(Error, Arc::new)))]
        source: Arc<Error>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::time::Duration;

    use crate::protocol::data::Status;

    #[tokio::test]
    async fn connection_receive_command() {
        let (mut client, server) = tokio::io::duplex(4096);
        let mut connection = Connection::from(server);

        client.write_all(b"  switch \n").await.unwrap();
        assert_eq!(connection.receive_command().await.unwrap(), "switch");
    }

    #[tokio::test]
    async fn connection_receive_command_bounded() {
        let (mut client, server) = tokio::io::duplex(4096);
        let mut connection = Connection::from(server);

        client.write_all(&[b'x'; 2 * REQUEST_LIMIT]).await.unwrap();
        let command = connection.receive_command().await.unwrap();
        assert_eq!(command.len(), REQUEST_LIMIT);
    }

    #[tokio::test]
    async fn connection_receive_command_error_closed() {
        let (client, server) = tokio::io::duplex(1024);
        let mut connection = Connection::from(server);
        drop(client);

        assert!(matches!(
            connection.receive_command().await,
            Err(ReceiveError::Closed)
        ));
    }

    #[tokio::test]
    async fn connection_receive_command_error_encoding() {
        let (mut client, server) = tokio::io::duplex(1024);
        let mut connection = Connection::from(server);

        client.write_all(&[0xff, 0xfe, b'g']).await.unwrap();
        assert!(matches!(
            connection.receive_command().await,
            Err(ReceiveError::Encoding { .. })
        ));
    }

    #[tokio::test]
    async fn connection_round_trip() {
        let (client, server) = tokio::io::duplex(1024);
        let mut client = Connection::from(client);
        let mut server = Connection::from(server);

        let expected = Response::Status(Status {
            period: "Work".to_owned(),
            rest_of_time: Duration::from_secs(1500),
            rest_of_time_str: "25:00".to_owned(),
        });

        client.send_request(Request::Get).await.unwrap();
        assert_eq!(server.receive_command().await.unwrap(), "get");

        let response = expected.clone();
        let handle = tokio::spawn(async move {
            server.send_response(&response).await.unwrap();
        });

        assert_eq!(client.receive_response().await.unwrap(), expected);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn connection_receive_response_error_closed() {
        let (client, server) = tokio::io::duplex(1024);
        let mut connection = Connection::from(client);
        drop(server);

        assert!(matches!(
            connection.receive_response().await,
            Err(ReceiveError::Closed)
        ));
    }

    #[tokio::test]
    async fn connection_receive_response_error_deserialization() {
        let (client, mut server) = tokio::io::duplex(1024);
        let mut connection = Connection::from(client);

        tokio::spawn(async move {
            server.write_all(b"{\"status\":").await.unwrap();
        });

        assert!(matches!(
            connection.receive_response().await,
            Err(ReceiveError::Deserialization { .. })
        ));
    }

    #[tokio::test]
    async fn connection_send_response_error_network() {
        let (client, server) = tokio::io::duplex(1024);
        let mut connection = Connection::from(server);
        drop(client);

        assert!(matches!(
            connection.send_response(&Response::unknown_command()).await,
            Err(SendError::Network { .. })
        ));
    }
}
