use std::sync::Arc;

use snafu::prelude::*;
use tracing::{field::Empty, Instrument, Span};

use crate::domain::daemon::ApplicationCore;
use crate::protocol::{Connection, ReceiveError, Request, Response, SendError};
use crate::tracing_report;
use crate::utils::stream::Stream;

use super::listener::{ListenError, Listener};

/// A dedicated server which listens on a UNIX socket and answers exactly one
/// request per connection.
pub struct Server {
    listener: Box<dyn Listener>,
    core: Arc<ApplicationCore>,
}

impl Server {
    /// Creates a new [`Server`].
    pub fn new(listener: Box<dyn Listener>, core: ApplicationCore) -> Self {
        Self {
            listener,
            core: Arc::new(core),
        }
    }

    /// Accept connections and handle each of them in its own task. Failing to
    /// accept one connection doesn't stop the server.
    ///
    /// # Errors
    ///
    /// This function will return an error if the listener is closed.
    #[tracing::instrument(skip(self))]
    pub async fn serve(&self) -> Result<(), ServerError> {
        loop {
            let stream = match self.listener.accept().await {
                Ok(stream) => {
                    tracing::debug!("Accepted connection");
                    stream
                }
                Err(err @ ListenError::Closed { .. }) => {
                    tracing_report!(err);
                    return Err(err).context(ListenSnafu);
                }
                Err(err) => {
                    tracing_report!(err, "Could not accept connection");
                    continue;
                }
            };

            let core = Arc::clone(&self.core);
            let connection = Connection::from(stream);

            let span = tracing::info_span!("handle", req = Empty).or_current();
            tokio::spawn(
                async move {
                    if let Err(err) = Self::handle(core, connection).await {
                        tracing_report!(err, "Could not handle request");
                    }
                }
                .instrument(span),
            );
        }
    }

    /// Handle the single request of an accepted connection and reply to it.
    ///
    /// # Errors
    ///
    /// This function will return an error if the request can't be received or
    /// the response can't be sent.
    async fn handle<S: Stream>(
        core: Arc<ApplicationCore>,
        mut connection: Connection<S>,
    ) -> Result<(), ServerError> {
        let command = connection.receive_command().await.context(ReceiveSnafu)?;
        Span::current().record("req", command.as_str());
        tracing::debug!("Received request");

        let response = match command.parse::<Request>() {
            Ok(Request::Get) => Response::from(core.get.get().await),
            Ok(Request::Switch) => {
                let snapshot = core.switch.switch().await;
                tracing::info!(period = %snapshot.period(), "Toggled timer");
                Response::from(snapshot)
            }
            Err(err) => {
                tracing::warn!(%err, "Rejected request");
                Response::unknown_command()
            }
        };

        connection
            .send_response(&response)
            .await
            .context(SendSnafu)
            .inspect(|_| tracing::debug!("Sent response"))
    }
}

/// An error type for server.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum ServerError {
    #[snafu(display("Could not accept a connection"))]
    Listen { source: ListenError },
    #[snafu(display("Could not receive a request"))]
    Receive { source: ReceiveError },
    #[snafu(display("Could not send a response"))]
    Send { source: SendError },
}
