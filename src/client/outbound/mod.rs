mod get;
mod switch;

pub use get::GetService;
pub use switch::SwitchService;

use snafu::prelude::*;

use crate::client::app::connector::{ConnectError, Connector};
use crate::domain::client::outbound::{
    BadResponseSnafu, RejectedSnafu, RequestDaemonError, StatusReport, UnavailableSnafu,
};
use crate::domain::entity::Period;
use crate::protocol::{Connection, ReceiveError, Request, Response};

/// Send one request over a fresh connection and decode the status in the
/// reply.
async fn exchange(
    connector: &dyn Connector,
    request: Request,
) -> Result<StatusReport, RequestDaemonError> {
    let stream = match connector.connect().await {
        Ok(stream) => stream,
        Err(ConnectError::Unavailable { endpoint }) => {
            return UnavailableSnafu { endpoint }.fail()
        }
        Err(err) => return Err(err).whatever_context("Could not connect"),
    };

    let mut connection = Connection::from(stream);

    connection
        .send_request(request)
        .await
        .whatever_context("Could not send request")?;

    let response = match connection.receive_response().await {
        Ok(response) => response,
        Err(ReceiveError::Deserialization { .. }) => return BadResponseSnafu.fail(),
        Err(err) => return Err(err).whatever_context("Could not receive response"),
    };

    match response {
        // Labels this client doesn't know are kept as `Period::Unknown`.
        Response::Status(status) => Ok(StatusReport {
            period: Period::from_label(&status.period),
            remaining: status.rest_of_time,
            remaining_formatted: status.rest_of_time_str,
        }),
        Response::Error(message) => RejectedSnafu { message }.fail(),
    }
}
