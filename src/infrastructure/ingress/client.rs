// SPDX-License-Identifier: MPL-2.0
//! Sending side of the ingress protocol, used by the `notify` command.

use super::{MAX_LINE_BYTES, REPLY_OK};
use crate::error::DeliveryError;
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// Delivers `uri` to the agent listening on `address`.
///
/// # Errors
///
/// - [`DeliveryError::Unreachable`] when no agent accepts the connection
/// - [`DeliveryError::Transport`] when the exchange breaks off midway
/// - [`DeliveryError::Rejected`] when the agent answers anything but `ok`
pub async fn deliver(address: &str, uri: &str) -> Result<(), DeliveryError> {
    let unreachable = |source: io::Error| DeliveryError::Unreachable {
        address: address.to_string(),
        source,
    };

    let stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(address))
        .await
        .map_err(|_| unreachable(io::Error::from(io::ErrorKind::TimedOut)))?
        .map_err(unreachable)?;

    let (reader, mut writer) = stream.into_split();
    writer
        .write_all(format!("{}\n", uri.trim()).as_bytes())
        .await
        .map_err(DeliveryError::Transport)?;

    let mut reader = BufReader::new(reader.take(MAX_LINE_BYTES));
    let mut reply = String::new();
    let read = tokio::time::timeout(REPLY_TIMEOUT, reader.read_line(&mut reply))
        .await
        .map_err(|_| DeliveryError::Transport(io::Error::from(io::ErrorKind::TimedOut)))?
        .map_err(DeliveryError::Transport)?;
    if read == 0 {
        return Err(DeliveryError::Transport(io::Error::from(
            io::ErrorKind::UnexpectedEof,
        )));
    }

    match reply.trim() {
        REPLY_OK => Ok(()),
        other => Err(DeliveryError::Rejected(other.to_string())),
    }
}
