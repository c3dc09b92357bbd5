// SPDX-License-Identifier: MPL-2.0
//! Loopback listener feeding decoded requests into the engine.
//!
//! Protocol: the client writes one line containing the request URI and
//! reads one status line back, `ok` or `rejected`. Undecodable requests are
//! answered with `rejected` and otherwise dropped.

use super::codec::{decode_uri, IngressRequest};
use super::{MAX_LINE_BYTES, REPLY_OK, REPLY_REJECTED};
use crate::infrastructure::runtime::{EngineHandle, EngineStopped};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// How long a client may take to send its request line.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// First pause after a failed `accept`; doubles per consecutive failure.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

/// Longest pause between `accept` retries.
const MAX_ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Pause before retrying after `failures` consecutive `accept` errors.
fn accept_backoff(failures: u32) -> Duration {
    ACCEPT_BACKOFF
        .saturating_mul(1 << failures.saturating_sub(1).min(5))
        .min(MAX_ACCEPT_BACKOFF)
}

/// Bound listener for notification requests.
#[derive(Debug)]
pub struct IngressServer {
    listener: TcpListener,
}

impl IngressServer {
    /// Binds `address` (`host:port`). Non-loopback addresses are accepted
    /// but logged, since senders are not authenticated.
    pub async fn bind(address: &str) -> io::Result<Self> {
        let listener = TcpListener::bind(address).await?;
        let local = listener.local_addr()?;
        if !local.ip().is_loopback() {
            tracing::warn!(%local, "ingress listening on a non-loopback address");
        }
        tracing::info!(%local, "ingress listening");
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until the engine stops.
    pub async fn serve(self, engine: EngineHandle) {
        let mut failures = 0u32;
        while engine.is_running() {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => {
                    failures = 0;
                    accepted
                }
                Err(err) => {
                    failures = failures.saturating_add(1);
                    let pause = accept_backoff(failures);
                    tracing::warn!(error = %err, ?pause, "failed to accept ingress connection");
                    tokio::time::sleep(pause).await;
                    continue;
                }
            };
            let engine = engine.clone();
            tokio::spawn(async move {
                if let Err(err) = handle_connection(stream, &engine).await {
                    tracing::debug!(%peer, error = %err, "ingress connection failed");
                }
            });
        }
        tracing::debug!("engine stopped, ingress shutting down");
    }
}

async fn handle_connection(stream: TcpStream, engine: &EngineHandle) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader.take(MAX_LINE_BYTES));
    let mut line = String::new();

    let read = tokio::time::timeout(READ_TIMEOUT, reader.read_line(&mut line))
        .await
        .map_err(|_| io::Error::from(io::ErrorKind::TimedOut))??;
    if read == 0 {
        return Ok(());
    }

    let reply = match decode_uri(&line) {
        Ok(inbound) => match dispatch(engine, inbound) {
            Ok(()) => REPLY_OK,
            Err(EngineStopped) => REPLY_REJECTED,
        },
        Err(err) => {
            tracing::debug!(error = %err, "dropping undecodable request");
            REPLY_REJECTED
        }
    };

    writer.write_all(reply.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.shutdown().await
}

/// Routes a decoded request to `show` or `enqueue`.
pub fn dispatch(engine: &EngineHandle, inbound: IngressRequest) -> Result<(), EngineStopped> {
    tracing::debug!(
        kind = %inbound.request.kind(),
        queue = inbound.queue,
        "request received"
    );
    if inbound.queue {
        engine.enqueue(inbound.request)
    } else {
        engine.show(inbound.request)
    }
}
