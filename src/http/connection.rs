use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::Config;
use crate::http::handler::{handle_request, Outcome};

/// A request must fit in a single read of this many bytes.
pub const READ_BUFFER_SIZE: usize = 1024;

pub struct Connection<'c, S> {
    stream: S,
    buffer: BytesMut,
    config: &'c Config,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Handling,
    Closed,
}

impl<'c, S> Connection<'c, S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: &'c Config) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
            config,
            state: ConnectionState::Reading,
        }
    }

    /// Reads one request, answers it and closes the write side.
    ///
    /// Returns `None` when the peer closed without sending anything.
    pub async fn run(&mut self) -> anyhow::Result<Option<Outcome>> {
        let mut outcome = None;

        loop {
            match self.state {
                ConnectionState::Reading => {
                    self.state = if self.read_request().await? {
                        ConnectionState::Handling
                    } else {
                        ConnectionState::Closed
                    };
                }

                ConnectionState::Handling => {
                    outcome =
                        Some(handle_request(&self.buffer, &mut self.stream, self.config).await?);
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        self.stream.shutdown().await?;
        Ok(outcome)
    }

    /// Performs the one and only read for this connection. Anything past
    /// `READ_BUFFER_SIZE` bytes is never looked at.
    pub async fn read_request(&mut self) -> anyhow::Result<bool> {
        let mut limited = (&mut self.stream).take(READ_BUFFER_SIZE as u64);
        let n = limited.read_buf(&mut self.buffer).await?;

        if n == 0 {
            tracing::debug!("Client closed connection before sending a request");
            return Ok(false);
        }

        tracing::debug!(bytes = n, "Read request");
        Ok(true)
    }
}
