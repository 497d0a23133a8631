use std::io;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{lookup_host, TcpListener, TcpSocket};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Pending connections the OS may queue while one is being served.
pub const BACKLOG: u32 = 5;

/// A bound listener together with the configuration it serves.
pub struct Server {
    listener: TcpListener,
    config: Config,
}

impl Server {
    pub async fn bind(config: Config) -> anyhow::Result<Self> {
        let addr = lookup_host(&config.listen_addr)
            .await
            .with_context(|| format!("Failed to resolve {}", config.listen_addr))?
            .next()
            .with_context(|| format!("No address found for {}", config.listen_addr))?;

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("Failed to bind {}", addr))?;
        let listener = socket.listen(BACKLOG)?;

        info!("Listening on http://{}", listener.local_addr()?);
        Ok(Self { listener, config })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serves connections one at a time, forever.
    ///
    /// A failed accept or a broken connection is logged and the loop moves
    /// on to the next client.
    pub async fn run(&self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let mut conn = Connection::new(socket, &self.config);
            match conn.run().await {
                Ok(outcome) => debug!(%peer, ?outcome, "Closing connection"),
                Err(e) => error!("Connection error from {}: {:#}", peer, e),
            }
        }
    }
}
