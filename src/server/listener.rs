use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::files::FileServer;
use crate::http::connection::Connection;

/// Binds the listening socket with the configured backlog.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = tokio::net::lookup_host(cfg.server.listen_addr())
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("no address for {}", cfg.server.listen_addr()))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;

    Ok(socket.listen(cfg.server.backlog)?)
}

/// Accepts connections forever, one task per connection.
///
/// Accept failures are logged and do not stop the loop.
pub async fn serve(listener: TcpListener, server: Arc<FileServer>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let server = Arc::clone(&server);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, server);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    info!(
        "Listening on {}, serving {}",
        listener.local_addr()?,
        cfg.document_root.display()
    );

    serve(listener, Arc::new(FileServer::new(cfg.document_root.clone()))).await
}
