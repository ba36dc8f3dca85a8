use super::handler::DnsServerHandler;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

const MAX_REQUEST_SIZE: usize = 4096;

/// Receive loop: one task per datagram, replies sent from the same socket.
pub async fn serve_udp(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    if let Ok(local) = socket.local_addr() {
        info!(protocol = "UDP", address = %local, "DNS server listening");
    }

    let mut buf = [0u8; MAX_REQUEST_SIZE];
    loop {
        let (len, peer) = match socket.recv_from(&mut buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!(error = %e, "UDP receive failed");
                continue;
            }
        };

        let request = buf[..len].to_vec();
        let socket = Arc::clone(&socket);
        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let Some(response) = handler.handle(&request).await else {
                debug!(client = %peer, "Request dropped");
                return;
            };
            if let Err(e) = socket.send_to(&response, peer).await {
                warn!(client = %peer, error = %e, "Failed to send response");
            }
        });
    }
}
