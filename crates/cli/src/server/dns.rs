use dnsresolver_infrastructure::dns::server::{serve_udp, DnsServerHandler};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::info;

pub async fn start_dns_server(bind_addr: SocketAddr, handler: DnsServerHandler) -> anyhow::Result<()> {
    info!(bind_address = %bind_addr, "Starting DNS server");

    let udp_socket = UdpSocket::bind(bind_addr).await?;

    info!("DNS server ready to accept queries");
    serve_udp(Arc::new(udp_socket), Arc::new(handler)).await;

    Ok(())
}
