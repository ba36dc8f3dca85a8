use super::query::{UpstreamClient, UpstreamReply};
use dnsresolver_domain::DnsQuery;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Slack on top of the per-server timeout before the fan-in gives up on
/// tasks that did not report back.
const FAN_IN_GRACE: Duration = Duration::from_millis(500);

/// Races one question against every upstream and keeps the first
/// authoritative reply.
pub struct ParallelStrategy {
    client: Arc<dyn UpstreamClient>,
    timeout: Duration,
}

impl ParallelStrategy {
    pub fn new(client: Arc<dyn UpstreamClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Query all servers concurrently and return the first authoritative
    /// reply in arrival order.
    ///
    /// Failed servers and non-authoritative replies are dropped. `None` means
    /// every task completed without an authoritative reply. Tasks still in
    /// flight when a winner is found are aborted.
    pub async fn race_authoritative(
        &self,
        servers: &[SocketAddr],
        query: &DnsQuery,
    ) -> Option<UpstreamReply> {
        if servers.is_empty() {
            return None;
        }
        debug!(strategy = "parallel", servers = servers.len(), query = %query, "Racing all upstreams");

        let mut abort_handles = Vec::with_capacity(servers.len());
        let mut futs = FuturesUnordered::new();

        for &server in servers {
            let client = Arc::clone(&self.client);
            let query = query.clone();
            let per_server_timeout = self.timeout;
            let handle = tokio::spawn(async move {
                client.query(&query, server, per_server_timeout).await
            });
            abort_handles.push(handle.abort_handle());
            futs.push(handle);
        }

        let result = timeout(self.timeout + FAN_IN_GRACE, async {
            while let Some(join_result) = futs.next().await {
                match join_result {
                    Ok(Ok(reply)) if reply.is_authoritative() => {
                        debug!(server = %reply.server, latency_ms = reply.latency_ms, "Authoritative answer wins");
                        return Some(reply);
                    }
                    Ok(Ok(reply)) => {
                        debug!(server = %reply.server, "Non-authoritative answer ignored");
                    }
                    Ok(Err(e)) if e.is_upstream_failure() => {
                        debug!(error = %e, "Server failed");
                    }
                    Ok(Err(e)) => {
                        warn!(error = %e, "Upstream query could not be sent");
                    }
                    Err(e) => {
                        warn!(error = %e, "Upstream task panicked");
                    }
                }
            }
            None
        })
        .await;

        for handle in &abort_handles {
            handle.abort();
        }

        match result {
            Ok(winner) => winner,
            Err(_) => {
                warn!(query = %query, "Upstream fan-in timed out");
                None
            }
        }
    }
}
