#![allow(dead_code)]
use super::builders::ReplyBuilder;
use async_trait::async_trait;
use dnsresolver_domain::{DnsQuery, DomainError};
use dnsresolver_infrastructure::dns::load_balancer::{UpstreamClient, UpstreamReply};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted result for one server.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Authoritative(Ipv4Addr),
    NonAuthoritative(Ipv4Addr),
    Timeout,
    NoAnswer,
    Transport,
}

/// In-process upstream double: each server has a fixed outcome and a delay
/// drawn uniformly from `0..=max_delay_ms`.
pub struct ScriptedClient {
    outcomes: HashMap<SocketAddr, Outcome>,
    max_delay_ms: u64,
    calls: Mutex<Vec<SocketAddr>>,
}

impl ScriptedClient {
    pub fn new(max_delay_ms: u64) -> Self {
        Self {
            outcomes: HashMap::new(),
            max_delay_ms,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, server: SocketAddr, outcome: Outcome) -> Self {
        self.outcomes.insert(server, outcome);
        self
    }

    pub fn calls(&self) -> Vec<SocketAddr> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, server: SocketAddr) -> usize {
        self.calls().iter().filter(|addr| **addr == server).count()
    }
}

#[async_trait]
impl UpstreamClient for ScriptedClient {
    async fn query(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<UpstreamReply, DomainError> {
        self.calls.lock().unwrap().push(server);

        let delay = fastrand::u64(0..=self.max_delay_ms);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        let (authoritative, ip) = match self.outcomes.get(&server).copied() {
            Some(Outcome::Authoritative(ip)) => (true, ip),
            Some(Outcome::NonAuthoritative(ip)) => (false, ip),
            Some(Outcome::NoAnswer) => return Err(DomainError::NoAnswer { server }),
            Some(Outcome::Transport) => {
                return Err(DomainError::Transport {
                    server,
                    message: "connection refused".to_string(),
                })
            }
            Some(Outcome::Timeout) | None => return Err(DomainError::QueryTimeout { server }),
        };

        let response = ReplyBuilder::for_query(query)
            .authoritative(authoritative)
            .answer(ip, 300)
            .response();

        Ok(UpstreamReply {
            response,
            server,
            latency_ms: delay,
        })
    }
}
