use super::record_codec::to_resource_record;
use bytes::Bytes;
use dnsresolver_domain::{DomainError, ResourceRecord};
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    /// Answer section in canonical text form.
    pub answers: Vec<ResourceRecord>,

    pub authoritative: bool,

    pub rcode: ResponseCode,

    pub message: Message,

    /// Raw wire bytes of the upstream DNS response.
    pub raw_bytes: Bytes,
}

impl DnsResponse {
    pub fn id(&self) -> u16 {
        self.message.id()
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses DNS response from owned bytes (zero-copy for raw_bytes).
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<ResourceRecord> = message.answers().iter().map(to_resource_record).collect();

        debug!(
            rcode = ?message.response_code(),
            authoritative = message.authoritative(),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            answers,
            authoritative: message.authoritative(),
            rcode: message.response_code(),
            message,
            raw_bytes: response_bytes,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
