use crate::dns::forwarding::{to_wire_record, RecordTypeMapper};
use dnsresolver_application::ports::DnsResolution;
use dnsresolver_application::use_cases::HandleDnsQueryUseCase;
use dnsresolver_domain::DnsQuery;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one wire request into one wire response.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when nothing should be sent back: the datagram is too
    /// short to carry an id or is itself a response. An answer that fails to
    /// encode is replaced by SERVFAIL.
    pub async fn handle(&self, request: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(request) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "Unparseable request");
                let id = u16::from_be_bytes([*request.first()?, *request.get(1)?]);
                return encode(&error_response(id, OpCode::Query, false, None, ResponseCode::FormErr));
            }
        };

        if request.message_type() == MessageType::Response {
            return None;
        }

        let id = request.id();
        let rd = request.recursion_desired();

        if request.op_code() != OpCode::Query {
            return encode(&error_response(id, request.op_code(), rd, None, ResponseCode::NotImp));
        }

        let Some(question) = request.queries().first().cloned() else {
            return encode(&error_response(id, OpCode::Query, rd, None, ResponseCode::FormErr));
        };

        let query = DnsQuery::new(
            question.name().to_utf8(),
            RecordTypeMapper::from_hickory(question.query_type()),
        );

        let response = match self.use_case.execute(&query).await {
            Ok(resolution) => {
                debug!(
                    query = %query,
                    source = %resolution.source,
                    cache_hit = resolution.is_cache_hit(),
                    answers = resolution.records.len(),
                    "Query answered"
                );
                answer_response(id, rd, question, &resolution)
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Resolution failed");
                error_response(id, OpCode::Query, rd, Some(question), ResponseCode::ServFail)
            }
        };

        encode_or_servfail(&response)
    }
}

fn response_header(id: u16, op_code: OpCode, rd: bool, question: Option<Query>) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Response)
        .set_op_code(op_code)
        .set_recursion_desired(rd)
        .set_recursion_available(true);
    if let Some(question) = question {
        message.add_query(question);
    }
    message
}

fn error_response(
    id: u16,
    op_code: OpCode,
    rd: bool,
    question: Option<Query>,
    rcode: ResponseCode,
) -> Message {
    let mut message = response_header(id, op_code, rd, question);
    message.set_response_code(rcode);
    message
}

fn answer_response(id: u16, rd: bool, question: Query, resolution: &DnsResolution) -> Message {
    let mut message = response_header(id, OpCode::Query, rd, Some(question));

    let upstream = resolution
        .upstream_wire_data
        .as_ref()
        .and_then(|bytes| Message::from_vec(bytes).ok());

    match upstream {
        Some(upstream) => {
            if upstream.truncated() {
                debug!(id, "Relaying truncated upstream answer");
            }
            message
                .set_authoritative(upstream.authoritative())
                .set_response_code(upstream.response_code())
                .add_answers(upstream.answers().iter().cloned());
        }
        None => {
            message
                .set_authoritative(resolution.authoritative)
                .add_answers(resolution.records.iter().filter_map(to_wire_record));
        }
    }
    message
}

fn encode(message: &Message) -> Option<Vec<u8>> {
    message
        .to_vec()
        .inspect_err(|e| warn!(id = message.id(), error = %e, "Failed to encode response"))
        .ok()
}

fn encode_or_servfail(message: &Message) -> Option<Vec<u8>> {
    encode(message).or_else(|| {
        let fallback = error_response(
            message.id(),
            message.op_code(),
            message.recursion_desired(),
            message.queries().first().cloned(),
            ResponseCode::ServFail,
        );
        encode(&fallback)
    })
}
