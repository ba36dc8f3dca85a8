#![allow(dead_code)]
use bytes::Bytes;
use dnsresolver_domain::{DnsQuery, RecordType, ResourceRecord};
use dnsresolver_infrastructure::dns::forwarding::{DnsResponse, ResponseParser};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Builds upstream replies the way a real server would put them on the wire.
pub struct ReplyBuilder {
    id: u16,
    name: String,
    authoritative: bool,
    answers: Vec<(Ipv4Addr, u32)>,
}

impl ReplyBuilder {
    pub fn for_query(query: &DnsQuery) -> Self {
        Self {
            id: 0,
            name: query.name.to_string(),
            authoritative: false,
            answers: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn authoritative(mut self, authoritative: bool) -> Self {
        self.authoritative = authoritative;
        self
    }

    pub fn answer(mut self, ip: Ipv4Addr, ttl: u32) -> Self {
        self.answers.push((ip, ttl));
        self
    }

    pub fn message(&self) -> Message {
        let name = Name::from_str(&self.name).expect("valid test name");
        let mut message = Message::new();
        message
            .set_id(self.id)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_authoritative(self.authoritative)
            .set_recursion_available(true);
        message.add_query(Query::query(name.clone(), HickoryRecordType::A));
        for (ip, ttl) in &self.answers {
            message.add_answer(Record::from_rdata(name.clone(), *ttl, RData::A(A(*ip))));
        }
        message
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.message().to_vec().expect("encodable test reply")
    }

    pub fn response(&self) -> DnsResponse {
        ResponseParser::parse_bytes(Bytes::from(self.bytes())).expect("parseable test reply")
    }
}

pub struct RecordBuilder;

impl RecordBuilder {
    pub fn a(name: &str, ip: &str, ttl: u32) -> ResourceRecord {
        ResourceRecord::new(name, RecordType::A, ip, ttl)
    }

    pub fn example() -> ResourceRecord {
        Self::a("example.com.", "93.184.216.34", 3600)
    }
}
