#![allow(dead_code)]
pub mod builders;
pub mod dns_server_mock;
pub mod scripted_client;

pub use builders::{RecordBuilder, ReplyBuilder};
pub use dns_server_mock::{MockBehavior, MockDnsServer};
pub use scripted_client::{Outcome, ScriptedClient};
