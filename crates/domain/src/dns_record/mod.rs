pub mod record;
pub mod record_type;

pub use record::{never_queried, ResourceRecord};
pub use record_type::RecordType;
