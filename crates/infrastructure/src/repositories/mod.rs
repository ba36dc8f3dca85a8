pub mod bootstrap;
pub mod json_record_store;
pub mod json_server_list;

pub use bootstrap::ensure_default_files;
pub use json_record_store::JsonRecordStore;
pub use json_server_list::JsonServerList;
