pub mod mock_repositories;

pub use mock_repositories::{MockCacheStore, MockDnsResolver, MockRecordStore};
