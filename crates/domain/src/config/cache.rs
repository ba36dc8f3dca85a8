use serde::{Deserialize, Serialize};

/// What the request path does with entries found past their expiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Treat as a miss and leave the entry stored.
    #[default]
    Retain,
    /// Treat as a miss and prune every expired entry from the store.
    Evict,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Gates every cache write; lookups still work on whatever was loaded.
    #[serde(default = "default_true")]
    pub cache_records: bool,

    #[serde(default)]
    pub cache_expiry_policy: ExpiryPolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_records: true,
            cache_expiry_policy: ExpiryPolicy::Retain,
        }
    }
}

fn default_true() -> bool {
    true
}
