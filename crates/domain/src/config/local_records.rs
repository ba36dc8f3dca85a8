use serde::{Deserialize, Serialize};

/// Options for the static record store (`records.json`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalRecordsConfig {
    /// Answer PTR queries from static A/AAAA records
    /// (`34.216.184.93.in-addr.arpa.` → the name holding `93.184.216.34`).
    #[serde(default = "default_true")]
    pub auto_build_ptr_from_a: bool,
}

impl Default for LocalRecordsConfig {
    fn default() -> Self {
        Self {
            auto_build_ptr_from_a: true,
        }
    }
}

fn default_true() -> bool {
    true
}
