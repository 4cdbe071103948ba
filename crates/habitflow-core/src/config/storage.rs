//! Proof image storage configuration.

use serde::{Deserialize, Serialize};

/// Storage settings for proof image uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum proof image upload size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Base URL under which stored proof images are publicly reachable.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}

fn default_public_base_url() -> String {
    "http://localhost:8080/api/proofs".to_string()
}
