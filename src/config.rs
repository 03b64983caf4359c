//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Upload Handling ===
    /// Directory created at startup for uploads.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    // === Preprocessing ===
    /// Square edge length images are resized to before normalization.
    #[serde(default = "default_image_size")]
    pub image_size: u32,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    5001
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

fn default_image_size() -> u32 {
    224 // ResNet-50 input resolution
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.upload_dir.is_empty() {
            return Err("UPLOAD_DIR must not be empty".to_string());
        }

        if self.image_size == 0 {
            return Err("IMAGE_SIZE must be greater than zero".to_string());
        }

        if self.max_upload_bytes < 1024 {
            return Err("MAX_UPLOAD_BYTES must be at least 1024".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            image_size: default_image_size(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
