//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Malformed environment value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Brotli/gzip compression of responses
    /// Env: COMPRESSION, default true
    pub compression: bool,

    /// Serve pre-built `.br`/`.gz` files for the `/pkg` bundle
    /// Env: PRECOMPRESSED_ASSETS, default true
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            compression: read_bool(&lookup, "COMPRESSION", defaults.compression)?,
            precompressed_assets: read_bool(
                &lookup,
                "PRECOMPRESSED_ASSETS",
                defaults.precompressed_assets,
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn read_bool<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool { name, value }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
