//! Field configuration and environment parsing.
//!
//! Some stores conflate the empty string with `NULL`. Fields that accept empty
//! form input need to know this to decide whether empty input means "absent".
//! The flag is passed to the fields explicitly through [`FieldConfig`].
//!
//! # Environment Variables
//!
//! | Variable | Description | Values |
//! |----------|-------------|--------|
//! | `CODEC_EMPTY_STRINGS_AS_NULLS` | Store treats `''` as `NULL` | `true`, `false`, `1`, `0` |
//!
//! # Example
//!
//! ```rust
//! use eth_fields::config::FieldConfig;
//! use std::env;
//!
//! let config = FieldConfig::new(true);
//! assert!(config.interprets_empty_strings_as_nulls());
//!
//! unsafe {
//!     env::set_var("CODEC_EMPTY_STRINGS_AS_NULLS", "false");
//! }
//! let config = FieldConfig::from_env().unwrap();
//! assert!(!config.interprets_empty_strings_as_nulls());
//! # unsafe { env::remove_var("CODEC_EMPTY_STRINGS_AS_NULLS"); }
//! ```

use std::env;
use thiserror::Error;

/// Environment variable name for the empty-string-as-null flag.
pub const ENV_EMPTY_STRINGS_AS_NULLS: &str = "CODEC_EMPTY_STRINGS_AS_NULLS";

/// Read-only store configuration consulted by the fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldConfig {
    interprets_empty_strings_as_nulls: bool,
}

impl FieldConfig {
    /// Create a configuration.
    pub const fn new(interprets_empty_strings_as_nulls: bool) -> Self {
        Self { interprets_empty_strings_as_nulls }
    }

    /// Whether the store treats the empty string as `NULL`.
    pub const fn interprets_empty_strings_as_nulls(&self) -> bool {
        self.interprets_empty_strings_as_nulls
    }

    /// Load the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the variable is not set, or
    /// [`ConfigError::InvalidFlag`] if its value is not a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = env::var(ENV_EMPTY_STRINGS_AS_NULLS)
            .map_err(|_| ConfigError::MissingEnvVar(ENV_EMPTY_STRINGS_AS_NULLS))?;
        parse_flag(&value).map(Self::new).ok_or(ConfigError::InvalidFlag {
            env_var: ENV_EMPTY_STRINGS_AS_NULLS,
            value,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The variable is set, but not to a boolean.
    #[error("invalid value for {env_var}: {value} (expected: true, false, 1, 0)")]
    InvalidFlag {
        /// The environment variable name.
        env_var: &'static str,
        /// The value found.
        value: String,
    },
}
