//! Provider configuration for Project Compass.
//!
//! Settings are read once at process start and injected into whatever
//! drives the pipeline. Nothing here is mutated at runtime.
//!
//! # Environment Variables
//!
//! - `GOOGLE_API_KEY`: Gemini API credential (required for extraction)
//! - `GEMINI_MODEL`: Override the model (default `gemini-1.5-flash`)
//! - `GEMINI_API_BASE`: Override the API base URL

use std::fmt;

use tracing::debug;

use crate::error::{CompassError, Result};

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable for the model identifier.
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Environment variable for the API base URL.
pub const API_BASE_ENV: &str = "GEMINI_API_BASE";

/// Default model used for extraction.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default Gemini API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Decoding temperature. Fixed at zero for greedy, repeatable output.
pub const TEMPERATURE: f32 = 0.0;

/// Message shown when the credential is not configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "Google API key not found. Please set the 'GOOGLE_API_KEY' environment variable.";

/// Load `.env.local` and `.env` from the working directory, if present.
///
/// Existing process variables win over file values.
pub fn load_env_files() {
    if dotenvy::from_filename(".env.local").is_ok() {
        debug!("Loaded .env.local");
    }
    if dotenvy::dotenv().is_ok() {
        debug!("Loaded .env");
    }
}

/// Provider credential. The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key for use in request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Settings for the model provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Credential, or `None` when it was not configured.
    pub api_key: Option<ApiKey>,
    /// Model identifier.
    pub model: String,
    /// API base URL without a trailing slash.
    pub api_base: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ProviderSettings {
    /// Creates settings with the given key and defaults for everything else.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(ApiKey::new(key)),
            ..Default::default()
        }
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Whitespace counts as a value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            api_key: get(API_KEY_ENV).map(ApiKey::new),
            model: get(MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get(API_BASE_ENV)
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// Sets the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns true if a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the credential or the configuration error.
    pub fn credential(&self) -> Result<&ApiKey> {
        self.api_key
            .as_ref()
            .ok_or_else(|| CompassError::Configuration(MISSING_API_KEY_MESSAGE.to_string()))
    }
}
