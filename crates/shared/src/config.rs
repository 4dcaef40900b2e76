//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Audit trail configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Audit trail configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Maximum lengths of provenance fields.
    #[serde(default)]
    pub limits: FieldLimits,
}

/// Maximum character lengths of audit provenance fields.
///
/// Defaults match the storage columns records are usually mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FieldLimits {
    /// Maximum length of the principal name.
    #[serde(default = "default_principal_name")]
    pub principal_name: usize,
    /// Maximum length of the source address (fits IPv6).
    #[serde(default = "default_source_address")]
    pub source_address: usize,
    /// Maximum length of the client agent string.
    #[serde(default = "default_client_agent")]
    pub client_agent: usize,
    /// Maximum length of the request path.
    #[serde(default = "default_request_path")]
    pub request_path: usize,
}

fn default_principal_name() -> usize {
    50
}

fn default_source_address() -> usize {
    45
}

fn default_client_agent() -> usize {
    255
}

fn default_request_path() -> usize {
    255
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            principal_name: default_principal_name(),
            source_address: default_source_address(),
            client_agent: default_client_agent(),
            request_path: default_request_path(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LIFECYCLE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
