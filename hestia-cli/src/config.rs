//! Configuration module
//!
//! Handles CLI configuration including the thermostat service URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the thermostat service
    pub server_url: String,
}
