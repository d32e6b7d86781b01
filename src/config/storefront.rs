//! Storefront configuration loading from storefront.toml
//!
//! This module loads the settings the page layer needs: the site name used in page titles,
//! the public base URL that product links are built from, the address the server binds to,
//! and the WhatsApp branches offered on every product page.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming the config file
pub const CONFIG_PATH_VAR: &str = "STOREFRONT_CONFIG";

/// Configuration structure representing the entire storefront.toml file
#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontConfig {
    /// Shown in page titles (e.g. "Ajeg Furniture")
    pub site_name: String,
    /// Public origin of the storefront, used to build shareable product links
    pub public_base_url: String,
    /// Socket address the HTTP server listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// WhatsApp destinations offered on product pages, in display order
    pub branches: Vec<BranchConfig>,
}

/// One WhatsApp contact point
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BranchConfig {
    /// Branch name as shown to the customer (e.g. "Bekasi")
    pub name: String,
    /// Phone number in international format without `+` (e.g. "6287723466669")
    pub phone: String,
}

fn default_bind_address() -> String {
    "0.0.0.0:3000".to_string()
}

impl StorefrontConfig {
    fn validate(self) -> Result<Self> {
        if self.branches.is_empty() {
            return Err(Error::Config {
                message: "At least one WhatsApp branch must be configured".to_string(),
            });
        }
        if let Some(branch) = self
            .branches
            .iter()
            .find(|b| b.phone.is_empty() || !b.phone.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(Error::Config {
                message: format!(
                    "Branch '{}' has an invalid phone number '{}'",
                    branch.name, branch.phone
                ),
            });
        }
        url::Url::parse(&self.public_base_url)?;
        Ok(self)
    }
}

/// Parses and validates a storefront configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<StorefrontConfig> {
    let config: StorefrontConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse storefront config: {e}"),
    })?;
    config.validate()
}

/// Loads storefront configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required fields are missing
/// - No branch is configured, a phone number is not all digits, or the base URL is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StorefrontConfig> {
    tracing::debug!("Loading storefront configuration from {:?}", path.as_ref());
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file {:?}: {e}", path.as_ref()),
    })?;
    parse_config(&contents)
}

/// Loads storefront configuration from `$STOREFRONT_CONFIG`, or ./storefront.toml
pub fn load_default_config() -> Result<StorefrontConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "storefront.toml".to_string());
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    const VALID: &str = r#"
        site_name = "Ajeg Furniture"
        public_base_url = "https://katalog.example.com"

        [[branches]]
        name = "Bekasi"
        phone = "6287723466669"

        [[branches]]
        name = "Jogja"
        phone = "6287839070444"
    "#;

    #[test]
    fn test_parse_storefront_config() {
        let config = parse_config(VALID).unwrap();
        assert_eq!(config.site_name, "Ajeg Furniture");
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.branches.len(), 2);
        assert_eq!(config.branches[0].name, "Bekasi");
        assert_eq!(config.branches[1].phone, "6287839070444");
    }

    #[test]
    fn test_rejects_config_without_branches() {
        let toml_str = r#"
            site_name = "Ajeg Furniture"
            public_base_url = "https://katalog.example.com"
            branches = []
        "#;
        let result = parse_config(toml_str);
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_rejects_non_numeric_phone() {
        let toml_str = r#"
            site_name = "Ajeg Furniture"
            public_base_url = "https://katalog.example.com"

            [[branches]]
            name = "Bekasi"
            phone = "+62 877"
        "#;
        let result = parse_config(toml_str);
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let toml_str = r#"
            site_name = "Ajeg Furniture"
            public_base_url = "katalog"

            [[branches]]
            name = "Bekasi"
            phone = "6287723466669"
        "#;
        let result = parse_config(toml_str);
        assert!(matches!(result, Err(Error::Url(_))));
    }
}
