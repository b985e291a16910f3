pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_api_base_url, validate_storage_dir, validate_storage_key, validate_timeout,
};

#[cfg(feature = "cli")]
use crate::core::cart_store::DEFAULT_STORAGE_KEY;
#[cfg(feature = "cli")]
use crate::core::{Locale, ProductId};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_DIR: &str = "./.rocket-cart";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Checks any settings source before a store is wired from it.
pub fn validate_provider(config: &dyn ConfigProvider) -> Result<()> {
    validate_api_base_url("api_url", config.api_base_url())?;
    validate_storage_dir("storage_dir", config.storage_dir())?;
    validate_storage_key("storage_key", config.storage_key())?;
    validate_timeout("timeout", config.request_timeout_seconds())?;
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Shopping cart backed by a product/stock API and local storage")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, global = true, default_value = DEFAULT_STORAGE_DIR)]
    pub storage_dir: String,

    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,

    #[arg(long, global = true, value_enum, default_value_t = Locale::PtBr)]
    pub locale: Locale,

    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECONDS, help = "Request timeout in seconds")]
    pub timeout: u64,

    #[arg(long, global = true, help = "Read settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CartCommand {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product entirely
    Remove { product_id: ProductId },
    /// Set the amount of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_url
    }

    fn storage_dir(&self) -> &str {
        &self.storage_dir
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["rocket-cart", "show"]).unwrap();

        assert_eq!(config.command, CartCommand::Show);
        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
        assert_eq!(config.storage_key(), "@RocketShoes:cart");
        assert_eq!(config.locale(), Locale::PtBr);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_update_accepts_negative_amount() {
        let config =
            CliConfig::try_parse_from(["rocket-cart", "update", "3", "-1", "--locale", "en"]).unwrap();

        assert_eq!(
            config.command,
            CartCommand::Update {
                product_id: 3,
                amount: -1
            }
        );
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_invalid_api_url_fails_validation() {
        let config =
            CliConfig::try_parse_from(["rocket-cart", "--api-url", "not a url", "show"]).unwrap();
        assert!(config.validate().is_err());
    }
}
