use crate::config::{DEFAULT_API_URL, DEFAULT_STORAGE_DIR, DEFAULT_TIMEOUT_SECONDS};
use crate::core::cart_store::DEFAULT_STORAGE_KEY;
use crate::core::{ConfigProvider, Locale};
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{
    validate_api_base_url, validate_storage_dir, validate_storage_key, validate_timeout, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration:
///
/// ```toml
/// [api]
/// base_url = "${CART_API_URL}"
/// timeout_seconds = 10
///
/// [storage]
/// directory = "./.rocket-cart"
/// key = "@RocketShoes:cart"
///
/// [display]
/// locale = "pt-BR"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub directory: String,
    pub key: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_STORAGE_DIR.to_string(),
            key: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub locale: Option<Locale>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CART_API_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn storage_dir(&self) -> &str {
        &self.storage.directory
    }

    fn storage_key(&self) -> &str {
        self.storage.key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    fn locale(&self) -> Locale {
        self.display.locale.unwrap_or_default()
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_api_base_url("api.base_url", &self.api.base_url)?;
        validate_storage_dir("storage.directory", &self.storage.directory)?;
        validate_storage_key("storage.key", self.storage_key())?;
        validate_timeout("api.timeout_seconds", self.request_timeout_seconds())?;
        Ok(())
    }
}
