use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    #[cfg_attr(feature = "cli", value(name = "pt-BR"))]
    PtBr,
    #[serde(rename = "en")]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-BR"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Remove => write!(f, "remove"),
            CartOperation::UpdateAmount => write!(f, "update-amount"),
        }
    }
}

/// The fixed messages shown to the user when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub add_failed: String,
    pub remove_failed: String,
    pub update_failed: String,
    pub out_of_stock: String,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::PtBr => Self {
                add_failed: "Erro na adição do produto".to_string(),
                remove_failed: "Erro na remoção do produto".to_string(),
                update_failed: "Erro na alteração de quantidade do produto".to_string(),
                out_of_stock: "Quantidade solicitada fora de estoque".to_string(),
            },
            Locale::En => Self {
                add_failed: "Error adding product".to_string(),
                remove_failed: "Error removing product".to_string(),
                update_failed: "Error updating product amount".to_string(),
                out_of_stock: "Requested amount is out of stock".to_string(),
            },
        }
    }

    pub fn failure(&self, operation: CartOperation) -> &str {
        match operation {
            CartOperation::Add => &self.add_failed,
            CartOperation::Remove => &self.remove_failed,
            CartOperation::UpdateAmount => &self.update_failed,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
