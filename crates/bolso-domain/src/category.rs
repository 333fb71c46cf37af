use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Closed set of spending categories.
///
/// Free-form names are rejected at the entry boundary; `Outro` is the only
/// catch-all and must be chosen explicitly by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Compras,
    #[serde(rename = "Alimentação")]
    Alimentacao,
    Transporte,
    Casa,
    Lazer,
    #[serde(rename = "Saúde")]
    Saude,
    Outro,
}

impl Category {
    /// Every category, in the order presented to the user.
    pub const ALL: [Category; 7] = [
        Category::Compras,
        Category::Alimentacao,
        Category::Transporte,
        Category::Casa,
        Category::Lazer,
        Category::Saude,
        Category::Outro,
    ];

    /// User-facing label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Compras => "Compras",
            Category::Alimentacao => "Alimentação",
            Category::Transporte => "Transporte",
            Category::Casa => "Casa",
            Category::Lazer => "Lazer",
            Category::Saude => "Saúde",
            Category::Outro => "Outro",
        }
    }

    /// Presentation icon; total over the enum, no fallback needed.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Compras => "🛍️",
            Category::Alimentacao => "🍔",
            Category::Transporte => "🚗",
            Category::Casa => "🏠",
            Category::Lazer => "🎮",
            Category::Saude => "💊",
            Category::Outro => "💰",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "compras" => Ok(Category::Compras),
            "alimentação" | "alimentacao" => Ok(Category::Alimentacao),
            "transporte" => Ok(Category::Transporte),
            "casa" => Ok(Category::Casa),
            "lazer" => Ok(Category::Lazer),
            "saúde" | "saude" => Ok(Category::Saude),
            "outro" => Ok(Category::Outro),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accented_and_plain_labels() {
        assert_eq!("Alimentação".parse::<Category>(), Ok(Category::Alimentacao));
        assert_eq!("alimentacao".parse::<Category>(), Ok(Category::Alimentacao));
        assert_eq!("Saúde".parse::<Category>(), Ok(Category::Saude));
    }

    #[test]
    fn rejects_unknown_names_instead_of_falling_back() {
        let err = "Viagens".parse::<Category>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCategory("viagens".into()));
    }

    #[test]
    fn serializes_with_display_labels() {
        let json = serde_json::to_string(&Category::Saude).unwrap();
        assert_eq!(json, "\"Saúde\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Saude);
    }
}
