//! Product category enum.

use serde::{Deserialize, Serialize};

/// The four fixed storefront categories.
///
/// Stored lowercase (`"perfumes"`, `"tecnologia"`, ...), matching the catalog
/// JSON as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Perfumes,
    Tecnologia,
    Electrodomesticos,
    Relojes,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::Perfumes,
        Self::Tecnologia,
        Self::Electrodomesticos,
        Self::Relojes,
    ];

    /// The stored identifier for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfumes => "perfumes",
            Self::Tecnologia => "tecnologia",
            Self::Electrodomesticos => "electrodomesticos",
            Self::Relojes => "relojes",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfumes => "Perfumes",
            Self::Tecnologia => "Tecnología",
            Self::Electrodomesticos => "Electrodomésticos",
            Self::Relojes => "Relojes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perfumes" => Ok(Self::Perfumes),
            "tecnologia" => Ok(Self::Tecnologia),
            "electrodomesticos" => Ok(Self::Electrodomesticos),
            "relojes" => Ok(Self::Relojes),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Electrodomesticos).unwrap();
        assert_eq!(json, "\"electrodomesticos\"");
        let back: Category = serde_json::from_str("\"tecnologia\"").unwrap();
        assert_eq!(back, Category::Tecnologia);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("muebles".parse::<Category>().is_err());
        assert_eq!("relojes".parse::<Category>().unwrap(), Category::Relojes);
    }
}
