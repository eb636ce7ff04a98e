//! Listing status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a listing. Any status may follow any other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    /// Listed and available.
    #[default]
    ForSale,
    /// Held for a buyer.
    Reserved,
    /// Sale completed.
    Sold,
    /// Withdrawn from the market.
    Archived,
}

impl PropertyStatus {
    /// All statuses.
    pub const ALL: [Self; 4] = [Self::ForSale, Self::Reserved, Self::Sold, Self::Archived];

    /// Canonical string form, as stored in history rows and shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForSale => "for_sale",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown property status: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strings() {
        assert_eq!(PropertyStatus::ForSale.to_string(), "for_sale");
        assert_eq!(PropertyStatus::Sold.as_str(), "sold");
        assert_eq!(
            serde_json::to_string(&PropertyStatus::Reserved).unwrap(),
            "\"reserved\""
        );
    }

    #[test]
    fn test_parse() {
        for status in PropertyStatus::ALL {
            assert_eq!(status.as_str().parse::<PropertyStatus>(), Ok(status));
        }
        assert!("ForSale".parse::<PropertyStatus>().is_err());
    }
}
