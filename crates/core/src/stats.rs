//! Sales statistics for realtors and agencies.

use serde::Serialize;

use crate::property::PropertyStatus;

/// Counts and sold volume over a set of listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SalesTally {
    /// Listings currently `for_sale`.
    pub properties_for_sale: u64,
    /// Listings marked `sold`.
    pub properties_sold: u64,
    /// Sum of prices of sold listings; 0 when nothing is sold.
    pub total_sales_value: i64,
}

impl SalesTally {
    /// Adds one listing to the tally. Other statuses are ignored.
    pub fn add(&mut self, status: PropertyStatus, price: i64) {
        match status {
            PropertyStatus::ForSale => self.properties_for_sale += 1,
            PropertyStatus::Sold => {
                self.properties_sold += 1;
                self.total_sales_value = self.total_sales_value.saturating_add(price);
            }
            PropertyStatus::Reserved | PropertyStatus::Archived => {}
        }
    }
}

impl FromIterator<(PropertyStatus, i64)> for SalesTally {
    fn from_iter<I: IntoIterator<Item = (PropertyStatus, i64)>>(iter: I) -> Self {
        let mut tally = Self::default();
        for (status, price) in iter {
            tally.add(status, price);
        }
        tally
    }
}

/// Statistics for one realtor's own listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RealtorStats {
    /// Realtor ID.
    pub realtor_id: i32,
    /// Realtor's full name.
    pub full_name: Option<String>,
    /// Listing counts and sold volume.
    #[serde(flatten)]
    pub tally: SalesTally,
}

/// Statistics for an agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgencyStats {
    /// Agency ID.
    pub agency_id: i32,
    /// Agency name.
    pub name: String,
    /// Number of realtors in the agency.
    pub total_realtors: u64,
    /// Listing counts and sold volume.
    #[serde(flatten)]
    pub tally: SalesTally,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_and_sums() {
        let tally: SalesTally = [
            (PropertyStatus::ForSale, 100),
            (PropertyStatus::Sold, 250),
            (PropertyStatus::Sold, 750),
            (PropertyStatus::Reserved, 999),
            (PropertyStatus::Archived, 999),
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.properties_for_sale, 1);
        assert_eq!(tally.properties_sold, 2);
        assert_eq!(tally.total_sales_value, 1000);
    }

    #[test]
    fn test_nothing_sold_is_zero() {
        let tally: SalesTally = [(PropertyStatus::ForSale, 100)].into_iter().collect();
        assert_eq!(tally.total_sales_value, 0);
        assert_eq!(tally.properties_sold, 0);
    }

    #[test]
    fn test_stats_serialize_flat() {
        let stats = RealtorStats {
            realtor_id: 7,
            full_name: Some("Ann Smith".to_string()),
            tally: SalesTally::default(),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["realtor_id"], 7);
        assert_eq!(value["properties_for_sale"], 0);
        assert_eq!(value["total_sales_value"], 0);
    }
}
