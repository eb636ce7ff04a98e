//! Property creation payloads and partial updates.

use serde::{Deserialize, Serialize};

use super::status::PropertyStatus;

/// The mutable fields of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyState {
    /// Listing title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Asking price in whole currency units.
    pub price: i64,
    /// Street address.
    pub address: String,
    /// Latitude, if geocoded.
    pub latitude: Option<f64>,
    /// Longitude, if geocoded.
    pub longitude: Option<f64>,
    /// Lifecycle status.
    pub status: PropertyStatus,
}

/// Payload for creating a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    /// Listing title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Asking price in whole currency units.
    pub price: i64,
    /// Street address.
    pub address: String,
    /// Latitude, if geocoded.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude, if geocoded.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Initial status, `for_sale` unless given.
    #[serde(default)]
    pub status: PropertyStatus,
}

impl NewProperty {
    /// Returns the listing state this payload creates.
    #[must_use]
    pub fn to_state(&self) -> PropertyState {
        PropertyState {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status,
        }
    }
}

/// A partial update.
///
/// `None` means the field was not sent and is left alone. For nullable
/// fields, `Some(None)` is an explicit `null` that clears the value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyPatch {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New description, or `null` to clear it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    /// New price.
    #[serde(default)]
    pub price: Option<i64>,
    /// New address.
    #[serde(default)]
    pub address: Option<String>,
    /// New latitude, or `null` to clear it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub latitude: Option<Option<f64>>,
    /// New longitude, or `null` to clear it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub longitude: Option<Option<f64>>,
    /// New status.
    #[serde(default)]
    pub status: Option<PropertyStatus>,
}

impl PropertyPatch {
    /// Returns true if no field was provided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.address.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.status.is_none()
    }

    /// Returns `state` with every provided field overwritten.
    #[must_use]
    pub fn apply(&self, state: &PropertyState) -> PropertyState {
        PropertyState {
            title: self.title.clone().unwrap_or_else(|| state.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| state.description.clone()),
            price: self.price.unwrap_or(state.price),
            address: self.address.clone().unwrap_or_else(|| state.address.clone()),
            latitude: self.latitude.unwrap_or(state.latitude),
            longitude: self.longitude.unwrap_or(state.longitude),
            status: self.status.unwrap_or(state.status),
        }
    }
}
