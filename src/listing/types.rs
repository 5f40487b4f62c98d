//! Listing record and its enumerations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::decode;

/// Whether a listing is offered for rent or for sale.
///
/// Wire values outside the vocabulary decode to `Other`. `Other` never
/// matches a kind filter; unrecognized values fail to match rather than
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingKind {
    Rent,
    Sale,
    #[default]
    Other,
}

impl ListingKind {
    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Rent => "rent",
            ListingKind::Sale => "sale",
            ListingKind::Other => "other",
        }
    }

    /// Parses a wire value, mapping anything unrecognized to `Other`
    pub fn from_wire(value: &str) -> Self {
        Self::parse(value.trim()).unwrap_or(ListingKind::Other)
    }

    /// Parses a wire value strictly; unrecognized values return `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rent" => Some(ListingKind::Rent),
            "sale" => Some(ListingKind::Sale),
            _ => None,
        }
    }

    /// Returns true for the catch-all variant
    pub fn is_other(&self) -> bool {
        matches!(self, ListingKind::Other)
    }
}

impl Serialize for ListingKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ListingKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything that is not a recognized string (null, numbers, junk)
        // decodes to the catch-all rather than failing the record.
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => Self::from_wire(&s),
            _ => Self::Other,
        })
    }
}

/// The building category of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyKind {
    House,
    Apartment,
    Room,
    Commercial,
    Office,
    Shop,
    Warehouse,
    #[default]
    Other,
}

impl PropertyKind {
    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::House => "house",
            PropertyKind::Apartment => "apartment",
            PropertyKind::Room => "room",
            PropertyKind::Commercial => "commercial",
            PropertyKind::Office => "office",
            PropertyKind::Shop => "shop",
            PropertyKind::Warehouse => "warehouse",
            PropertyKind::Other => "other",
        }
    }

    /// Parses a wire value, mapping anything unrecognized to `Other`
    pub fn from_wire(value: &str) -> Self {
        Self::parse(value.trim()).unwrap_or(PropertyKind::Other)
    }

    /// Parses a wire value strictly; unrecognized values return `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "house" => Some(PropertyKind::House),
            "apartment" => Some(PropertyKind::Apartment),
            "room" => Some(PropertyKind::Room),
            "commercial" => Some(PropertyKind::Commercial),
            "office" => Some(PropertyKind::Office),
            "shop" => Some(PropertyKind::Shop),
            "warehouse" => Some(PropertyKind::Warehouse),
            _ => None,
        }
    }

    /// Returns true for the catch-all variant
    pub fn is_other(&self) -> bool {
        matches!(self, PropertyKind::Other)
    }
}

impl Serialize for PropertyKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PropertyKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => Self::from_wire(&s),
            _ => Self::Other,
        })
    }
}

/// A property listing as read from the backing store.
///
/// `id` is opaque, unique, and stable for the record's lifetime.
/// `owner_id`/`created_by` reference an external user entity and are passed
/// through without validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub city: Option<String>,
    /// Location sub-region name, matched by the area filter.
    #[serde(default)]
    pub area: Option<String>,

    #[serde(rename = "listing_type", default)]
    pub kind: ListingKind,
    #[serde(rename = "property_type", default)]
    pub property_kind: PropertyKind,

    /// Always compared numerically; string-typed wire values are coerced at
    /// decode time and coercion failure yields `None`.
    #[serde(default, deserialize_with = "decode::opt_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "decode::opt_count")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "decode::opt_count")]
    pub bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "decode::opt_number")]
    pub area_sqft: Option<f64>,

    #[serde(default, deserialize_with = "decode::flag")]
    pub is_featured: bool,

    #[serde(default, deserialize_with = "decode::opt_datetime")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "decode::opt_date")]
    pub available_from: Option<NaiveDate>,

    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub created_by: i64,
}

impl Listing {
    /// The recency sort key: a missing or malformed timestamp keys as the
    /// epoch, so it orders after every real timestamp under `Newest`.
    pub fn posted_key(&self) -> DateTime<Utc> {
        self.posted_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}
