//! Property listing entity and its value types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{DomainError, DomainResult};

/// Months used to annualise the monthly rental income.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Geographic region of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Region {
    #[serde(rename = "London")]
    London,
    #[serde(rename = "South East")]
    SouthEast,
    #[serde(rename = "South West")]
    SouthWest,
    #[serde(rename = "East of England")]
    EastOfEngland,
    #[serde(rename = "Midlands")]
    Midlands,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "North East")]
    NorthEast,
    #[serde(rename = "Yorkshire")]
    Yorkshire,
    #[serde(rename = "Wales")]
    Wales,
    #[serde(rename = "Scotland")]
    Scotland,
    #[serde(rename = "Northern Ireland")]
    NorthernIreland,
}

impl Region {
    /// Canonical string form, identical to the serialized value
    pub const fn as_str(&self) -> &'static str {
        match self {
            Region::London => "London",
            Region::SouthEast => "South East",
            Region::SouthWest => "South West",
            Region::EastOfEngland => "East of England",
            Region::Midlands => "Midlands",
            Region::NorthWest => "North West",
            Region::NorthEast => "North East",
            Region::Yorkshire => "Yorkshire",
            Region::Wales => "Wales",
            Region::Scotland => "Scotland",
            Region::NorthernIreland => "Northern Ireland",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    Detached,
    SemiDetached,
    TerracedHouse,
    Bungalow,
    Maisonette,
}

impl PropertyType {
    /// Canonical string form, identical to the serialized value
    pub const fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Detached => "detached",
            PropertyType::SemiDetached => "semi_detached",
            PropertyType::TerracedHouse => "terraced_house",
            PropertyType::Bungalow => "bungalow",
            PropertyType::Maisonette => "maisonette",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing photo in its three renditions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Photo {
    pub original_url: String,
    pub standard_url: String,
    pub thumbnail_url: String,
    #[schema(example = "image/jpeg")]
    pub mime_type: String,
}

/// Validated address of a stored listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddressDetails {
    #[schema(example = "London")]
    pub city: String,
    pub postcode: String,
    #[schema(example = "W1")]
    pub shortened_postcode: String,
    pub region: Region,
    #[schema(example = "UK")]
    pub country: String,
}

/// Property listing domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    pub id: i64,
    pub address: AddressDetails,
    pub development_name: Option<String>,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sq_ft: u32,
    /// Asking price in minor currency units, always positive
    pub price_in_cents: i64,
    pub minimum_deposit_in_cents: i64,
    pub estimated_deposit_in_cents: i64,
    /// Monthly rental income in minor currency units
    pub rental_income_in_cents: i64,
    /// Annual rent over price, recomputed on every write
    pub gross_yield: f64,
    pub is_tenanted: bool,
    pub is_cash_only: bool,
    pub is_new_build: bool,
    pub is_company_owned: bool,
    pub is_share_sale: bool,
    pub is_featured: bool,
    pub description: String,
    pub photos: Vec<Photo>,
    /// When the listing went public. Once set, an update that omits it keeps it.
    pub made_visible_at: Option<DateTime<Utc>>,
}

/// Address as supplied by a caller; region may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewAddress {
    pub city: String,
    pub postcode: String,
    pub shortened_postcode: String,
    pub region: Option<Region>,
    pub country: String,
}

/// Caller-supplied fields for creating or wholly replacing a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewListing {
    pub address: NewAddress,
    pub development_name: Option<String>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sq_ft: u32,
    pub price_in_cents: i64,
    pub minimum_deposit_in_cents: i64,
    pub estimated_deposit_in_cents: i64,
    pub rental_income_in_cents: i64,
    pub is_tenanted: bool,
    pub is_cash_only: bool,
    pub is_new_build: bool,
    pub is_company_owned: bool,
    pub is_share_sale: bool,
    pub is_featured: bool,
    pub description: String,
    pub photos: Vec<Photo>,
    pub made_visible_at: Option<DateTime<Utc>>,
}

impl NewListing {
    /// Validate the required fields and build the stored record.
    ///
    /// Checks run in a fixed order so the first failing field is the one
    /// reported.
    pub(crate) fn into_listing(self, id: i64) -> DomainResult<Listing> {
        if self.address.city.is_empty() {
            return Err(DomainError::validation("city is required"));
        }
        if self.address.shortened_postcode.is_empty() {
            return Err(DomainError::validation("shortened postcode is required"));
        }
        let Some(region) = self.address.region else {
            return Err(DomainError::validation("region is required"));
        };
        let Some(property_type) = self.property_type else {
            return Err(DomainError::validation("property type is required"));
        };
        if self.price_in_cents <= 0 {
            return Err(DomainError::validation("price must be greater than 0"));
        }

        Ok(Listing {
            id,
            address: AddressDetails {
                city: self.address.city,
                postcode: self.address.postcode,
                shortened_postcode: self.address.shortened_postcode,
                region,
                country: self.address.country,
            },
            development_name: self.development_name,
            property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            size_sq_ft: self.size_sq_ft,
            price_in_cents: self.price_in_cents,
            minimum_deposit_in_cents: self.minimum_deposit_in_cents,
            estimated_deposit_in_cents: self.estimated_deposit_in_cents,
            rental_income_in_cents: self.rental_income_in_cents,
            gross_yield: gross_yield(self.rental_income_in_cents, self.price_in_cents),
            is_tenanted: self.is_tenanted,
            is_cash_only: self.is_cash_only,
            is_new_build: self.is_new_build,
            is_company_owned: self.is_company_owned,
            is_share_sale: self.is_share_sale,
            is_featured: self.is_featured,
            description: self.description,
            photos: self.photos,
            made_visible_at: self.made_visible_at,
        })
    }
}

/// Gross yield: twelve months of rent divided by the price.
///
/// Computed in floating point so no rent value can overflow.
pub fn gross_yield(monthly_rent_in_cents: i64, price_in_cents: i64) -> f64 {
    if price_in_cents <= 0 {
        return 0.0;
    }
    monthly_rent_in_cents as f64 * MONTHS_PER_YEAR / price_in_cents as f64
}
