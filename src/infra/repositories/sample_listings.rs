//! Demonstration listings loaded by `ListingStore::seeded`.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{NewAddress, NewListing, Photo, PropertyType, Region};

const PHOTO_BASE_URL: &str = "https://storage.example.com/listings";

fn photo(key: &str, mime_type: &str) -> Photo {
    Photo {
        original_url: format!("{PHOTO_BASE_URL}/{key}"),
        standard_url: format!("{PHOTO_BASE_URL}/{key}_standard"),
        thumbnail_url: format!("{PHOTO_BASE_URL}/{key}_thumbnail"),
        mime_type: mime_type.to_string(),
    }
}

fn visible(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).single()
}

fn located(city: &str, shortened_postcode: &str, region: Region, kind: PropertyType) -> NewListing {
    NewListing {
        address: NewAddress {
            city: city.to_string(),
            shortened_postcode: shortened_postcode.to_string(),
            region: Some(region),
            country: "UK".to_string(),
            ..Default::default()
        },
        property_type: Some(kind),
        ..Default::default()
    }
}

/// Sample listings paired with the identity each is stored under.
pub(crate) fn sample_listings() -> Vec<(i64, NewListing)> {
    vec![
        (
            187,
            NewListing {
                bedrooms: 1,
                bathrooms: 1,
                size_sq_ft: 50,
                price_in_cents: 12_500_000,
                minimum_deposit_in_cents: 1_000_000,
                estimated_deposit_in_cents: 3_125_000,
                rental_income_in_cents: 110_000,
                is_tenanted: true,
                description: "property".to_string(),
                photos: vec![photo("1b2b53fd", "image/png"), photo("7c8d16b4", "image/png")],
                ..located("London", "N17", Region::SouthWest, PropertyType::Apartment)
            },
        ),
        (
            185,
            NewListing {
                bedrooms: 1,
                bathrooms: 1,
                size_sq_ft: 2342,
                price_in_cents: 10_000_000,
                minimum_deposit_in_cents: 2_550_000,
                estimated_deposit_in_cents: 2_500_000,
                rental_income_in_cents: 300_000,
                is_tenanted: true,
                description: "asdf".to_string(),
                photos: vec![photo("ba11810b", "image/jpeg")],
                ..located("London", "W8", Region::SouthEast, PropertyType::Apartment)
            },
        ),
        (
            79,
            NewListing {
                bedrooms: 2,
                bathrooms: 1,
                size_sq_ft: 300,
                price_in_cents: 10_000_000,
                minimum_deposit_in_cents: 1_000_000,
                estimated_deposit_in_cents: 2_500_000,
                rental_income_in_cents: 60_000,
                is_tenanted: true,
                is_featured: true,
                description: "test".to_string(),
                photos: vec![photo("dc1c52ca", "image/jpeg"), photo("82540ded", "image/jpeg")],
                made_visible_at: visible(2023, 2, 1, 16, 42, 9),
                ..located("Wallington", "SM6", Region::London, PropertyType::Apartment)
            },
        ),
        (
            80,
            NewListing {
                bedrooms: 0,
                bathrooms: 1,
                size_sq_ft: 40,
                price_in_cents: 23_456_700,
                minimum_deposit_in_cents: 3_000_000,
                estimated_deposit_in_cents: 18_798_136,
                rental_income_in_cents: 200_000,
                is_tenanted: true,
                is_cash_only: true,
                is_share_sale: true,
                is_featured: true,
                description: "Share sale".to_string(),
                photos: vec![photo("5e0b1a7c", "image/jpeg")],
                made_visible_at: visible(2023, 2, 1, 16, 52, 50),
                ..located("Edinburgh", "EH12", Region::Scotland, PropertyType::Apartment)
            },
        ),
        (
            81,
            NewListing {
                bedrooms: 3,
                bathrooms: 2,
                size_sq_ft: 40,
                price_in_cents: 14_400_000,
                minimum_deposit_in_cents: 5_200_000,
                estimated_deposit_in_cents: 3_600_000,
                rental_income_in_cents: 200_000,
                is_tenanted: true,
                is_share_sale: true,
                is_company_owned: true,
                is_featured: true,
                description: "Company owned".to_string(),
                photos: vec![photo("a4f2c913", "image/jpeg")],
                made_visible_at: visible(2023, 2, 1, 17, 12, 25),
                ..located("Manchester", "M1", Region::NorthWest, PropertyType::SemiDetached)
            },
        ),
        (
            82,
            NewListing {
                bedrooms: 3,
                bathrooms: 3,
                size_sq_ft: 600,
                price_in_cents: 100_000_000,
                minimum_deposit_in_cents: 20_000_000,
                estimated_deposit_in_cents: 40_827_520,
                rental_income_in_cents: 850_000,
                description: "Terraced house with garden".to_string(),
                photos: vec![
                    photo("0d6e3b22", "image/jpeg"),
                    photo("e91f0c4d", "image/jpeg"),
                    photo("77b2aa10", "image/jpeg"),
                ],
                made_visible_at: visible(2023, 2, 2, 8, 36, 0),
                ..located("London", "W14", Region::London, PropertyType::TerracedHouse)
            },
        ),
        (
            68,
            NewListing {
                bedrooms: 1,
                bathrooms: 1,
                size_sq_ft: 301,
                price_in_cents: 13_875_000,
                minimum_deposit_in_cents: 3_468_700,
                estimated_deposit_in_cents: 3_468_750,
                rental_income_in_cents: 95_100,
                is_tenanted: true,
                is_cash_only: true,
                is_featured: true,
                description: "Modern studio apartment in the city centre, already tenanted."
                    .to_string(),
                photos: vec![photo("3c7a9e45", "image/png"), photo("f2d81b6e", "image/jpeg")],
                made_visible_at: visible(2023, 9, 27, 8, 14, 37),
                ..located("Sheffield", "S1", Region::Yorkshire, PropertyType::Apartment)
            },
        ),
    ]
}
