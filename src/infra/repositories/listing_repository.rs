//! In-memory listing repository with filtered queries.
//!
//! Filters are full scans of the live set under the read lock; there are
//! no secondary indexes.

use chrono::Utc;

use super::base::MemoryTable;
use super::sample_listings::sample_listings;
use crate::domain::{DomainError, DomainResult, Listing, NewListing};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY: &str = "listing";

/// Listing repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ListingRepository: Send + Sync {
    /// Validate and store a new listing; `made_visible_at` defaults to now
    fn create(&self, input: NewListing) -> DomainResult<Listing>;

    /// Find listing by ID
    fn get_by_id(&self, id: i64) -> DomainResult<Listing>;

    /// Snapshot of every stored listing, in no particular order
    fn get_all(&self) -> Vec<Listing>;

    /// Replace the stored listing; a stored `made_visible_at` survives an
    /// update that omits it
    fn update(&self, id: i64, input: NewListing) -> DomainResult<Listing>;

    /// Remove the listing permanently
    fn delete(&self, id: i64) -> DomainResult<()>;

    /// Listings whose region equals `region` exactly
    fn by_region(&self, region: &str) -> Vec<Listing>;

    /// Listings whose property type equals `property_type` exactly
    fn by_property_type(&self, property_type: &str) -> Vec<Listing>;

    /// Listings flagged as featured
    fn featured(&self) -> Vec<Listing>;

    /// Case-insensitive substring match on the city
    fn search_by_city(&self, query: &str) -> Vec<Listing>;

    /// Listings with `min <= price_in_cents <= max`
    fn by_price_range(&self, min: i64, max: i64) -> Vec<Listing>;

    /// Listings with `min <= bedrooms <= max`
    fn by_bedroom_range(&self, min: u32, max: u32) -> Vec<Listing>;

    /// Listings with `min <= bathrooms <= max`
    fn by_bathroom_range(&self, min: u32, max: u32) -> Vec<Listing>;
}

/// Concrete in-memory implementation of ListingRepository
#[derive(Debug, Default)]
pub struct ListingStore {
    table: MemoryTable<Listing>,
}

impl ListingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the bundled sample listings.
    ///
    /// Sample listings keep their own identities; later creations continue
    /// after the largest one.
    pub fn seeded() -> DomainResult<Self> {
        let store = Self::new();
        {
            let mut table = store.table.write();
            for (id, input) in sample_listings() {
                table.seed(id, input.into_listing(id)?);
            }
        }
        Ok(store)
    }

    fn select(&self, predicate: impl Fn(&Listing) -> bool) -> Vec<Listing> {
        self.table.read().select(predicate)
    }
}

impl ListingRepository for ListingStore {
    fn create(&self, input: NewListing) -> DomainResult<Listing> {
        let mut table = self.table.write();
        table.insert_with(|id| {
            let mut listing = input.into_listing(id)?;
            listing.made_visible_at.get_or_insert_with(Utc::now);
            Ok(listing)
        })
    }

    fn get_by_id(&self, id: i64) -> DomainResult<Listing> {
        self.table
            .read()
            .get(id)
            .cloned()
            .ok_or(DomainError::not_found(ENTITY, id))
    }

    fn get_all(&self) -> Vec<Listing> {
        self.table.read().snapshot()
    }

    fn update(&self, id: i64, input: NewListing) -> DomainResult<Listing> {
        let mut table = self.table.write();

        let mut listing = input.into_listing(id)?;
        let existing = table.get(id).ok_or(DomainError::not_found(ENTITY, id))?;
        if listing.made_visible_at.is_none() {
            listing.made_visible_at = existing.made_visible_at;
        }

        table.replace(id, listing.clone());
        Ok(listing)
    }

    fn delete(&self, id: i64) -> DomainResult<()> {
        self.table
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(DomainError::not_found(ENTITY, id))
    }

    fn by_region(&self, region: &str) -> Vec<Listing> {
        self.select(|l| l.address.region.as_str() == region)
    }

    fn by_property_type(&self, property_type: &str) -> Vec<Listing> {
        self.select(|l| l.property_type.as_str() == property_type)
    }

    fn featured(&self) -> Vec<Listing> {
        self.select(|l| l.is_featured)
    }

    fn search_by_city(&self, query: &str) -> Vec<Listing> {
        let needle = query.to_lowercase();
        self.select(|l| l.address.city.to_lowercase().contains(&needle))
    }

    fn by_price_range(&self, min: i64, max: i64) -> Vec<Listing> {
        self.select(|l| (min..=max).contains(&l.price_in_cents))
    }

    fn by_bedroom_range(&self, min: u32, max: u32) -> Vec<Listing> {
        self.select(|l| (min..=max).contains(&l.bedrooms))
    }

    fn by_bathroom_range(&self, min: u32, max: u32) -> Vec<Listing> {
        self.select(|l| (min..=max).contains(&l.bathrooms))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use chrono::{DateTime, TimeZone};

    use super::*;
    use crate::domain::{NewAddress, PropertyType, Region};

    fn listing(city: &str, region: Region, property_type: PropertyType, price: i64) -> NewListing {
        NewListing {
            address: NewAddress {
                city: city.to_string(),
                shortened_postcode: "W1".to_string(),
                region: Some(region),
                country: "UK".to_string(),
                ..Default::default()
            },
            property_type: Some(property_type),
            price_in_cents: price,
            ..Default::default()
        }
    }

    fn london() -> NewListing {
        listing("London", Region::SouthEast, PropertyType::Apartment, 10_000_000)
    }

    fn visible_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 2, 1, 16, 42, 9).unwrap()
    }

    /// London / Manchester / Birmingham with 1 / 3 / 2 bedrooms and bathrooms
    fn three_cities() -> ListingStore {
        let repo = ListingStore::new();
        let rows = [
            ("London", Region::SouthEast, PropertyType::Apartment, 10_000_000, 1),
            ("Manchester", Region::NorthWest, PropertyType::Detached, 20_000_000, 3),
            ("Birmingham", Region::Midlands, PropertyType::TerracedHouse, 15_000_000, 2),
        ];
        for (city, region, kind, price, rooms) in rows {
            let mut input = listing(city, region, kind, price);
            input.bedrooms = rooms;
            input.bathrooms = rooms;
            input.is_featured = city != "Birmingham";
            repo.create(input).unwrap();
        }
        repo
    }

    fn cities(listings: &[Listing]) -> HashSet<String> {
        listings.iter().map(|l| l.address.city.clone()).collect()
    }

    #[test]
    fn test_create_valid_listing() {
        let repo = ListingStore::new();

        let created = repo.create(london()).unwrap();

        assert_eq!(created.id, 1);
        assert!(created.made_visible_at.is_some());
        assert_eq!(repo.get_by_id(1).unwrap(), created);
    }

    #[test]
    fn test_create_keeps_supplied_visibility() {
        let repo = ListingStore::new();
        let mut input = london();
        input.made_visible_at = Some(visible_at());

        let created = repo.create(input).unwrap();

        assert_eq!(created.made_visible_at, Some(visible_at()));
    }

    #[test]
    fn test_create_validation_failures() {
        let cases: [(&str, fn(&mut NewListing)); 6] = [
            ("city is required", |l: &mut NewListing| l.address.city.clear()),
            ("shortened postcode is required", |l: &mut NewListing| {
                l.address.shortened_postcode.clear()
            }),
            ("region is required", |l: &mut NewListing| l.address.region = None),
            ("property type is required", |l: &mut NewListing| l.property_type = None),
            ("price must be greater than 0", |l: &mut NewListing| l.price_in_cents = 0),
            ("price must be greater than 0", |l: &mut NewListing| {
                l.price_in_cents = -1000
            }),
        ];

        let repo = ListingStore::new();
        for (message, break_it) in cases {
            let mut input = london();
            break_it(&mut input);
            let err = repo.create(input).unwrap_err();
            assert_eq!(err, DomainError::validation(message));
        }

        assert!(repo.get_all().is_empty());
        assert_eq!(repo.create(london()).unwrap().id, 1);
    }

    #[test]
    fn test_create_with_huge_rent_keeps_store_usable() {
        let repo = ListingStore::new();
        let mut input = london();
        input.rental_income_in_cents = i64::MAX / 2;

        let created = repo.create(input).unwrap();

        assert!(created.gross_yield.is_finite() && created.gross_yield > 0.0);
        assert_eq!(repo.create(london()).unwrap().id, created.id + 1);
    }

    #[test]
    fn test_get_by_id_not_found() {
        let err = ListingStore::new().get_by_id(999).unwrap_err();
        assert_eq!(err.to_string(), "listing not found with id: 999");
    }

    #[test]
    fn test_update_replaces_record() {
        let repo = ListingStore::new();
        let created = repo.create(london()).unwrap();

        let mut input = listing("Leeds", Region::Yorkshire, PropertyType::Bungalow, 9_000_000);
        input.rental_income_in_cents = 75_000;
        let updated = repo.update(created.id, input).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.address.city, "Leeds");
        assert!((updated.gross_yield - 0.1).abs() < 1e-9);
        assert_eq!(repo.get_by_id(created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_keeps_visibility_when_omitted() {
        let repo = ListingStore::new();
        let mut input = london();
        input.made_visible_at = Some(visible_at());
        let created = repo.create(input).unwrap();

        let mut change = london();
        change.description = "refurbished".to_string();
        let updated = repo.update(created.id, change).unwrap();

        assert_eq!(updated.made_visible_at, Some(visible_at()));
        assert_eq!(
            repo.get_by_id(created.id).unwrap().made_visible_at,
            Some(visible_at())
        );
    }

    #[test]
    fn test_update_can_move_visibility() {
        let repo = ListingStore::new();
        let created = repo.create(london()).unwrap();

        let mut change = london();
        change.made_visible_at = Some(visible_at());
        let updated = repo.update(created.id, change).unwrap();

        assert_eq!(updated.made_visible_at, Some(visible_at()));
    }

    #[test]
    fn test_update_invalid_leaves_store_unchanged() {
        let repo = ListingStore::new();
        let created = repo.create(london()).unwrap();

        let mut change = london();
        change.price_in_cents = 0;
        assert!(matches!(
            repo.update(created.id, change),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(repo.get_by_id(created.id).unwrap(), created);
    }

    #[test]
    fn test_update_missing_record() {
        let err = ListingStore::new().update(5, london()).unwrap_err();
        assert_eq!(err, DomainError::not_found("listing", 5));
    }

    #[test]
    fn test_delete_then_get() {
        let repo = ListingStore::new();
        let created = repo.create(london()).unwrap();

        repo.delete(created.id).unwrap();

        assert!(repo.get_by_id(created.id).unwrap_err().is_not_found());
        assert!(repo.get_all().is_empty());
        assert!(repo.delete(created.id).unwrap_err().is_not_found());
        assert_eq!(repo.create(london()).unwrap().id, created.id + 1);
    }

    #[test]
    fn test_by_region() {
        let repo = three_cities();
        assert_eq!(cities(&repo.by_region("South East")), HashSet::from(["London".to_string()]));
        assert_eq!(repo.by_region("North West").len(), 1);
        assert!(repo.by_region("south east").is_empty());
        assert!(repo.by_region("Non-existing").is_empty());
    }

    #[test]
    fn test_by_property_type() {
        let repo = three_cities();
        assert_eq!(repo.by_property_type("apartment").len(), 1);
        assert_eq!(
            cities(&repo.by_property_type("detached")),
            HashSet::from(["Manchester".to_string()])
        );
        assert!(repo.by_property_type("mansion").is_empty());
    }

    #[test]
    fn test_featured_uses_flag() {
        let repo = three_cities();
        assert_eq!(
            cities(&repo.featured()),
            HashSet::from(["London".to_string(), "Manchester".to_string()])
        );
    }

    #[test]
    fn test_search_by_city_is_case_insensitive() {
        let repo = three_cities();
        assert_eq!(cities(&repo.search_by_city("london")), HashSet::from(["London".to_string()]));
        assert_eq!(repo.search_by_city("lon").len(), 1);
        assert_eq!(repo.search_by_city("MAN").len(), 1);
        assert!(repo.search_by_city("Edinburgh").is_empty());
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let repo = ListingStore::new();
        for price in [5_000_000, 10_000_000, 15_000_000] {
            repo.create(listing("London", Region::London, PropertyType::Apartment, price))
                .unwrap();
        }

        let mut prices: Vec<i64> = repo
            .by_price_range(10_000_000, 15_000_000)
            .iter()
            .map(|l| l.price_in_cents)
            .collect();
        prices.sort_unstable();

        assert_eq!(prices, vec![10_000_000, 15_000_000]);
        assert!(repo.by_price_range(15_000_001, 20_000_000).is_empty());
    }

    #[test]
    fn test_bedroom_and_bathroom_ranges() {
        let repo = three_cities();
        for (min, max, expected) in [(1, 1, 1), (2, 3, 2), (0, 10, 3), (5, 10, 0)] {
            assert_eq!(repo.by_bedroom_range(min, max).len(), expected);
            assert_eq!(repo.by_bathroom_range(min, max).len(), expected);
        }
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let repo = three_cities();
        assert!(repo.by_bedroom_range(3, 1).is_empty());
        assert!(repo.by_price_range(20_000_000, 10_000_000).is_empty());
    }

    #[test]
    fn test_seeded_store_continues_after_largest_id() {
        let repo = ListingStore::seeded().unwrap();
        let max_id = repo.get_all().iter().map(|l| l.id).max().unwrap();

        let created = repo.create(london()).unwrap();

        assert!(repo.get_all().len() > 1);
        assert_eq!(created.id, max_id + 1);
        assert!(!repo.featured().is_empty());
    }

    #[test]
    fn test_concurrent_creates() {
        let repo = Arc::new(ListingStore::new());
        let handles: Vec<_> = (0..24)
            .map(|_| {
                let repo = Arc::clone(&repo);
                thread::spawn(move || repo.create(london()).unwrap().id)
            })
            .collect();

        let ids: HashSet<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(ids.len(), 24);
        assert_eq!(repo.get_all().len(), 24);
    }
}
