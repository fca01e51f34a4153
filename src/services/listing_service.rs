//! Listing service - Handles property listing use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Listing, NewListing};
use crate::errors::{AppError, AppResult};
use crate::infra::ListingRepository;

/// Listing service trait for dependency injection.
#[async_trait]
pub trait ListingService: Send + Sync {
    async fn create_listing(&self, input: NewListing) -> AppResult<Listing>;

    async fn get_listing(&self, id: i64) -> AppResult<Listing>;

    async fn list_listings(&self) -> AppResult<Vec<Listing>>;

    /// Replace a listing; an omitted `made_visible_at` keeps the stored one
    async fn update_listing(&self, id: i64, input: NewListing) -> AppResult<Listing>;

    async fn delete_listing(&self, id: i64) -> AppResult<()>;

    async fn featured_listings(&self) -> AppResult<Vec<Listing>>;

    /// Case-insensitive substring search on the city
    async fn search_by_city(&self, query: &str) -> AppResult<Vec<Listing>>;

    async fn listings_by_region(&self, region: &str) -> AppResult<Vec<Listing>>;

    async fn listings_by_property_type(&self, property_type: &str) -> AppResult<Vec<Listing>>;

    /// Inclusive price range in minor currency units
    async fn listings_by_price_range(&self, min: i64, max: i64) -> AppResult<Vec<Listing>>;

    async fn listings_by_bedrooms(&self, min: u32, max: u32) -> AppResult<Vec<Listing>>;

    async fn listings_by_bathrooms(&self, min: u32, max: u32) -> AppResult<Vec<Listing>>;
}

/// Concrete implementation of ListingService over a repository.
pub struct ListingManager {
    repo: Arc<dyn ListingRepository>,
}

impl ListingManager {
    /// Create new listing service instance
    pub fn new(repo: Arc<dyn ListingRepository>) -> Self {
        Self { repo }
    }
}

/// Reject ranges whose lower bound exceeds the upper bound.
fn check_range<T: PartialOrd + std::fmt::Display>(field: &str, min: T, max: T) -> AppResult<()> {
    if min > max {
        return Err(AppError::validation(format!(
            "{field} min ({min}) must not exceed max ({max})"
        )));
    }
    Ok(())
}

#[async_trait]
impl ListingService for ListingManager {
    async fn create_listing(&self, input: NewListing) -> AppResult<Listing> {
        let listing = self.repo.create(input)?;
        tracing::info!(id = listing.id, city = %listing.address.city, "Listing created");
        Ok(listing)
    }

    async fn get_listing(&self, id: i64) -> AppResult<Listing> {
        Ok(self.repo.get_by_id(id)?)
    }

    async fn list_listings(&self) -> AppResult<Vec<Listing>> {
        Ok(self.repo.get_all())
    }

    async fn update_listing(&self, id: i64, input: NewListing) -> AppResult<Listing> {
        let listing = self.repo.update(id, input)?;
        tracing::info!(id, "Listing updated");
        Ok(listing)
    }

    async fn delete_listing(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id)?;
        tracing::info!(id, "Listing deleted");
        Ok(())
    }

    async fn featured_listings(&self) -> AppResult<Vec<Listing>> {
        Ok(self.repo.featured())
    }

    async fn search_by_city(&self, query: &str) -> AppResult<Vec<Listing>> {
        let found = self.repo.search_by_city(query);
        tracing::debug!(query, matches = found.len(), "City search");
        Ok(found)
    }

    async fn listings_by_region(&self, region: &str) -> AppResult<Vec<Listing>> {
        Ok(self.repo.by_region(region))
    }

    async fn listings_by_property_type(&self, property_type: &str) -> AppResult<Vec<Listing>> {
        Ok(self.repo.by_property_type(property_type))
    }

    async fn listings_by_price_range(&self, min: i64, max: i64) -> AppResult<Vec<Listing>> {
        check_range("price", min, max)?;
        Ok(self.repo.by_price_range(min, max))
    }

    async fn listings_by_bedrooms(&self, min: u32, max: u32) -> AppResult<Vec<Listing>> {
        check_range("bedrooms", min, max)?;
        Ok(self.repo.by_bedroom_range(min, max))
    }

    async fn listings_by_bathrooms(&self, min: u32, max: u32) -> AppResult<Vec<Listing>> {
        check_range("bathrooms", min, max)?;
        Ok(self.repo.by_bathroom_range(min, max))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{AddressDetails, DomainError, NewAddress, PropertyType, Region};
    use crate::infra::MockListingRepository;

    fn create_test_listing(id: i64, city: &str) -> Listing {
        Listing {
            id,
            address: AddressDetails {
                city: city.to_string(),
                postcode: String::new(),
                shortened_postcode: "W1".to_string(),
                region: Region::London,
                country: "UK".to_string(),
            },
            development_name: None,
            property_type: PropertyType::Apartment,
            bedrooms: 2,
            bathrooms: 1,
            size_sq_ft: 500,
            price_in_cents: 10_000_000,
            minimum_deposit_in_cents: 0,
            estimated_deposit_in_cents: 0,
            rental_income_in_cents: 0,
            gross_yield: 0.0,
            is_tenanted: false,
            is_cash_only: false,
            is_new_build: false,
            is_company_owned: false,
            is_share_sale: false,
            is_featured: false,
            description: String::new(),
            photos: Vec::new(),
            made_visible_at: None,
        }
    }

    fn new_listing(city: &str) -> NewListing {
        NewListing {
            address: NewAddress {
                city: city.to_string(),
                shortened_postcode: "W1".to_string(),
                region: Some(Region::London),
                ..Default::default()
            },
            property_type: Some(PropertyType::Apartment),
            price_in_cents: 10_000_000,
            ..Default::default()
        }
    }

    fn service(repo: MockListingRepository) -> ListingManager {
        ListingManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_listing_delegates() {
        let mut repo = MockListingRepository::new();
        repo.expect_create()
            .withf(|input| input.address.city == "London")
            .times(1)
            .returning(|input| Ok(create_test_listing(1, &input.address.city)));

        let listing = service(repo).create_listing(new_listing("London")).await.unwrap();

        assert_eq!(listing.id, 1);
    }

    #[tokio::test]
    async fn test_create_listing_validation_error() {
        let mut repo = MockListingRepository::new();
        repo.expect_create()
            .returning(|_| Err(DomainError::validation("price must be greater than 0")));

        let err = service(repo)
            .create_listing(NewListing::default())
            .await
            .unwrap_err();

        assert_eq!(err, AppError::validation("price must be greater than 0"));
    }

    #[tokio::test]
    async fn test_update_listing_not_found() {
        let mut repo = MockListingRepository::new();
        repo.expect_update()
            .withf(|id, _| *id == 42)
            .returning(|id, _| Err(DomainError::not_found("listing", id)));

        let err = service(repo)
            .update_listing(42, new_listing("London"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::NotFound("listing not found with id: 42".to_string()));
    }

    #[tokio::test]
    async fn test_delete_listing() {
        let mut repo = MockListingRepository::new();
        repo.expect_delete().with(eq(5)).times(1).returning(|_| Ok(()));

        service(repo).delete_listing(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_by_city_passes_query() {
        let mut repo = MockListingRepository::new();
        repo.expect_search_by_city()
            .withf(|query| query == "lon")
            .times(1)
            .returning(|_| vec![create_test_listing(1, "London")]);

        let found = service(repo).search_by_city("lon").await.unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_region_and_type_filters_pass_strings_through() {
        let mut repo = MockListingRepository::new();
        repo.expect_by_region()
            .withf(|region| region == "South East")
            .returning(|_| Vec::new());
        repo.expect_by_property_type()
            .withf(|kind| kind == "semi_detached")
            .returning(|_| vec![create_test_listing(3, "Manchester")]);

        let svc = service(repo);

        assert!(svc.listings_by_region("South East").await.unwrap().is_empty());
        assert_eq!(svc.listings_by_property_type("semi_detached").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_featured_listings() {
        let mut repo = MockListingRepository::new();
        repo.expect_featured()
            .returning(|| vec![create_test_listing(79, "Wallington")]);

        let featured = service(repo).featured_listings().await.unwrap();

        assert_eq!(featured[0].id, 79);
    }

    #[tokio::test]
    async fn test_price_range_forwards_bounds() {
        let mut repo = MockListingRepository::new();
        repo.expect_by_price_range()
            .with(eq(10_000_000), eq(15_000_000))
            .times(1)
            .returning(|_, _| vec![create_test_listing(1, "London")]);

        let found = service(repo)
            .listings_by_price_range(10_000_000, 15_000_000)
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_inverted_ranges_rejected_before_repository() {
        let mut repo = MockListingRepository::new();
        repo.expect_by_price_range().never();
        repo.expect_by_bedroom_range().never();
        repo.expect_by_bathroom_range().never();

        let svc = service(repo);

        assert!(matches!(
            svc.listings_by_price_range(20, 10).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            svc.listings_by_bedrooms(3, 1).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            svc.listings_by_bathrooms(2, 0).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_room_ranges_forward_bounds() {
        let mut repo = MockListingRepository::new();
        repo.expect_by_bedroom_range()
            .with(eq(1), eq(3))
            .returning(|_, _| vec![create_test_listing(1, "London")]);
        repo.expect_by_bathroom_range()
            .with(eq(2), eq(2))
            .returning(|_, _| Vec::new());

        let svc = service(repo);

        assert_eq!(svc.listings_by_bedrooms(1, 3).await.unwrap().len(), 1);
        assert!(svc.listings_by_bathrooms(2, 2).await.unwrap().is_empty());
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("price", 1, 1).is_ok());
        assert!(check_range("price", 0, 10).is_ok());
        assert_eq!(
            check_range("bedrooms", 3u32, 1u32).unwrap_err(),
            AppError::validation("bedrooms min (3) must not exceed max (1)")
        );
    }
}
