//! Domain layer - Core records and their validation rules
//!
//! This module contains the two record types the API manages and the
//! typed failures raised while storing them. It has no HTTP concerns.

pub mod error;
pub mod example;
pub mod listing;

pub use error::{DomainError, DomainResult};
pub use example::{Example, NewExample};
pub use listing::{
    gross_yield, AddressDetails, Listing, NewAddress, NewListing, Photo, PropertyType, Region,
};
