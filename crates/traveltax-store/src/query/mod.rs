//! Repository traits for every table held by the store.
//!
//! Each trait is implemented for [`StoreConnection`](crate::StoreConnection).
//! Lookups by key are exact and case-sensitive. Lists are ordered by `id`.

pub mod account;
pub mod tax_rate;
pub mod travel_destination;

pub use account::AccountRepository;
pub use tax_rate::TaxRepository;
pub use travel_destination::TravelRepository;
