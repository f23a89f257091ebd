//! Travel repository for per-province travel incentives.

use std::future::Future;

use crate::model::{NewTravelDestination, TravelDestination, validate_province_record};
use crate::{StoreConnection, StoreError, StoreResult, TRACING_TARGET_QUERY};

/// Repository for travel record operations.
pub trait TravelRepository {
    /// Creates a new travel record.
    ///
    /// Same constraints as tax records: unique province, percentage within
    /// `0..=100`.
    fn create_travel(
        &mut self,
        new_travel: NewTravelDestination,
    ) -> impl Future<Output = StoreResult<TravelDestination>> + Send;

    /// Lists every travel record.
    fn list_travels(&mut self)
    -> impl Future<Output = StoreResult<Vec<TravelDestination>>> + Send;

    /// Lists travel records flagged as secondary provinces.
    fn list_secondary_travels(
        &mut self,
    ) -> impl Future<Output = StoreResult<Vec<TravelDestination>>> + Send;

    /// Finds the travel record of a province.
    fn find_travel_by_province(
        &mut self,
        province: &str,
    ) -> impl Future<Output = StoreResult<Option<TravelDestination>>> + Send;
}

impl TravelRepository for StoreConnection {
    async fn create_travel(
        &mut self,
        new_travel: NewTravelDestination,
    ) -> StoreResult<TravelDestination> {
        validate_province_record(&new_travel.province, new_travel.tax_reduction)?;

        let mut tables = self.write().await;
        if tables
            .travels
            .iter()
            .any(|t| t.province == new_travel.province)
        {
            return Err(StoreError::conflict("travel", new_travel.province));
        }

        let id = tables.next_travel_id();
        let travel = new_travel.into_travel_destination(id);
        tables.travels.push(travel.clone());

        tracing::debug!(target: TRACING_TARGET_QUERY, travel_id = id, province = %travel.province, "Created travel record");
        Ok(travel)
    }

    async fn list_travels(&mut self) -> StoreResult<Vec<TravelDestination>> {
        Ok(self.read().await.travels.clone())
    }

    async fn list_secondary_travels(&mut self) -> StoreResult<Vec<TravelDestination>> {
        let tables = self.read().await;
        Ok(tables
            .travels
            .iter()
            .filter(|t| t.is_secondary)
            .cloned()
            .collect())
    }

    async fn find_travel_by_province(
        &mut self,
        province: &str,
    ) -> StoreResult<Option<TravelDestination>> {
        let tables = self.read().await;
        Ok(tables
            .travels
            .iter()
            .find(|t| t.province == province)
            .cloned())
    }
}
