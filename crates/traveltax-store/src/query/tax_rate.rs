//! Tax repository for per-province tax reductions.

use std::future::Future;

use crate::model::{NewTaxRate, TaxRate, validate_province_record};
use crate::{StoreConnection, StoreError, StoreResult, TRACING_TARGET_QUERY};

/// Repository for tax record operations.
pub trait TaxRepository {
    /// Creates a new tax record.
    ///
    /// Fails with [`StoreError::Conflict`] if the province already has one
    /// and with [`StoreError::Validation`] for an empty province or an out of
    /// range percentage.
    fn create_tax(&mut self, new_tax: NewTaxRate)
    -> impl Future<Output = StoreResult<TaxRate>> + Send;

    /// Lists every tax record.
    fn list_taxes(&mut self) -> impl Future<Output = StoreResult<Vec<TaxRate>>> + Send;

    /// Lists tax records flagged as secondary provinces.
    fn list_secondary_taxes(&mut self) -> impl Future<Output = StoreResult<Vec<TaxRate>>> + Send;

    /// Finds the tax record of a province.
    fn find_tax_by_province(
        &mut self,
        province: &str,
    ) -> impl Future<Output = StoreResult<Option<TaxRate>>> + Send;
}

impl TaxRepository for StoreConnection {
    async fn create_tax(&mut self, new_tax: NewTaxRate) -> StoreResult<TaxRate> {
        validate_province_record(&new_tax.province, new_tax.reduce_tax_percent)?;

        let mut tables = self.write().await;
        if tables.taxes.iter().any(|t| t.province == new_tax.province) {
            return Err(StoreError::conflict("tax", new_tax.province));
        }

        let id = tables.next_tax_id();
        let tax = new_tax.into_tax_rate(id);
        tables.taxes.push(tax.clone());

        tracing::debug!(target: TRACING_TARGET_QUERY, tax_id = id, province = %tax.province, "Created tax record");
        Ok(tax)
    }

    async fn list_taxes(&mut self) -> StoreResult<Vec<TaxRate>> {
        Ok(self.read().await.taxes.clone())
    }

    async fn list_secondary_taxes(&mut self) -> StoreResult<Vec<TaxRate>> {
        let tables = self.read().await;
        Ok(tables
            .taxes
            .iter()
            .filter(|t| t.is_secondary)
            .cloned()
            .collect())
    }

    async fn find_tax_by_province(&mut self, province: &str) -> StoreResult<Option<TaxRate>> {
        let tables = self.read().await;
        Ok(tables.taxes.iter().find(|t| t.province == province).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn new_tax(province: &str, percent: f64, is_secondary: bool) -> NewTaxRate {
        NewTaxRate {
            province: province.to_owned(),
            reduce_tax_percent: percent,
            is_secondary,
            description: format!("{province} incentive"),
        }
    }

    #[tokio::test]
    async fn lists_in_insertion_order() -> anyhow::Result<()> {
        let mut conn = MemoryStore::new().connection();
        conn.create_tax(new_tax("Papua", 30.0, true)).await?;
        conn.create_tax(new_tax("Bali", 10.0, false)).await?;
        conn.create_tax(new_tax("Aceh", 25.0, true)).await?;

        let all: Vec<_> = conn.list_taxes().await?.into_iter().map(|t| t.id).collect();
        assert_eq!(all, vec![1, 2, 3]);

        let secondary: Vec<_> = conn
            .list_secondary_taxes()
            .await?
            .into_iter()
            .map(|t| t.province)
            .collect();
        assert_eq!(secondary, vec!["Papua", "Aceh"]);
        Ok(())
    }

    #[tokio::test]
    async fn find_by_province_is_exact() -> anyhow::Result<()> {
        let mut conn = MemoryStore::new().connection();
        conn.create_tax(new_tax("Bali", 10.0, false)).await?;

        assert!(conn.find_tax_by_province("Bali").await?.is_some());
        assert!(conn.find_tax_by_province("bali").await?.is_none());
        assert!(conn.find_tax_by_province("Bal").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicates_and_bad_records() -> anyhow::Result<()> {
        let mut conn = MemoryStore::new().connection();
        conn.create_tax(new_tax("Bali", 10.0, false)).await?;

        let duplicate = conn.create_tax(new_tax("Bali", 5.0, true)).await;
        assert!(matches!(duplicate, Err(StoreError::Conflict { .. })));

        let out_of_range = conn.create_tax(new_tax("Java", 101.0, false)).await;
        assert!(matches!(out_of_range, Err(StoreError::Validation(_))));

        let empty = conn.create_tax(new_tax("", 1.0, false)).await;
        assert!(matches!(empty, Err(StoreError::Validation(_))));

        assert_eq!(conn.list_taxes().await?.len(), 1);
        Ok(())
    }
}
