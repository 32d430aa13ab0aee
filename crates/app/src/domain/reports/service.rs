//! Reports service.
//!
//! Read-only aggregations. Reads run at read-committed isolation; reports are
//! informational and never drive further mutations.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::records::ProductUuid,
        reports::{
            errors::ReportsServiceError,
            records::{CategorySales, InventoryValue, LowStockReport, MonthlySales, ProductSales},
            repository::PgReportsRepository,
        },
        transactions::records::TransactionRecord,
    },
};

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn inventory_value(&self) -> Result<InventoryValue, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let total_value = self.repository.inventory_value(&mut tx).await?;

        tx.commit().await?;

        Ok(InventoryValue { total_value })
    }

    async fn product_history(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<TransactionRecord>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let history = self.repository.product_history(&mut tx, product).await?;

        tx.commit().await?;

        Ok(history)
    }

    async fn sales_per_month(&self, year: i16) -> Result<Vec<MonthlySales>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.sales_per_month(&mut tx, year).await?;

        tx.commit().await?;

        Ok(rows)
    }

    async fn sales_per_category(
        &self,
        from: Option<Timestamp>,
        to: Option<Timestamp>,
    ) -> Result<Vec<CategorySales>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.sales_per_category(&mut tx, from, to).await?;

        tx.commit().await?;

        Ok(rows)
    }

    async fn low_stock_products(
        &self,
        threshold: u64,
    ) -> Result<LowStockReport, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .low_stock_products(&mut tx, threshold)
            .await?;

        tx.commit().await?;

        Ok(LowStockReport {
            threshold,
            products,
        })
    }

    async fn top_products(&self, limit: u32) -> Result<Vec<ProductSales>, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.top_products(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(rows)
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Total inventory value over all products.
    async fn inventory_value(&self) -> Result<InventoryValue, ReportsServiceError>;

    /// All transactions for a product, most recent first.
    async fn product_history(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<TransactionRecord>, ReportsServiceError>;

    /// Sales totals grouped by calendar month for one year.
    async fn sales_per_month(&self, year: i16) -> Result<Vec<MonthlySales>, ReportsServiceError>;

    /// Sales totals grouped by product category, optionally bounded by an
    /// inclusive `created_at` range.
    async fn sales_per_category(
        &self,
        from: Option<Timestamp>,
        to: Option<Timestamp>,
    ) -> Result<Vec<CategorySales>, ReportsServiceError>;

    /// Products at or below the threshold, annotated with the threshold.
    async fn low_stock_products(
        &self,
        threshold: u64,
    ) -> Result<LowStockReport, ReportsServiceError>;

    /// Products ranked by sales volume, top N.
    async fn top_products(&self, limit: u32) -> Result<Vec<ProductSales>, ReportsServiceError>;
}
