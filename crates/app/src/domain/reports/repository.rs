//! Reports Repository
//!
//! Read-only aggregation queries over the products and transactions tables.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::{to_bigint, try_get_u64},
    domain::{
        products::records::ProductUuid,
        reports::records::{CategorySales, LowStockProduct, MonthlySales, ProductSales},
        transactions::records::{
            CustomerUuid, TransactionKind, TransactionRecord, TransactionUuid,
        },
    },
};

const INVENTORY_VALUE_SQL: &str = include_str!("sql/inventory_value.sql");
const PRODUCT_HISTORY_SQL: &str = include_str!("sql/product_history.sql");
const SALES_PER_MONTH_SQL: &str = include_str!("sql/sales_per_month.sql");
const SALES_PER_CATEGORY_SQL: &str = include_str!("sql/sales_per_category.sql");
const LOW_STOCK_PRODUCTS_SQL: &str = include_str!("sql/low_stock_products.sql");
const TOP_PRODUCTS_SQL: &str = include_str!("sql/top_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn inventory_value(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(INVENTORY_VALUE_SQL)
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(total).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total_value".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn product_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<TransactionRecord>, sqlx::Error> {
        query_as::<Postgres, TransactionRecord>(PRODUCT_HISTORY_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn sales_per_month(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        year: i16,
    ) -> Result<Vec<MonthlySales>, sqlx::Error> {
        query_as::<Postgres, MonthlySales>(SALES_PER_MONTH_SQL)
            .bind(i32::from(year))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn sales_per_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        from: Option<Timestamp>,
        to: Option<Timestamp>,
    ) -> Result<Vec<CategorySales>, sqlx::Error> {
        query_as::<Postgres, CategorySales>(SALES_PER_CATEGORY_SQL)
            .bind(from.map(SqlxTimestamp::from))
            .bind(to.map(SqlxTimestamp::from))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn low_stock_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        threshold: u64,
    ) -> Result<Vec<LowStockProduct>, sqlx::Error> {
        query_as::<Postgres, LowStockProduct>(LOW_STOCK_PRODUCTS_SQL)
            .bind(to_bigint(threshold, "stock")?)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn top_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<ProductSales>, sqlx::Error> {
        query_as::<Postgres, ProductSales>(TOP_PRODUCTS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MonthlySales {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            month: row.try_get("month")?,
            total_sales: try_get_u64(row, "total_sales")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CategorySales {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            category: row.try_get("category")?,
            total_sales: try_get_u64(row, "total_sales")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductSales {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            total_sales: try_get_u64(row, "total_sales")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for LowStockProduct {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            stock: try_get_u64(row, "stock")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TransactionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i64: i64 = row.try_get("quantity")?;
        let quantity = u32::try_from(quantity_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        let kind = row
            .try_get::<&str, _>("kind")?
            .parse::<TransactionKind>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "kind".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: TransactionUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            quantity,
            kind,
            customer_uuid: row
                .try_get::<Option<uuid::Uuid>, _>("customer_uuid")?
                .map(CustomerUuid::from_uuid),
            product_price: try_get_u64(row, "product_price")?,
            total: try_get_u64(row, "total")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
