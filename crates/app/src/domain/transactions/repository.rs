//! Transactions Repository

use sqlx::{Postgres, Transaction, query};

use crate::{
    database::{to_bigint, try_get_u64},
    domain::{
        products::records::ProductUuid,
        transactions::data::NewTransaction,
    },
};

const GET_PRICE_SQL: &str = include_str!("sql/get_price.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const INCREASE_STOCK_SQL: &str = include_str!("sql/increase_stock.sql");
const DECREASE_STOCK_SQL: &str = include_str!("sql/decrease_stock.sql");
const CREATE_TRANSACTION_SQL: &str = include_str!("sql/create_transaction.sql");

/// Price-and-stock snapshot returned by the locking read.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LockedProduct {
    pub(crate) price: u64,
    pub(crate) stock: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTransactionsRepository;

impl PgTransactionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Read the product price without locking the row.
    pub(crate) async fn get_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let row = query(GET_PRICE_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        try_get_u64(&row, "price")
    }

    /// Locking read of the product row (`SELECT ... FOR UPDATE`).
    ///
    /// The row lock is held until the enclosing transaction commits or rolls
    /// back, serializing concurrent mutators of the same product.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<LockedProduct, sqlx::Error> {
        let row = query(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(LockedProduct {
            price: try_get_u64(&row, "price")?,
            stock: try_get_u64(&row, "stock")?,
        })
    }

    pub(crate) async fn increase_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<(), sqlx::Error> {
        query(INCREASE_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(i64::from(quantity))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn decrease_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<(), sqlx::Error> {
        query(DECREASE_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(i64::from(quantity))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn create_transaction(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        transaction: &NewTransaction,
        product_price: u64,
        total: u64,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_TRANSACTION_SQL)
            .bind(transaction.uuid.into_uuid())
            .bind(transaction.product_uuid.into_uuid())
            .bind(i64::from(transaction.quantity))
            .bind(transaction.kind.as_str())
            .bind(transaction.customer_uuid.map(|customer| customer.into_uuid()))
            .bind(to_bigint(product_price, "product_price")?)
            .bind(to_bigint(total, "total")?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
