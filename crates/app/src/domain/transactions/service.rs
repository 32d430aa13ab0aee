//! Stock mutation engine.
//!
//! Applies purchases, sales and manual stock adjustments. Every mutation runs
//! inside a single database transaction, and any path that decreases stock
//! first takes a row-level lock on the product (`SELECT ... FOR UPDATE`), so
//! concurrent mutations of the same product serialize in the store. The lock
//! lives in the database rather than in-process, which keeps multiple service
//! instances against the same store correct.
//!
//! A recorded transaction and its stock mutation commit in the same atomic
//! unit; no partial effect (stock changed but no transaction row, or the
//! reverse) is ever observable.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    audit::AuditLog,
    database::Db,
    domain::{
        products::records::ProductUuid,
        transactions::{
            data::{CompletedTransaction, NewTransaction},
            errors::TransactionsServiceError,
            records::{StockDirection, TransactionKind},
            repository::PgTransactionsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgTransactionsService {
    db: Db,
    audit: AuditLog,
    repository: PgTransactionsRepository,
}

impl PgTransactionsService {
    #[must_use]
    pub fn new(db: Db, audit: AuditLog) -> Self {
        Self {
            db,
            audit,
            repository: PgTransactionsRepository::new(),
        }
    }
}

#[async_trait]
impl TransactionsService for PgTransactionsService {
    async fn record_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<CompletedTransaction, TransactionsServiceError> {
        // Validation happens before any store access.
        if transaction.quantity == 0 {
            return Err(TransactionsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        // The price snapshot is re-read inside the atomic unit. For a sale
        // the same read locks the row, so the sufficiency check and the
        // decrement cannot interleave with another sale of this product.
        // Early returns drop `tx`, which rolls everything back.
        let price = match transaction.kind {
            TransactionKind::Purchase => {
                let price = self
                    .repository
                    .get_price(&mut tx, transaction.product_uuid)
                    .await?;

                self.repository
                    .increase_stock(&mut tx, transaction.product_uuid, transaction.quantity)
                    .await?;

                price
            }
            TransactionKind::Sale => {
                let product = self
                    .repository
                    .lock_product(&mut tx, transaction.product_uuid)
                    .await?;

                if product.stock < u64::from(transaction.quantity) {
                    return Err(TransactionsServiceError::InsufficientStock);
                }

                self.repository
                    .decrease_stock(&mut tx, transaction.product_uuid, transaction.quantity)
                    .await?;

                product.price
            }
        };

        let total = price
            .checked_mul(u64::from(transaction.quantity))
            .ok_or(TransactionsServiceError::TotalOutOfRange)?;

        self.repository
            .create_transaction(&mut tx, &transaction, price, total)
            .await?;

        tx.commit().await?;

        self.audit
            .record(format!(
                "TX {} {} {} {} total:{total}",
                transaction.uuid, transaction.kind, transaction.product_uuid, transaction.quantity
            ))
            .await;

        Ok(CompletedTransaction {
            uuid: transaction.uuid,
            product_uuid: transaction.product_uuid,
            quantity: transaction.quantity,
            kind: transaction.kind,
            total,
        })
    }

    async fn adjust_stock(
        &self,
        product: ProductUuid,
        quantity: u32,
        direction: StockDirection,
    ) -> Result<u64, TransactionsServiceError> {
        if quantity == 0 {
            return Err(TransactionsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let current = self.repository.lock_product(&mut tx, product).await?;

        let new_stock = match direction {
            StockDirection::Increase => {
                self.repository
                    .increase_stock(&mut tx, product, quantity)
                    .await?;

                current.stock + u64::from(quantity)
            }
            StockDirection::Decrease => {
                if current.stock < u64::from(quantity) {
                    return Err(TransactionsServiceError::InsufficientStock);
                }

                self.repository
                    .decrease_stock(&mut tx, product, quantity)
                    .await?;

                current.stock - u64::from(quantity)
            }
        };

        tx.commit().await?;

        self.audit
            .record(format!(
                "STOCK {product} quantity:{quantity} => {new_stock} direction:{direction}"
            ))
            .await;

        Ok(new_stock)
    }
}

#[automock]
#[async_trait]
pub trait TransactionsService: Send + Sync {
    /// Records a purchase or sale and applies its stock mutation atomically.
    async fn record_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<CompletedTransaction, TransactionsServiceError>;

    /// Applies a manual stock adjustment, returning the new stock level.
    async fn adjust_stock(
        &self,
        product: ProductUuid,
        quantity: u32,
        direction: StockDirection,
    ) -> Result<u64, TransactionsServiceError>;
}
