//! Create Transaction Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::transactions::{
    data::NewTransaction,
    records::{TransactionKind, TransactionUuid},
};

use crate::{extensions::*, state::State, transactions::errors::into_status_error};

/// Create Transaction Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTransactionRequest {
    /// Transaction id; generated by the server when omitted
    pub id: Option<Uuid>,
    pub product_id: Uuid,
    pub quantity: u32,
    /// `purchase` or `sale` (localized synonyms accepted)
    #[serde(rename = "type")]
    pub kind: String,
    pub customer_id: Option<Uuid>,
}

/// Transaction Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionCreatedResponse {
    pub tx_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    /// Canonical transaction kind
    #[serde(rename = "type")]
    pub kind: String,
    /// `product_price × quantity` in minor units
    pub total: u64,
}

/// Create Transaction Handler
///
/// Records a purchase or sale and applies its stock mutation atomically.
#[endpoint(
    tags("transactions"),
    summary = "Create Transaction",
    responses(
        (status_code = StatusCode::OK, description = "Transaction recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Transaction already exists"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid payload or insufficient stock"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTransactionRequest>,
    depot: &mut Depot,
) -> Result<Json<TransactionCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    // The kind is normalized before the engine ever sees it; an unrecognized
    // value never reaches the store.
    let kind = request
        .kind
        .parse::<TransactionKind>()
        .map_err(|_unrecognized| {
            StatusError::unprocessable_entity().brief("Unrecognized transaction type")
        })?;

    let completed = state
        .transactions
        .record_transaction(NewTransaction {
            uuid: request.id.map_or_else(TransactionUuid::new, Into::into),
            product_uuid: request.product_id.into(),
            quantity: request.quantity,
            kind,
            customer_uuid: request.customer_id.map(Into::into),
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(TransactionCreatedResponse {
        tx_id: completed.uuid.into(),
        product_id: completed.product_uuid.into(),
        quantity: completed.quantity,
        kind: completed.kind.to_string(),
        total: completed.total,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::{
        products::records::ProductUuid,
        transactions::{MockTransactionsService, TransactionsServiceError, data::CompletedTransaction},
    };

    use crate::test_helpers::transactions_service;

    use super::*;

    fn make_service(transactions: MockTransactionsService) -> Service {
        transactions_service(
            transactions,
            Router::with_path("transactions").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_transaction_success() -> TestResult {
        let tx_uuid = TransactionUuid::new();
        let product_uuid = ProductUuid::new();

        let mut transactions = MockTransactionsService::new();

        transactions
            .expect_record_transaction()
            .once()
            .withf(move |new| {
                new.uuid == tx_uuid
                    && new.product_uuid == product_uuid
                    && new.quantity == 3
                    && new.kind == TransactionKind::Purchase
                    && new.customer_uuid.is_none()
            })
            .return_once(move |new| {
                Ok(CompletedTransaction {
                    uuid: new.uuid,
                    product_uuid: new.product_uuid,
                    quantity: new.quantity,
                    kind: new.kind,
                    total: 300,
                })
            });

        transactions.expect_adjust_stock().never();

        let mut res = TestClient::post("http://example.com/transactions")
            .json(&json!({
                "id": tx_uuid.into_uuid(),
                "productId": product_uuid.into_uuid(),
                "quantity": 3,
                "type": "purchase",
            }))
            .send(&make_service(transactions))
            .await;

        let body: TransactionCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.tx_id, tx_uuid.into_uuid());
        assert_eq!(body.product_id, product_uuid.into_uuid());
        assert_eq!(body.quantity, 3);
        assert_eq!(body.kind, "purchase");
        assert_eq!(body.total, 300);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_normalizes_localized_type() -> TestResult {
        let product_uuid = ProductUuid::new();

        let mut transactions = MockTransactionsService::new();

        transactions
            .expect_record_transaction()
            .once()
            .withf(|new| new.kind == TransactionKind::Sale)
            .return_once(|new| {
                Ok(CompletedTransaction {
                    uuid: new.uuid,
                    product_uuid: new.product_uuid,
                    quantity: new.quantity,
                    kind: new.kind,
                    total: 100,
                })
            });

        let mut res = TestClient::post("http://example.com/transactions")
            .json(&json!({
                "productId": product_uuid.into_uuid(),
                "quantity": 1,
                "type": "penjualan",
            }))
            .send(&make_service(transactions))
            .await;

        let body: TransactionCreatedResponse = res.take_json().await?;

        assert_eq!(body.kind, "sale", "localized synonym must be normalized");
        assert!(!body.tx_id.is_nil(), "server must generate a transaction id");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_unknown_type_returns_422() -> TestResult {
        let mut transactions = MockTransactionsService::new();

        transactions.expect_record_transaction().never();
        transactions.expect_adjust_stock().never();

        let res = TestClient::post("http://example.com/transactions")
            .json(&json!({
                "productId": ProductUuid::new().into_uuid(),
                "quantity": 1,
                "type": "refund",
            }))
            .send(&make_service(transactions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_insufficient_stock_returns_422() -> TestResult {
        let mut transactions = MockTransactionsService::new();

        transactions
            .expect_record_transaction()
            .once()
            .return_once(|_| Err(TransactionsServiceError::InsufficientStock));

        let res = TestClient::post("http://example.com/transactions")
            .json(&json!({
                "productId": ProductUuid::new().into_uuid(),
                "quantity": 10,
                "type": "sale",
            }))
            .send(&make_service(transactions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_unknown_product_returns_404() -> TestResult {
        let mut transactions = MockTransactionsService::new();

        transactions
            .expect_record_transaction()
            .once()
            .return_once(|_| Err(TransactionsServiceError::NotFound));

        let res = TestClient::post("http://example.com/transactions")
            .json(&json!({
                "productId": ProductUuid::new().into_uuid(),
                "quantity": 1,
                "type": "sale",
            }))
            .send(&make_service(transactions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_transaction_duplicate_id_returns_409() -> TestResult {
        let mut transactions = MockTransactionsService::new();

        transactions
            .expect_record_transaction()
            .once()
            .return_once(|_| Err(TransactionsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/transactions")
            .json(&json!({
                "id": TransactionUuid::new().into_uuid(),
                "productId": ProductUuid::new().into_uuid(),
                "quantity": 1,
                "type": "sale",
            }))
            .send(&make_service(transactions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
