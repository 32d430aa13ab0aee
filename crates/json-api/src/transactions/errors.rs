//! Transaction Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::transactions::TransactionsServiceError;

pub(crate) fn into_status_error(error: TransactionsServiceError) -> StatusError {
    match error {
        TransactionsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Transaction already exists")
        }
        TransactionsServiceError::InsufficientStock => {
            StatusError::unprocessable_entity().brief("Insufficient stock")
        }
        TransactionsServiceError::InvalidQuantity => {
            StatusError::unprocessable_entity().brief("Quantity must be greater than zero")
        }
        TransactionsServiceError::InvalidReference
        | TransactionsServiceError::TotalOutOfRange
        | TransactionsServiceError::InvalidData => {
            StatusError::unprocessable_entity().brief("Invalid transaction payload")
        }
        TransactionsServiceError::Sql(source) => {
            error!("transactions storage failure: {source}");

            StatusError::internal_server_error()
        }
        TransactionsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}
