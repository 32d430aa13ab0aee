//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::unprocessable_entity().brief("Invalid product payload")
        }
        ProductsServiceError::NoFieldsToUpdate => {
            StatusError::bad_request().brief("No fields to update")
        }
        ProductsServiceError::Sql(source) => {
            error!("products storage failure: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}
