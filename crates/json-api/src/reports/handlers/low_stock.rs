//! Low Stock Report Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::reports::records::LowStockProduct;

use crate::{extensions::*, state::State};

/// Product at or below the low-stock threshold
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LowStockItem {
    /// The product id
    pub id: Uuid,

    /// The product name
    pub name: String,

    /// Units currently in stock
    pub stock: u64,
}

impl From<LowStockProduct> for LowStockItem {
    fn from(product: LowStockProduct) -> Self {
        LowStockItem {
            id: product.uuid.into(),
            name: product.name,
            stock: product.stock,
        }
    }
}

/// Low-stock report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LowStockResponse {
    /// The threshold used to build the report
    pub low_stock_threshold: u64,

    /// Products at or below the threshold
    pub items: Vec<LowStockItem>,
}

/// Low Stock Handler
///
/// Defaults to a threshold of 10 when no `threshold` query parameter is
/// given.
#[endpoint(tags("reports"), summary = "Low Stock Products")]
pub(crate) async fn handler(
    threshold: QueryParam<u64, false>,
    depot: &mut Depot,
) -> Result<Json<LowStockResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let threshold = threshold.into_inner().unwrap_or(10);

    let report = state
        .reports
        .low_stock_products(threshold)
        .await
        .or_500("failed to compute low stock products")?;

    Ok(Json(LowStockResponse {
        low_stock_threshold: report.threshold,
        items: report.products.into_iter().map(Into::into).collect(),
    }))
}
