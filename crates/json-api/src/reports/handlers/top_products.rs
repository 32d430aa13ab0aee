//! Top Products Report Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::reports::records::ProductSales;

use crate::{extensions::*, state::State};

/// Product ranked by sales volume
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSalesRow {
    /// The product id
    pub id: Uuid,

    /// The product name
    pub name: String,

    /// Sale totals for the product, in minor units
    pub total_sales: u64,
}

impl From<ProductSales> for ProductSalesRow {
    fn from(row: ProductSales) -> Self {
        ProductSalesRow {
            id: row.uuid.into(),
            name: row.name,
            total_sales: row.total_sales,
        }
    }
}

/// Top-products report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TopProductsResponse {
    /// Products ranked by sales volume, descending
    pub rows: Vec<ProductSalesRow>,
}

/// Top Products Handler
///
/// Defaults to the top 10 when no `limit` query parameter is given.
#[endpoint(tags("reports"), summary = "Top Products")]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<TopProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let limit = limit.into_inner().unwrap_or(10);

    let rows = state
        .reports
        .top_products(limit)
        .await
        .or_500("failed to compute top products")?;

    Ok(Json(TopProductsResponse {
        rows: rows.into_iter().map(Into::into).collect(),
    }))
}
