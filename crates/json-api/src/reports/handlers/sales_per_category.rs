//! Sales-per-Category Report Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::reports::records::CategorySales;

use crate::{extensions::*, state::State};

/// Sales total for one product category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategorySalesRow {
    /// The product category
    pub category: String,

    /// Sale totals for the category, in minor units
    pub total_sales: u64,
}

impl From<CategorySales> for CategorySalesRow {
    fn from(row: CategorySales) -> Self {
        CategorySalesRow {
            category: row.category,
            total_sales: row.total_sales,
        }
    }
}

/// Sales-per-category report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesPerCategoryResponse {
    /// One row per category with at least one sale in range
    pub rows: Vec<CategorySalesRow>,
}

fn parse_bound(value: Option<String>, name: &str) -> Result<Option<Timestamp>, StatusError> {
    value
        .map(|raw| raw.parse::<Timestamp>())
        .transpose()
        .map_err(|_invalid| {
            StatusError::bad_request().brief(format!("could not parse \"{name}\" query parameter"))
        })
}

/// Sales-per-Category Handler
///
/// `from`/`to` bound the transaction `created_at` range inclusively, as
/// RFC 3339 timestamps.
#[endpoint(tags("reports"), summary = "Sales per Category")]
pub(crate) async fn handler(
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SalesPerCategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let from = parse_bound(from.into_inner(), "from")?;
    let to = parse_bound(to.into_inner(), "to")?;

    let rows = state
        .reports
        .sales_per_category(from, to)
        .await
        .or_500("failed to compute sales per category")?;

    Ok(Json(SalesPerCategoryResponse {
        rows: rows.into_iter().map(Into::into).collect(),
    }))
}
