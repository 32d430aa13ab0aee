//! Sales-per-Month Report Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::reports::records::MonthlySales;

use crate::{extensions::*, state::State};

/// Sales total for one calendar month
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MonthlySalesRow {
    /// Calendar month (1-12)
    pub month: i32,

    /// Sale totals for the month, in minor units
    pub total_sales: u64,
}

impl From<MonthlySales> for MonthlySalesRow {
    fn from(row: MonthlySales) -> Self {
        MonthlySalesRow {
            month: row.month,
            total_sales: row.total_sales,
        }
    }
}

/// Sales-per-month report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesPerMonthResponse {
    /// The year the report covers
    pub year: i16,

    /// One row per month with at least one sale
    pub rows: Vec<MonthlySalesRow>,
}

/// Sales-per-Month Handler
///
/// Defaults to the current year when no `year` query parameter is given.
#[endpoint(tags("reports"), summary = "Sales per Month")]
pub(crate) async fn handler(
    year: QueryParam<i16, false>,
    depot: &mut Depot,
) -> Result<Json<SalesPerMonthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let year = year
        .into_inner()
        .unwrap_or_else(|| jiff::Zoned::now().year());

    let rows = state
        .reports
        .sales_per_month(year)
        .await
        .or_500("failed to compute sales per month")?;

    Ok(Json(SalesPerMonthResponse {
        year,
        rows: rows.into_iter().map(Into::into).collect(),
    }))
}
