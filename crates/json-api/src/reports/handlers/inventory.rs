//! Inventory Value Report Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Inventory value report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InventoryValueResponse {
    /// `Σ price × stock` over all products, in minor units
    #[serde(rename = "totalValue")]
    pub total_value: u64,
}

/// Inventory Value Handler
#[endpoint(tags("reports"), summary = "Inventory Value")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<InventoryValueResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let value = state
        .reports
        .inventory_value()
        .await
        .or_500("failed to compute inventory value")?;

    Ok(Json(InventoryValueResponse {
        total_value: value.total_value,
    }))
}
