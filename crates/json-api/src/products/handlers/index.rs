//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::products::{data::ProductFilter, records::ProductRecord};

use crate::{extensions::*, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// The product name
    pub name: String,

    /// The price of the product in minor units
    pub price: u64,

    /// Units currently in stock
    pub stock: u64,

    /// The product category
    pub category: String,

    /// The date and time the product was created
    pub created_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            price: product.price,
            stock: product.stock,
            category: product.category,
            created_at: product.created_at.to_string(),
        }
    }
}

/// Product listing page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Page number (1-based)
    pub page: u32,

    /// Page size
    pub limit: u32,

    /// The products on this page
    pub data: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns one page of products, optionally filtered by exact category and
/// by a name substring.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    category: QueryParam<String, false>,
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = page.into_inner().unwrap_or(1).max(1);
    let limit = limit.into_inner().unwrap_or(20).max(1);

    let products = state
        .products
        .list_products(ProductFilter {
            page,
            limit,
            category: category.into_inner(),
            name_like: q.into_inner(),
        })
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        page,
        limit,
        data: products.into_iter().map(Into::into).collect(),
    }))
}
