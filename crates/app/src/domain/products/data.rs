//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u64,
    pub category: String,
}

/// Product Update Data
///
/// Only the supplied fields are applied; `None` leaves the stored value
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub stock: Option<u64>,
    pub category: Option<String>,
}

impl ProductUpdate {
    /// True when no field is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category.is_none()
    }
}

/// Product listing filter.
///
/// `page` and `limit` are coerced to at least 1; `category` matches exactly
/// and `name_like` matches as a substring, combined with AND semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub page: u32,
    pub limit: u32,
    pub category: Option<String>,
    pub name_like: Option<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            category: None,
            name_like: None,
        }
    }
}
