//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
///
/// `price` is in minor units; `stock` is a unit count. Both are non-negative
/// by construction here and by CHECK constraint in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u64,
    pub category: String,
    pub created_at: Timestamp,
}
