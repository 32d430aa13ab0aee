//! Report Records

use crate::domain::products::records::ProductUuid;

/// Total inventory value (`Σ price × stock`) across all products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryValue {
    pub total_value: u64,
}

/// Sales total for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySales {
    pub month: i32,
    pub total_sales: u64,
}

/// Sales total for one product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySales {
    pub category: String,
    pub total_sales: u64,
}

/// Product ranked by sales volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub uuid: ProductUuid,
    pub name: String,
    pub total_sales: u64,
}

/// Product at or below the low-stock threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub stock: u64,
}

/// Low-stock report annotated with the threshold used to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockReport {
    pub threshold: u64,
    pub products: Vec<LowStockProduct>,
}
