//! Report Handlers

pub(crate) mod inventory;
pub(crate) mod low_stock;
pub(crate) mod sales_per_category;
pub(crate) mod sales_per_month;
pub(crate) mod top_products;
