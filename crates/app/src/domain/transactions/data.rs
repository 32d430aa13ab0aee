//! Transactions Data

use crate::domain::{
    products::records::ProductUuid,
    transactions::records::{CustomerUuid, TransactionKind, TransactionUuid},
};

/// New Transaction Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub uuid: TransactionUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub kind: TransactionKind,
    pub customer_uuid: Option<CustomerUuid>,
}

/// Committed transaction summary returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTransaction {
    pub uuid: TransactionUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub kind: TransactionKind,
    pub total: u64,
}
