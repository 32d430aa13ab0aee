//! Transaction Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Transaction UUID
pub type TransactionUuid = TypedUuid<TransactionRecord>;

/// Customer marker type.
pub struct CustomerRecord;

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Stock-affecting transaction kind.
///
/// A purchase increases stock; a sale decreases it. Stored in canonical
/// lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Purchase,
    Sale,
}

impl TransactionKind {
    /// Canonical storage form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sale => "sale",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized transaction kind")]
pub struct UnknownTransactionKind;

impl FromStr for TransactionKind {
    type Err = UnknownTransactionKind;

    /// Accepts the canonical names plus the localized synonyms carried over
    /// from the upstream data set.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "purchase" | "pengadaan" => Ok(Self::Purchase),
            "sale" | "penjualan" => Ok(Self::Sale),
            _ => Err(UnknownTransactionKind),
        }
    }
}

/// Direction of a manual stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Increase,
    Decrease,
}

impl StockDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}

impl Display for StockDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized stock direction")]
pub struct UnknownStockDirection;

impl FromStr for StockDirection {
    type Err = UnknownStockDirection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "increase" | "tambah" => Ok(Self::Increase),
            "decrease" | "kurang" => Ok(Self::Decrease),
            _ => Err(UnknownStockDirection),
        }
    }
}

/// Transaction Record
///
/// Immutable once written; `product_price` snapshots the product price at
/// transaction time and `total` is `product_price × quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub uuid: TransactionUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub kind: TransactionKind,
    pub customer_uuid: Option<CustomerUuid>,
    pub product_price: u64,
    pub total: u64,
    pub created_at: Timestamp,
}
