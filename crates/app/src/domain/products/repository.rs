//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{to_bigint, try_get_u64},
    domain::products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        records::{ProductRecord, ProductUuid},
    },
};

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(to_bigint(product.price, "price")?)
            .bind(to_bigint(product.stock, "stock")?)
            .bind(&product.category)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let page = filter.page.max(1);
        let limit = filter.limit.max(1);
        let offset = i64::from(page - 1) * i64::from(limit);

        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.category.as_deref())
            .bind(filter.name_like.as_deref())
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        let price = update.price.map(|value| to_bigint(value, "price")).transpose()?;
        let stock = update.stock.map(|value| to_bigint(value, "stock")).transpose()?;

        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name.as_deref())
            .bind(price)
            .bind(stock)
            .bind(update.category.as_deref())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: try_get_u64(row, "price")?,
            stock: try_get_u64(row, "stock")?,
            category: row.try_get("category")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
