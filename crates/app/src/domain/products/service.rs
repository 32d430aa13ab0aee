//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    audit::AuditLog,
    database::Db,
    domain::products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    audit: AuditLog,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db, audit: AuditLog) -> Self {
        Self {
            db,
            audit,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        // Validation happens before any store access.
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        self.audit
            .record(format!(
                "ADD PRODUCT {} {} price:{} stock:{}",
                created.uuid, created.name, created.price, created.stock
            ))
            .await;

        Ok(created)
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if update.is_empty() {
            return Err(ProductsServiceError::NoFieldsToUpdate);
        }

        // Updates re-enforce the creation invariants: a name cannot be
        // blanked out, and price/stock stay non-negative by type.
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_product(&mut tx, product, &update).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Registers a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Lists one page of products matching the filter.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Applies the supplied fields to an existing product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn widget(name: &str, category: &str) -> NewProduct {
        NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            price: 250,
            stock: 10,
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn create_product_returns_created_row() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let created = ctx
            .products
            .create_product(NewProduct {
                uuid,
                name: "Arabica beans".to_string(),
                price: 1250,
                stock: 40,
                category: "coffee".to_string(),
            })
            .await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.name, "Arabica beans");
        assert_eq!(created.price, 1250);
        assert_eq!(created.stock, 40);
        assert_eq!(created.category, "coffee");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_empty_name_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.products.create_product(widget("  ", "coffee")).await;

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let product = widget("Grinder", "equipment");

        ctx.products.create_product(product.clone()).await?;

        let result = ctx.products.create_product(product).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_writes_audit_line() -> TestResult {
        let ctx = TestContext::new().await;
        let product = widget("Kettle", "equipment");
        let uuid = product.uuid;

        ctx.products.create_product(product).await?;

        let audit = ctx.audit_contents().await;

        assert!(
            audit.contains(&format!("ADD PRODUCT {uuid} Kettle price:250 stock:10")),
            "audit log missing product line: {audit}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_pages_partition_the_set() -> TestResult {
        let ctx = TestContext::new().await;

        let mut uuids = Vec::new();
        for n in 0..5 {
            let created = ctx
                .products
                .create_product(widget(&format!("Widget {n}"), "widgets"))
                .await?;
            uuids.push(created.uuid);
        }

        let page = |page| ProductFilter {
            page,
            limit: 2,
            category: Some("widgets".to_string()),
            name_like: None,
        };

        let first = ctx.products.list_products(page(1)).await?;
        let second = ctx.products.list_products(page(2)).await?;
        let third = ctx.products.list_products(page(3)).await?;

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(third.len(), 1);

        let mut seen: Vec<ProductUuid> = first
            .iter()
            .chain(&second)
            .chain(&third)
            .map(|p| p.uuid)
            .collect();
        seen.sort();
        seen.dedup();

        assert_eq!(seen.len(), 5, "pages must be disjoint and cover the set");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_combines_filters_with_and_semantics() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(widget("Dark roast", "coffee")).await?;
        ctx.products.create_product(widget("Light roast", "coffee")).await?;
        ctx.products.create_product(widget("Dark chocolate", "snacks")).await?;

        let products = ctx
            .products
            .list_products(ProductFilter {
                category: Some("coffee".to_string()),
                name_like: Some("Dark".to_string()),
                ..ProductFilter::default()
            })
            .await?;

        assert_eq!(products.len(), 1, "filters combine with AND");
        assert_eq!(products[0].name, "Dark roast");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_coerces_page_and_limit_to_at_least_one() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(widget("Only one", "misc")).await?;

        let products = ctx
            .products
            .list_products(ProductFilter {
                page: 0,
                limit: 0,
                category: None,
                name_like: None,
            })
            .await?;

        assert_eq!(products.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_applies_only_supplied_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(widget("Scale", "equipment")).await?;

        let updated = ctx
            .products
            .update_product(
                created.uuid,
                ProductUpdate {
                    price: Some(999),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.price, 999);
        assert_eq!(updated.name, "Scale");
        assert_eq!(updated.stock, created.stock);
        assert_eq!(updated.category, "equipment");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_without_fields_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(widget("Tamper", "equipment")).await?;

        let result = ctx
            .products
            .update_product(created.uuid, ProductUpdate::default())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NoFieldsToUpdate)),
            "expected NoFieldsToUpdate, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_empty_name_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(widget("Dripper", "equipment")).await?;

        let result = ctx
            .products
            .update_product(
                created.uuid,
                ProductUpdate {
                    name: Some(String::new()),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                ProductUuid::new(),
                ProductUpdate {
                    price: Some(100),
                    ..ProductUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
