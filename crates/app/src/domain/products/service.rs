//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::{PgProductsRepository, ProductColumns},
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products_by_category(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(product_id = tracing::field::Empty),
        err
    )]
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let columns = ProductColumns {
            name: &product.name,
            price: i64::try_from(product.price)?,
            category: &product.category,
        };

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, columns).await?;

        tx.commit().await?;

        Span::current().record("product_id", created.id.into_i64());

        info!(product_id = %created.id, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(product_id = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let columns = ProductColumns {
            name: &update.name,
            price: i64::try_from(update.price)?,
            category: &update.category,
        };

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, columns)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self),
        fields(product_id = %product),
        err
    )]
    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let deleted = self.repository.delete_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves the products in one category.
    async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites a product.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;

    /// Deletes a product and returns the removed row.
    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;
}
