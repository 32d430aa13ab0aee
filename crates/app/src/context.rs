//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    audit::AuditLog,
    database::{self, Db},
    domain::{
        products::{PgProductsService, ProductsService},
        reports::{PgReportsService, ReportsService},
        transactions::{PgTransactionsService, TransactionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub transactions: Arc<dyn TransactionsService>,
    pub reports: Arc<dyn ReportsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// The connection pool is created here and handed to each service at
    /// construction; nothing holds global state.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, audit: AuditLog) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone(), audit.clone())),
            transactions: Arc::new(PgTransactionsService::new(db.clone(), audit)),
            reports: Arc::new(PgReportsService::new(db)),
        })
    }
}
