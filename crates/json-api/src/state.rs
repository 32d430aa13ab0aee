//! State

use std::sync::Arc;

use stockroom_app::{
    context::AppContext,
    domain::{
        products::ProductsService, reports::ReportsService, transactions::TransactionsService,
    },
};

/// Shared handler state: the service layer behind trait-object seams so
/// handler tests can substitute mocks.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) transactions: Arc<dyn TransactionsService>,
    pub(crate) reports: Arc<dyn ReportsService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        products: Arc<dyn ProductsService>,
        transactions: Arc<dyn TransactionsService>,
        reports: Arc<dyn ReportsService>,
    ) -> Self {
        Self {
            products,
            transactions,
            reports,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.products, app.transactions, app.reports))
    }
}
