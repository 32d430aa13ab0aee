//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use stockroom_app::domain::{
    products::{
        MockProductsService,
        records::{ProductRecord, ProductUuid},
    },
    reports::MockReportsService,
    transactions::MockTransactionsService,
};

use crate::state::State;

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Widget".to_string(),
        price: 100,
        stock: 5,
        category: "general".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_create_product().never();
    products.expect_list_products().never();
    products.expect_update_product().never();

    products
}

fn strict_transactions_mock() -> MockTransactionsService {
    let mut transactions = MockTransactionsService::new();

    transactions.expect_record_transaction().never();
    transactions.expect_adjust_stock().never();

    transactions
}

fn strict_reports_mock() -> MockReportsService {
    let mut reports = MockReportsService::new();

    reports.expect_inventory_value().never();
    reports.expect_product_history().never();
    reports.expect_sales_per_month().never();
    reports.expect_sales_per_category().never();
    reports.expect_low_stock_products().never();
    reports.expect_top_products().never();

    reports
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(products),
        Arc::new(strict_transactions_mock()),
        Arc::new(strict_reports_mock()),
    ))
}

pub(crate) fn state_with_transactions(transactions: MockTransactionsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_products_mock()),
        Arc::new(transactions),
        Arc::new(strict_reports_mock()),
    ))
}

pub(crate) fn state_with_reports(reports: MockReportsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_products_mock()),
        Arc::new(strict_transactions_mock()),
        Arc::new(reports),
    ))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn transactions_service(
    transactions: MockTransactionsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_transactions(transactions)))
            .push(route),
    )
}

pub(crate) fn reports_service(reports: MockReportsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_reports(reports)))
            .push(route),
    )
}
