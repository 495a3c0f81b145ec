use std::collections::HashMap;

use anyhow::Result;
use tracing::warn;

use crate::models::{ApiUser, CustomerRecord, MergedRecord, OrderRecord};

/// Result of Stage 1 enrichment
#[derive(Debug)]
pub struct EnrichResult {
    /// Orders joined with their customer fields
    pub merged: Vec<MergedRecord>,
    /// Order rows with no customer id at all
    pub missing_customer_ids: usize,
    /// Order rows whose customer id matched no fetched customer
    pub unmatched_orders: usize,
}

/// Flatten fetched users into customer rows
pub fn flatten_users(users: &[ApiUser]) -> Result<Vec<CustomerRecord>> {
    users.iter().map(ApiUser::flatten).collect()
}

/// Execute Stage 1: Enrichment
///
/// Inner-joins orders to customers on customer id. Many orders may share
/// one customer. Rows with a missing or unmatched customer id are logged
/// and dropped, which is what an inner join does with them anyway.
pub fn merge_customers(orders: &[OrderRecord], customers: &[CustomerRecord]) -> EnrichResult {
    let missing_customer_ids = orders
        .iter()
        .filter(|order| order.customer_id.is_none())
        .count();
    if missing_customer_ids > 0 {
        warn!(
            "{} order rows have a missing customer id and will not match in the merge",
            missing_customer_ids
        );
    }

    let index: HashMap<i64, &CustomerRecord> = customers
        .iter()
        .map(|customer| (customer.customer_id, customer))
        .collect();

    let mut merged = Vec::new();
    let mut unmatched_orders = 0;
    for order in orders {
        let Some(customer_id) = order.customer_id else {
            continue;
        };
        match index.get(&customer_id) {
            Some(customer) => merged.push(MergedRecord::from_parts(order, customer)),
            None => unmatched_orders += 1,
        }
    }

    if unmatched_orders > 0 {
        warn!(
            "{} order rows reference customer ids absent from the fetched list",
            unmatched_orders
        );
    }

    EnrichResult {
        merged,
        missing_customer_ids,
        unmatched_orders,
    }
}
