use std::collections::HashSet;

use crate::models::OrderRecord;

/// Result of Stage 0 cleaning
#[derive(Debug)]
pub struct CleanResult {
    /// Deduplicated orders, sorted by order date ascending
    pub orders: Vec<OrderRecord>,
    /// Number of duplicate rows dropped
    pub duplicates_removed: usize,
}

/// Execute Stage 0: Cleaning
///
/// Sorts the orders by order date ascending, then keeps the first
/// occurrence of each order id. Among duplicates this retains the row
/// with the minimum order date; the sort is stable, so ties keep their
/// input order. Running it again on clean data is a no-op.
pub fn clean_orders(orders: Vec<OrderRecord>) -> CleanResult {
    let input_rows = orders.len();

    let mut sorted = orders;
    sorted.sort_by_key(|order| order.order_date);

    let mut seen: HashSet<u64> = HashSet::with_capacity(sorted.len());
    sorted.retain(|order| seen.insert(order.order_id));

    CleanResult {
        duplicates_removed: input_rows - sorted.len(),
        orders: sorted,
    }
}
