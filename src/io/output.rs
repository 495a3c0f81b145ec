use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Write serde records to a CSV file with a header row
pub fn write_records<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write record to {:?}", path))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::io::input::read_orders_file;
    use crate::models::OrderRecord;

    #[test]
    fn test_orders_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");

        let orders = vec![
            OrderRecord {
                order_id: 1,
                customer_id: Some(3),
                product_id: 101,
                order_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                quantity: 2,
                price: 5.0,
            },
            OrderRecord {
                order_id: 2,
                customer_id: None,
                product_id: 102,
                order_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                quantity: 1,
                price: 9.5,
            },
        ];

        write_records(&path, &orders).unwrap();
        let reloaded = read_orders_file(&path).unwrap();

        assert_eq!(reloaded, orders);
    }
}
