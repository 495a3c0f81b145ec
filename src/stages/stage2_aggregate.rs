use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{
    CustomerSalesRow, MonthlySalesRow, ProductQuantityRow, ProductSalesRow, SalesReport,
    WeatherRecord, WeatherSalesRow,
};

/// Execute Stage 2: Aggregation
///
/// Computes the six independent group-and-reduce views over the
/// weather-augmented dataset. An empty input yields six empty views.
pub fn aggregate(records: &[WeatherRecord]) -> SalesReport {
    SalesReport {
        total_sales_per_customer: total_sales_per_customer(records),
        average_order_quantity_per_product: average_order_quantity_per_product(records),
        top_selling_products: top_selling_products(records),
        top_customers: top_customers(records),
        monthly_sales_trends: monthly_sales_trends(records),
        average_sales_per_weather: average_sales_per_weather(records),
    }
}

fn customer_totals(records: &[WeatherRecord]) -> BTreeMap<i64, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.customer_id).or_insert(0.0) += record.total_sales();
    }
    totals
}

fn product_totals(records: &[WeatherRecord]) -> BTreeMap<u64, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.product_id).or_insert(0.0) += record.total_sales();
    }
    totals
}

/// Sum of quantity x price per customer, ascending by customer id
fn total_sales_per_customer(records: &[WeatherRecord]) -> Vec<CustomerSalesRow> {
    customer_totals(records)
        .into_iter()
        .map(|(customer_id, total_sales)| CustomerSalesRow {
            customer_id,
            total_sales,
        })
        .collect()
}

/// Mean order quantity per product, ascending by product id
fn average_order_quantity_per_product(records: &[WeatherRecord]) -> Vec<ProductQuantityRow> {
    let mut sums: BTreeMap<u64, (u64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.product_id).or_insert((0, 0));
        entry.0 += record.quantity as u64;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(product_id, (sum, count))| ProductQuantityRow {
            product_id,
            quantity: sum as f64 / count as f64,
        })
        .collect()
}

/// Total sales per product, descending; ties broken by ascending id
fn top_selling_products(records: &[WeatherRecord]) -> Vec<ProductSalesRow> {
    let mut rows: Vec<ProductSalesRow> = product_totals(records)
        .into_iter()
        .map(|(product_id, total_sales)| ProductSalesRow {
            product_id,
            total_sales,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_sales
            .partial_cmp(&a.total_sales)
            .unwrap_or(Ordering::Equal)
            .then(a.product_id.cmp(&b.product_id))
    });
    rows
}

/// Total sales per customer, descending; ties broken by ascending id
fn top_customers(records: &[WeatherRecord]) -> Vec<CustomerSalesRow> {
    let mut rows = total_sales_per_customer(records);
    rows.sort_by(|a, b| {
        b.total_sales
            .partial_cmp(&a.total_sales)
            .unwrap_or(Ordering::Equal)
            .then(a.customer_id.cmp(&b.customer_id))
    });
    rows
}

/// Total sales per calendar month of the order date, ascending by month
fn monthly_sales_trends(records: &[WeatherRecord]) -> Vec<MonthlySalesRow> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.month()).or_insert(0.0) += record.total_sales();
    }
    totals
        .into_iter()
        .map(|(month, total_sales)| MonthlySalesRow { month, total_sales })
        .collect()
}

/// Mean sales amount per weather description, ascending by description
fn average_sales_per_weather(records: &[WeatherRecord]) -> Vec<WeatherSalesRow> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums
            .entry(record.weather_description.clone())
            .or_insert((0.0, 0));
        entry.0 += record.total_sales();
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(weather_description, (sum, count))| WeatherSalesRow {
            weather_description,
            total_sales: sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(
        customer_id: i64,
        product_id: u64,
        date: &str,
        quantity: u32,
        price: f64,
        weather: &str,
    ) -> WeatherRecord {
        WeatherRecord {
            order_id: 0,
            customer_id,
            product_id,
            order_date: date.parse::<NaiveDate>().unwrap(),
            quantity,
            price,
            name: String::new(),
            username: String::new(),
            email: String::new(),
            lat: 0.0,
            lng: 0.0,
            weather_description: weather.to_string(),
            weather_date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    fn sample() -> Vec<WeatherRecord> {
        vec![
            record(1, 101, "2024-01-05", 2, 5.0, "clear sky"),   // 10
            record(1, 102, "2024-01-20", 1, 20.0, "light rain"), // 20
            record(2, 101, "2024-02-03", 4, 5.0, "clear sky"),   // 20
            record(3, 103, "2024-02-14", 3, 10.0, "light rain"), // 30
        ]
    }

    #[test]
    fn test_total_sales_per_customer_conserves_grand_total() {
        let records = sample();
        let report = aggregate(&records);

        let per_customer: f64 = report
            .total_sales_per_customer
            .iter()
            .map(|row| row.total_sales)
            .sum();
        let direct: f64 = records.iter().map(|r| r.total_sales()).sum();

        assert!((per_customer - direct).abs() < 1e-9);
        assert_eq!(report.total_sales_per_customer.len(), 3);
        // Ascending by customer id
        assert_eq!(report.total_sales_per_customer[0].customer_id, 1);
        assert_eq!(report.total_sales_per_customer[0].total_sales, 30.0);
    }

    #[test]
    fn test_average_order_quantity_per_product() {
        let report = aggregate(&sample());

        let product_101 = &report.average_order_quantity_per_product[0];
        assert_eq!(product_101.product_id, 101);
        assert_eq!(product_101.quantity, 3.0); // (2 + 4) / 2
    }

    #[test]
    fn test_ranked_views_are_non_increasing() {
        let report = aggregate(&sample());

        for window in report.top_selling_products.windows(2) {
            assert!(window[0].total_sales >= window[1].total_sales);
        }
        for window in report.top_customers.windows(2) {
            assert!(window[0].total_sales >= window[1].total_sales);
        }

        // Products 101 and 103 tie at 30; the lower id ranks first
        assert_eq!(report.top_selling_products[0].product_id, 101);
        assert_eq!(report.top_selling_products[0].total_sales, 30.0);
        // Customers 1 and 3 tie at 30; the lower id ranks first
        assert_eq!(report.top_customers[0].customer_id, 1);
        assert_eq!(report.top_customers[1].customer_id, 3);
    }

    #[test]
    fn test_monthly_sales_trends() {
        let report = aggregate(&sample());

        assert_eq!(report.monthly_sales_trends.len(), 2);
        assert_eq!(report.monthly_sales_trends[0].month, "2024-01");
        assert_eq!(report.monthly_sales_trends[0].total_sales, 30.0);
        assert_eq!(report.monthly_sales_trends[1].month, "2024-02");
        assert_eq!(report.monthly_sales_trends[1].total_sales, 50.0);
    }

    #[test]
    fn test_average_sales_per_weather() {
        let report = aggregate(&sample());

        assert_eq!(report.average_sales_per_weather.len(), 2);
        let clear = &report.average_sales_per_weather[0];
        assert_eq!(clear.weather_description, "clear sky");
        assert_eq!(clear.total_sales, 15.0); // (10 + 20) / 2
        let rain = &report.average_sales_per_weather[1];
        assert_eq!(rain.weather_description, "light rain");
        assert_eq!(rain.total_sales, 25.0); // (20 + 30) / 2
    }

    #[test]
    fn test_empty_input_yields_empty_views() {
        let report = aggregate(&[]);
        assert!(report.is_empty());
    }
}
