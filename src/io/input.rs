use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{OrderRecord, SalesReport, WeatherRecord};

/// Read raw or cleaned sales orders from a CSV file
pub fn read_orders_file(path: &Path) -> Result<Vec<OrderRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    read_orders(file)
}

/// Read sales orders from any CSV source
pub fn read_orders(reader: impl Read) -> Result<Vec<OrderRecord>> {
    read_records(reader).context("Failed to parse sales data CSV")
}

/// Read the weather-augmented merged dataset from a CSV file
pub fn read_weather_file(path: &Path) -> Result<Vec<WeatherRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    read_records(file).context("Failed to parse weather-augmented CSV")
}

/// Read a previously saved aggregate view from a CSV file
pub fn read_view_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    read_records(file).with_context(|| format!("Failed to parse aggregate view: {:?}", path))
}

/// Reload all six aggregate views from their canonical files in a directory
pub fn read_report_dir(dir: &Path) -> Result<SalesReport> {
    Ok(SalesReport {
        total_sales_per_customer: read_view_file(&dir.join(super::TOTAL_SALES_PER_CUSTOMER_CSV))?,
        average_order_quantity_per_product: read_view_file(
            &dir.join(super::AVERAGE_ORDER_QUANTITY_PER_PRODUCT_CSV),
        )?,
        top_selling_products: read_view_file(&dir.join(super::TOP_SELLING_PRODUCTS_CSV))?,
        top_customers: read_view_file(&dir.join(super::TOP_CUSTOMERS_CSV))?,
        monthly_sales_trends: read_view_file(&dir.join(super::MONTHLY_SALES_TRENDS_CSV))?,
        average_sales_per_weather: read_view_file(&dir.join(super::AVERAGE_SALES_PER_WEATHER_CSV))?,
    })
}

fn read_records<T: DeserializeOwned>(reader: impl Read) -> Result<Vec<T>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
