use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CustomerRecord, OrderRecord};

/// An order row joined with its customer's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub order_id: u64,
    pub customer_id: i64,
    pub product_id: u64,
    pub order_date: NaiveDate,
    pub quantity: u32,
    pub price: f64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub lat: f64,
    pub lng: f64,
}

impl MergedRecord {
    /// Join one order with its matching customer
    pub fn from_parts(order: &OrderRecord, customer: &CustomerRecord) -> Self {
        Self {
            order_id: order.order_id,
            customer_id: customer.customer_id,
            product_id: order.product_id,
            order_date: order.order_date,
            quantity: order.quantity,
            price: order.price,
            name: customer.name.clone(),
            username: customer.username.clone(),
            email: customer.email.clone(),
            lat: customer.lat,
            lng: customer.lng,
        }
    }

    /// Sales amount for this row
    pub fn total_sales(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// A merged row augmented with weather data, as produced by the external
/// weather pipeline and read back from disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub order_id: u64,
    pub customer_id: i64,
    pub product_id: u64,
    pub order_date: NaiveDate,
    pub quantity: u32,
    pub price: f64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub lat: f64,
    pub lng: f64,
    pub weather_description: String,
    pub weather_date: NaiveDate,
}

impl WeatherRecord {
    /// Sales amount for this row
    pub fn total_sales(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Calendar month of the order date, formatted YYYY-MM
    pub fn month(&self) -> String {
        self.order_date.format("%Y-%m").to_string()
    }
}
