use serde::{Deserialize, Serialize};

/// Total sales for one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSalesRow {
    pub customer_id: i64,
    pub total_sales: f64,
}

/// Average order quantity for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuantityRow {
    pub product_id: u64,
    pub quantity: f64,
}

/// Total sales for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSalesRow {
    pub product_id: u64,
    pub total_sales: f64,
}

/// Total sales for one calendar month (YYYY-MM)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySalesRow {
    pub month: String,
    pub total_sales: f64,
}

/// Average sales amount for one weather description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSalesRow {
    pub weather_description: String,
    pub total_sales: f64,
}

/// The six aggregate views derived from the weather-augmented dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesReport {
    /// Sum of quantity x price per customer, ascending by customer id
    pub total_sales_per_customer: Vec<CustomerSalesRow>,
    /// Mean quantity per product, ascending by product id
    pub average_order_quantity_per_product: Vec<ProductQuantityRow>,
    /// Sum of sales per product, descending by total
    pub top_selling_products: Vec<ProductSalesRow>,
    /// Sum of sales per customer, descending by total
    pub top_customers: Vec<CustomerSalesRow>,
    /// Sum of sales per calendar month, ascending by month
    pub monthly_sales_trends: Vec<MonthlySalesRow>,
    /// Mean sales per weather description, ascending by description
    pub average_sales_per_weather: Vec<WeatherSalesRow>,
}

impl SalesReport {
    /// Whether every view is empty (i.e. the input table had no rows)
    pub fn is_empty(&self) -> bool {
        self.total_sales_per_customer.is_empty()
            && self.average_order_quantity_per_product.is_empty()
            && self.top_selling_products.is_empty()
            && self.top_customers.is_empty()
            && self.monthly_sales_trends.is_empty()
            && self.average_sales_per_weather.is_empty()
    }
}
