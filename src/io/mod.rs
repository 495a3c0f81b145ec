pub mod input;
pub mod output;

pub use input::*;
pub use output::*;

/// Canonical file names for the six aggregate views, matching the
/// original dataset layout
pub const TOTAL_SALES_PER_CUSTOMER_CSV: &str = "total_sales_per_customer.csv";
pub const AVERAGE_ORDER_QUANTITY_PER_PRODUCT_CSV: &str = "average_order_quantity_per_product.csv";
pub const TOP_SELLING_PRODUCTS_CSV: &str = "top_selling_products.csv";
pub const TOP_CUSTOMERS_CSV: &str = "top_customers.csv";
pub const MONTHLY_SALES_TRENDS_CSV: &str = "monthly_sales_trends.csv";
pub const AVERAGE_SALES_PER_WEATHER_CSV: &str = "average_sales_per_weather.csv";
