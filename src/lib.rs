pub mod api;
pub mod charts;
pub mod io;
pub mod models;
pub mod stages;

pub use api::{DEFAULT_ENDPOINT, UsersApiConfig, UsersClient};
pub use io::{read_orders_file, read_report_dir, read_weather_file, write_records};
pub use models::{ApiUser, CustomerRecord, MergedRecord, OrderRecord, SalesReport, WeatherRecord};
pub use stages::{
    RenderConfig, aggregate, clean_orders, execute_render, flatten_users, merge_customers,
    render_charts,
};
