use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::charts::{draw_bar_chart, draw_line_chart};
use crate::io;
use crate::models::SalesReport;

/// Configuration for Stage 3 rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Row cap for the ranked views' charts
    pub top_n: usize,
    /// Whether to render charts at all
    pub render_charts: bool,
    /// Rows printed per view in the console preview
    pub preview_rows: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            render_charts: true,
            preview_rows: 5,
        }
    }
}

/// Result of Stage 3 rendering
#[derive(Debug)]
pub struct RenderResult {
    /// The six aggregate view CSVs
    pub csv_paths: Vec<PathBuf>,
    /// Charts actually rendered (empty views are skipped)
    pub chart_paths: Vec<PathBuf>,
}

/// Execute Stage 3: Rendering
///
/// Prints a preview of each view, persists each view to its own CSV under
/// `out_dir`, and renders each as a chart under `charts_dir`.
pub fn execute_render(
    report: &SalesReport,
    out_dir: &Path,
    charts_dir: &Path,
    config: &RenderConfig,
) -> Result<RenderResult> {
    print_preview(report, config.preview_rows);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let mut csv_paths = Vec::new();
    write_view(
        out_dir,
        io::TOTAL_SALES_PER_CUSTOMER_CSV,
        &report.total_sales_per_customer,
        &mut csv_paths,
    )?;
    write_view(
        out_dir,
        io::AVERAGE_ORDER_QUANTITY_PER_PRODUCT_CSV,
        &report.average_order_quantity_per_product,
        &mut csv_paths,
    )?;
    write_view(
        out_dir,
        io::TOP_SELLING_PRODUCTS_CSV,
        &report.top_selling_products,
        &mut csv_paths,
    )?;
    write_view(
        out_dir,
        io::TOP_CUSTOMERS_CSV,
        &report.top_customers,
        &mut csv_paths,
    )?;
    write_view(
        out_dir,
        io::MONTHLY_SALES_TRENDS_CSV,
        &report.monthly_sales_trends,
        &mut csv_paths,
    )?;
    write_view(
        out_dir,
        io::AVERAGE_SALES_PER_WEATHER_CSV,
        &report.average_sales_per_weather,
        &mut csv_paths,
    )?;

    let chart_paths = if config.render_charts {
        render_charts(report, charts_dir, config.top_n)?
    } else {
        Vec::new()
    };

    Ok(RenderResult {
        csv_paths,
        chart_paths,
    })
}

fn write_view<T: serde::Serialize>(
    out_dir: &Path,
    name: &str,
    rows: &[T],
    paths: &mut Vec<PathBuf>,
) -> Result<()> {
    let path = out_dir.join(name);
    io::write_records(&path, rows)?;
    info!("View written to {:?}", path);
    paths.push(path);
    Ok(())
}

/// Render all six charts for a report; empty views are skipped with a warning
pub fn render_charts(
    report: &SalesReport,
    charts_dir: &Path,
    top_n: usize,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(charts_dir)
        .with_context(|| format!("Failed to create charts directory: {:?}", charts_dir))?;

    let mut paths = Vec::new();

    let customer_labels: Vec<String> = report
        .total_sales_per_customer
        .iter()
        .map(|row| row.customer_id.to_string())
        .collect();
    let customer_values: Vec<f64> = report
        .total_sales_per_customer
        .iter()
        .map(|row| row.total_sales)
        .collect();
    render_bar(
        &mut paths,
        &charts_dir.join("total_sales_per_customer.png"),
        "Total Sales per Customer",
        "Customer ID",
        "Total Sales",
        &customer_labels,
        &customer_values,
    )?;

    let quantity_labels: Vec<String> = report
        .average_order_quantity_per_product
        .iter()
        .map(|row| row.product_id.to_string())
        .collect();
    let quantity_values: Vec<f64> = report
        .average_order_quantity_per_product
        .iter()
        .map(|row| row.quantity)
        .collect();
    render_bar(
        &mut paths,
        &charts_dir.join("average_order_quantity_per_product.png"),
        "Average Order Quantity per Product",
        "Product ID",
        "Average Quantity",
        &quantity_labels,
        &quantity_values,
    )?;

    let top_products = &report.top_selling_products[..report.top_selling_products.len().min(top_n)];
    let product_labels: Vec<String> = top_products
        .iter()
        .map(|row| row.product_id.to_string())
        .collect();
    let product_values: Vec<f64> = top_products.iter().map(|row| row.total_sales).collect();
    render_bar(
        &mut paths,
        &charts_dir.join("top_selling_products.png"),
        "Top Selling Products",
        "Product ID",
        "Total Sales",
        &product_labels,
        &product_values,
    )?;

    let top_customers = &report.top_customers[..report.top_customers.len().min(top_n)];
    let top_customer_labels: Vec<String> = top_customers
        .iter()
        .map(|row| row.customer_id.to_string())
        .collect();
    let top_customer_values: Vec<f64> = top_customers.iter().map(|row| row.total_sales).collect();
    render_bar(
        &mut paths,
        &charts_dir.join("top_customers.png"),
        "Top Customers",
        "Customer ID",
        "Total Sales",
        &top_customer_labels,
        &top_customer_values,
    )?;

    let month_labels: Vec<String> = report
        .monthly_sales_trends
        .iter()
        .map(|row| row.month.clone())
        .collect();
    let month_values: Vec<f64> = report
        .monthly_sales_trends
        .iter()
        .map(|row| row.total_sales)
        .collect();
    if month_labels.is_empty() {
        warn!("Skipping chart {:?}: view is empty", "Monthly Sales Trends");
    } else {
        let path = charts_dir.join("monthly_sales_trends.png");
        draw_line_chart(
            &path,
            "Monthly Sales Trends",
            "Month",
            "Total Sales",
            &month_labels,
            &month_values,
        )?;
        info!("Chart written to {:?}", path);
        paths.push(path);
    }

    let weather_labels: Vec<String> = report
        .average_sales_per_weather
        .iter()
        .map(|row| row.weather_description.clone())
        .collect();
    let weather_values: Vec<f64> = report
        .average_sales_per_weather
        .iter()
        .map(|row| row.total_sales)
        .collect();
    render_bar(
        &mut paths,
        &charts_dir.join("average_sales_per_weather.png"),
        "Average Sales per Weather Condition",
        "Weather Description",
        "Average Sales",
        &weather_labels,
        &weather_values,
    )?;

    Ok(paths)
}

fn render_bar(
    paths: &mut Vec<PathBuf>,
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
) -> Result<()> {
    if labels.is_empty() {
        warn!("Skipping chart {:?}: view is empty", title);
        return Ok(());
    }
    draw_bar_chart(path, title, x_desc, y_desc, labels, values)?;
    info!("Chart written to {:?}", path);
    paths.push(path.to_path_buf());
    Ok(())
}

fn print_preview(report: &SalesReport, rows: usize) {
    println!("Total Sales per Customer:");
    for row in report.total_sales_per_customer.iter().take(rows) {
        println!("  {:>12}  {:>12.2}", row.customer_id, row.total_sales);
    }

    println!("\nAverage Order Quantity per Product:");
    for row in report.average_order_quantity_per_product.iter().take(rows) {
        println!("  {:>12}  {:>12.2}", row.product_id, row.quantity);
    }

    println!("\nTop Selling Products:");
    for row in report.top_selling_products.iter().take(rows) {
        println!("  {:>12}  {:>12.2}", row.product_id, row.total_sales);
    }

    println!("\nTop Customers:");
    for row in report.top_customers.iter().take(rows) {
        println!("  {:>12}  {:>12.2}", row.customer_id, row.total_sales);
    }

    println!("\nMonthly Sales Trends:");
    for row in report.monthly_sales_trends.iter().take(rows) {
        println!("  {:>12}  {:>12.2}", row.month, row.total_sales);
    }

    println!("\nAverage Sales per Weather Condition:");
    for row in report.average_sales_per_weather.iter().take(rows) {
        println!("  {:>20}  {:>12.2}", row.weather_description, row.total_sales);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CustomerSalesRow, MonthlySalesRow, ProductQuantityRow, ProductSalesRow, WeatherSalesRow,
    };

    fn sample_report() -> SalesReport {
        SalesReport {
            total_sales_per_customer: vec![
                CustomerSalesRow {
                    customer_id: 1,
                    total_sales: 30.0,
                },
                CustomerSalesRow {
                    customer_id: 2,
                    total_sales: 20.0,
                },
            ],
            average_order_quantity_per_product: vec![ProductQuantityRow {
                product_id: 101,
                quantity: 3.0,
            }],
            top_selling_products: vec![ProductSalesRow {
                product_id: 101,
                total_sales: 50.0,
            }],
            top_customers: vec![CustomerSalesRow {
                customer_id: 1,
                total_sales: 30.0,
            }],
            monthly_sales_trends: vec![MonthlySalesRow {
                month: "2024-01".to_string(),
                total_sales: 50.0,
            }],
            average_sales_per_weather: vec![WeatherSalesRow {
                weather_description: "clear sky".to_string(),
                total_sales: 25.0,
            }],
        }
    }

    #[test]
    fn test_views_written_and_reloadable() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        let config = RenderConfig {
            render_charts: false,
            ..Default::default()
        };
        let result =
            execute_render(&report, dir.path(), &dir.path().join("charts"), &config).unwrap();

        assert_eq!(result.csv_paths.len(), 6);
        assert!(result.chart_paths.is_empty());
        for path in &result.csv_paths {
            assert!(path.exists());
        }

        let reloaded = crate::io::read_report_dir(dir.path()).unwrap();
        assert_eq!(reloaded, report);
    }

    #[test]
    fn test_all_charts_rendered_for_populated_report() {
        let dir = tempfile::tempdir().unwrap();
        let charts_dir = dir.path().join("charts");

        let paths = render_charts(&sample_report(), &charts_dir, 10).unwrap();

        assert_eq!(paths.len(), 6);
        for path in &paths {
            assert!(path.exists());
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_empty_report_renders_no_charts() {
        let dir = tempfile::tempdir().unwrap();
        let charts_dir = dir.path().join("charts");

        let paths = render_charts(&SalesReport::default(), &charts_dir, 10).unwrap();

        assert!(paths.is_empty());
        assert!(charts_dir.exists());
    }
}
