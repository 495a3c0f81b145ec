use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use salescope::{
    DEFAULT_ENDPOINT, RenderConfig, UsersApiConfig, UsersClient, aggregate, clean_orders,
    execute_render, flatten_users, merge_customers, read_orders_file, read_report_dir,
    read_weather_file, render_charts, write_records,
};

#[derive(Parser)]
#[command(name = "salescope")]
#[command(author, version, about = "Sales data cleaning, enrichment, and reporting pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove duplicate orders from a raw sales export
    Clean {
        /// Raw sales data CSV
        #[arg(short, long, default_value = "sales_data.csv")]
        input: PathBuf,

        /// Output file for the cleaned sales data
        #[arg(short, long, default_value = "sales_data_final.csv")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Fetch customer data and merge it into the cleaned orders
    Enrich {
        /// Cleaned sales data CSV
        #[arg(short, long, default_value = "sales_data_final.csv")]
        input: PathBuf,

        /// Output file for the merged data
        #[arg(short, long, default_value = "merged_data.csv")]
        output: PathBuf,

        /// Base URL of the customer list API
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute the aggregate views and render their charts
    Report {
        /// Weather-augmented merged dataset CSV
        #[arg(short, long, default_value = "merged_sales_data_with_weather.csv")]
        input: PathBuf,

        /// Directory for the aggregate view CSVs
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Directory for the rendered charts
        #[arg(long, default_value = "charts")]
        charts_dir: PathBuf,

        /// Row cap for the ranked views' charts
        #[arg(long, default_value = "10")]
        top: usize,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Re-render charts from previously saved aggregate view CSVs
    Charts {
        /// Directory holding the aggregate view CSVs
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Directory for the rendered charts
        #[arg(long, default_value = "charts")]
        charts_dir: PathBuf,

        /// Row cap for the ranked views' charts
        #[arg(long, default_value = "10")]
        top: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run clean, enrich, and report with the default file names
    Run {
        /// Base URL of the customer list API
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            run_clean(&input, &output)
        }
        Commands::Enrich {
            input,
            output,
            endpoint,
            verbose,
        } => {
            setup_logging(verbose);
            run_enrich(&input, &output, &endpoint).await
        }
        Commands::Report {
            input,
            out_dir,
            charts_dir,
            top,
            no_charts,
            verbose,
        } => {
            setup_logging(verbose);
            run_report(&input, &out_dir, &charts_dir, top, !no_charts)
        }
        Commands::Charts {
            out_dir,
            charts_dir,
            top,
            verbose,
        } => {
            setup_logging(verbose);
            run_charts(&out_dir, &charts_dir, top)
        }
        Commands::Run { endpoint, verbose } => {
            setup_logging(verbose);
            run_clean(Path::new("sales_data.csv"), Path::new("sales_data_final.csv"))?;
            run_enrich(
                Path::new("sales_data_final.csv"),
                Path::new("merged_data.csv"),
                &endpoint,
            )
            .await?;
            run_report(
                Path::new("merged_sales_data_with_weather.csv"),
                Path::new("."),
                Path::new("charts"),
                10,
                true,
            )
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_clean(input: &Path, output: &Path) -> Result<()> {
    info!("Loading orders from {:?}", input);
    let orders = read_orders_file(input).context("Failed to read sales data")?;
    info!("Loaded {} order rows", orders.len());

    let result = clean_orders(orders);
    info!(
        "Removed {} duplicate orders, {} rows remain",
        result.duplicates_removed,
        result.orders.len()
    );

    write_records(output, &result.orders)?;
    info!("Cleaned sales data written to {:?}", output);
    Ok(())
}

async fn run_enrich(input: &Path, output: &Path, endpoint: &str) -> Result<()> {
    info!("Loading cleaned orders from {:?}", input);
    let orders = read_orders_file(input).context("Failed to read cleaned sales data")?;
    info!("Loaded {} order rows", orders.len());

    info!("Fetching customer data from {}", endpoint);
    let client = UsersClient::new(UsersApiConfig::new(endpoint));
    let users = client.fetch_users().await?;
    info!("Fetched {} users", users.len());

    let customers = flatten_users(&users)?;
    let result = merge_customers(&orders, &customers);
    info!(
        "Merged {} rows ({} unmatched, {} missing customer ids)",
        result.merged.len(),
        result.unmatched_orders,
        result.missing_customer_ids
    );

    write_records(output, &result.merged)?;
    info!("Merged data written to {:?}", output);
    Ok(())
}

fn run_report(
    input: &Path,
    out_dir: &Path,
    charts_dir: &Path,
    top: usize,
    charts: bool,
) -> Result<()> {
    info!("Loading weather-augmented dataset from {:?}", input);
    let records =
        read_weather_file(input).context("Failed to read weather-augmented sales data")?;
    info!("Loaded {} rows", records.len());

    let report = aggregate(&records);
    let config = RenderConfig {
        top_n: top,
        render_charts: charts,
        ..Default::default()
    };
    let result = execute_render(&report, out_dir, charts_dir, &config)?;
    info!(
        "Complete: {} views written, {} charts rendered",
        result.csv_paths.len(),
        result.chart_paths.len()
    );
    Ok(())
}

fn run_charts(out_dir: &Path, charts_dir: &Path, top: usize) -> Result<()> {
    info!("Loading aggregate views from {:?}", out_dir);
    let report = read_report_dir(out_dir).context("Failed to read aggregate views")?;

    let paths = render_charts(&report, charts_dir, top)?;
    info!(
        "Complete: {} charts rendered to {:?}",
        paths.len(),
        charts_dir
    );
    Ok(())
}
