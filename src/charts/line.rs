use std::path::Path;

use anyhow::{Result, ensure};
use plotters::prelude::*;

use super::{CHART_SIZE, padded_range};

/// Render a line chart of labeled values (one point per label) to a PNG file
pub fn draw_line_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
) -> Result<()> {
    ensure!(!labels.is_empty(), "no data to plot for {:?}", title);
    ensure!(
        labels.len() == values.len(),
        "label/value length mismatch for {:?}",
        title
    );

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = (labels.len() - 1).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(0..x_max, padded_range(values))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(labels.len().min(24))
        .x_label_formatter(&|index: &usize| labels.get(*index).cloned().unwrap_or_default())
        .draw()?;

    let points: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
    chart.draw_series(LineSeries::new(points.clone(), &RED))?;
    chart.draw_series(
        points
            .into_iter()
            .map(|point| Circle::new(point, 4, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}
