use std::path::Path;

use anyhow::{Result, ensure};
use plotters::prelude::*;

use super::{CHART_SIZE, padded_range};

/// Render a bar chart of labeled values to a PNG file
pub fn draw_bar_chart(
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

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0..labels.len()).into_segmented(), padded_range(values))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(labels.len().min(30))
        .x_label_formatter(&|segment| segment_label(segment, labels))
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(index, &value)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(index), 0.0),
                (SegmentValue::Exact(index + 1), value),
            ],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn segment_label(segment: &SegmentValue<usize>, labels: &[String]) -> String {
    match segment {
        SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => {
            labels.get(*index).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_png_for_labeled_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.png");
        let labels = vec!["1".to_string(), "2".to_string()];

        draw_bar_chart(&path, "Total Sales", "Customer ID", "Total Sales", &labels, &[30.0, 20.0])
            .unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_renders_negative_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refunds.png");
        let labels = vec!["1".to_string(), "2".to_string()];

        draw_bar_chart(&path, "Refunds", "Customer ID", "Total Sales", &labels, &[-30.0, -10.0])
            .unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_data_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let err = draw_bar_chart(&path, "Empty", "x", "y", &[], &[]).unwrap_err();
        assert!(err.to_string().contains("no data"));
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mismatch.png");
        let labels = vec!["a".to_string()];
        let err = draw_bar_chart(&path, "Mismatch", "x", "y", &labels, &[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("mismatch"));
    }

    #[test]
    fn test_segment_label_lookup() {
        let labels = vec!["one".to_string(), "two".to_string()];
        assert_eq!(segment_label(&SegmentValue::CenterOf(1), &labels), "two");
        assert_eq!(segment_label(&SegmentValue::Exact(5), &labels), "");
        assert_eq!(segment_label(&SegmentValue::Last, &labels), "");
    }
}
