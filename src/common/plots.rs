//! Plotting infrastructure for side-by-side bar charts
//!
//! This module renders one or more [`BarPanel`]s into a single PNG figure using the
//! [`plotters`] crate. Panels are laid out horizontally in input order. The pixel size of
//! the figure and all font sizes are derived from [`FigureSettings`], so a figure described
//! as 8x3 inches at 300 DPI is rendered at 2400x900 pixels.

use super::format::format_millions;
use crate::scenario::FigureSettings;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// Panel title size, in points
const TITLE_POINTS: f64 = 9.0;

/// Axis description size, in points
const AXIS_LABEL_POINTS: f64 = 8.0;

/// Tick label size, in points
const TICK_LABEL_POINTS: f64 = 8.0;

/// Whitespace around the whole figure, in points
const FIGURE_PADDING_POINTS: f64 = 4.0;

/// Whitespace around each panel, in points
const PANEL_MARGIN_POINTS: f64 = 6.0;

/// Half of a bar's width, in category units (each category is 1.0 wide)
const BAR_HALF_WIDTH: f64 = 0.4;

/// Opacity of bar fills
const BAR_OPACITY: f64 = 0.6;

/// Opacity of gridlines
const GRID_OPACITY: f64 = 0.3;

/// Headroom added above (and below, for negative values) the tallest bar
const VALUE_PADDING: f64 = 0.05;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// How tick labels on the value axis are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFormat {
    /// Whole numbers, e.g. `47000`.
    Plain,
    /// Dollars abbreviated to millions, e.g. `$2.4M`.
    Millions,
}

impl AxisFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            AxisFormat::Plain => format!("{:.0}", value),
            AxisFormat::Millions => format_millions(value),
        }
    }
}

/// A single bar chart within a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPanel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One label per bar, drawn under the bar.
    pub categories: Vec<String>,
    /// Bar heights, in the same order as `categories`.
    pub values: Vec<f64>,
    pub color: RGBColor,
    pub y_format: AxisFormat,
}

/// Computes the value axis range for a set of bars
///
/// The range always includes zero so bars grow from the axis. Non-zero ends get 5% of the
/// span as headroom. Degenerate input (no bars, all zero, or non-finite) yields `0.0..1.0`.
pub fn value_range(values: &[f64]) -> Range<f64> {
    let min = values.iter().copied().fold(0.0, f64::min);
    let max = values.iter().copied().fold(0.0, f64::max);
    let span = max - min;

    if !span.is_finite() || span <= 0.0 {
        return 0.0..1.0;
    }

    let padding = span * VALUE_PADDING;
    let low = if min < 0.0 { min - padding } else { min };
    let high = if max > 0.0 { max + padding } else { max };
    low..high
}

/// Category axis range: one unit per bar, centred on the bar indices.
fn category_range(count: usize) -> Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

/// Label for a category axis key point, blank between bar centres.
fn category_label(categories: &[String], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }

    categories
        .get(index as usize)
        .cloned()
        .unwrap_or_default()
}

/// Creates a figure of horizontally arranged bar charts and saves it as a PNG file
///
/// # Arguments
/// * `panels` - The panels to draw, left to right
/// * `figure` - Physical size and resolution of the figure
/// * `output_path` - Path where the PNG file should be saved. Existing files are overwritten.
///
/// # Returns
/// * `Ok(())` - If the figure was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: figure inches multiplied by DPI
/// * Format: PNG
/// * Bars: 60% opacity, one colour per panel
/// * Grid: 30% opacity
/// * Margins: a few points around the panels only, similar to a tight bounding box
pub fn create_bar_figure(
    panels: &[BarPanel],
    figure: &FigureSettings,
    output_path: &Path,
) -> Result<()> {
    if panels.is_empty() {
        return Err(PlotError::InvalidData(
            "At least one panel is required".to_string(),
        ));
    }

    for panel in panels {
        if panel.categories.len() != panel.values.len() {
            return Err(PlotError::InvalidData(format!(
                "Panel '{}' has {} categories but {} values",
                panel.title,
                panel.categories.len(),
                panel.values.len()
            )));
        }
    }

    let root = BitMapBackend::new(output_path, figure.pixel_size()).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let padding = figure.points_to_pixels(FIGURE_PADDING_POINTS);
    let content = root.margin(padding, padding, padding, padding);

    for (area, panel) in content.split_evenly((1, panels.len())).iter().zip(panels) {
        draw_bar_panel(area, panel, figure)?;
    }

    // Ensure everything is properly rendered and saved
    root.present()
        .map_err(|e| PlotError::FileSave(e.to_string()))?;

    Ok(())
}

/// Draws one bar chart into its slot of the figure.
fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &BarPanel,
    figure: &FigureSettings,
) -> Result<()> {
    let title_size = figure.points_to_pixels(TITLE_POINTS);
    let axis_label_size = figure.points_to_pixels(AXIS_LABEL_POINTS);
    let tick_size = figure.points_to_pixels(TICK_LABEL_POINTS);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", title_size))
        .margin(figure.points_to_pixels(PANEL_MARGIN_POINTS))
        .x_label_area_size(tick_size * 1.5 + axis_label_size * 1.5)
        .y_label_area_size(tick_size * 4.0 + axis_label_size * 1.5)
        .build_cartesian_2d(
            category_range(panel.values.len()),
            value_range(&panel.values),
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let x_formatter = |x: &f64| category_label(&panel.categories, *x);
    let y_formatter = |y: &f64| panel.y_format.format(*y);

    chart
        .configure_mesh()
        .x_labels(panel.values.len().max(1))
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style(("sans-serif", tick_size))
        .axis_desc_style(("sans-serif", axis_label_size))
        .bold_line_style(BLACK.mix(GRID_OPACITY))
        .light_line_style(WHITE.mix(0.0))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let style = panel.color.mix(BAR_OPACITY).filled();
    chart
        .draw_series(panel.values.iter().enumerate().map(|(index, &value)| {
            let center = index as f64;
            Rectangle::new(
                [
                    (center - BAR_HALF_WIDTH, 0.0),
                    (center + BAR_HALF_WIDTH, value),
                ],
                style,
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn figure() -> FigureSettings {
        FigureSettings {
            width_inches: 8.0,
            height_inches: 3.0,
            dpi: 100,
        }
    }

    fn panel(title: &str, values: Vec<f64>) -> BarPanel {
        BarPanel {
            title: title.to_string(),
            x_label: "Years".to_string(),
            y_label: "Dollars Saved ($)".to_string(),
            categories: (0..values.len()).map(|i| i.to_string()).collect(),
            values,
            color: BLUE,
            y_format: AxisFormat::Millions,
        }
    }

    #[rstest(values, expected,
        case(vec![], 0.0..1.0),
        case(vec![0.0, 0.0], 0.0..1.0),
        case(vec![100.0, 50.0], 0.0..105.0),
        case(vec![-100.0, 0.0], -105.0..0.0),
        case(vec![-100.0, 100.0], -110.0..110.0),
        case(vec![f64::INFINITY], 0.0..1.0)
    )]
    fn computes_value_range(values: Vec<f64>, expected: Range<f64>) {
        assert_eq!(value_range(&values), expected);
    }

    #[test]
    fn category_range_centres_bars() {
        assert_eq!(category_range(3), -0.5..2.5);
        assert_eq!(category_range(0), -0.5..0.5);
    }

    #[rstest(position, expected,
        case(0.0, "1"),
        case(1.0, "5"),
        case(2.0000000001, "10"),
        case(0.5, ""),
        case(-1.0, ""),
        case(3.0, "")
    )]
    fn labels_category_key_points(position: f64, expected: &str) {
        let categories = vec!["1".to_string(), "5".to_string(), "10".to_string()];
        assert_eq!(category_label(&categories, position), expected);
    }

    #[test]
    fn axis_format_millions() {
        assert_eq!(AxisFormat::Millions.format(2_400_000.0), "$2.4M");
        assert_eq!(AxisFormat::Plain.format(47_000.0), "47000");
    }

    #[test]
    fn test_create_bar_figure_validation() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("test_plot.png");

        // Test no panels
        let result = create_bar_figure(&[], &figure(), &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Test mismatched categories
        let mut broken = panel("Broken", vec![1.0, 2.0]);
        broken.categories.pop();
        let result = create_bar_figure(&[broken], &figure(), &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
        assert!(!output_path.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_bar_figure_success() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("test_bar_figure.png");

        let panels = vec![
            panel("Hours", vec![9_400.0, 47_000.0, 94_000.0]),
            panel("Cost", vec![752_000.0, 3_760_000.0, 7_520_000.0]),
            panel("Negative", vec![-1_200.0]),
            panel("Empty", vec![]),
        ];
        let result = create_bar_figure(&panels, &figure(), &output_path);

        assert!(result.is_ok());
        assert!(output_path.exists());
    }
}
