use std::path::Path;

use chrono::{Duration, NaiveDateTime};
use plotters::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::report::ReportError;
use crate::store::{CountrySales, DailySales};

const CHART_SIZE: (u32, u32) = (1000, 600);

/// Renders the daily sales series as a line chart with point markers.
///
/// The rows are expected in ascending date order, as the daily sales query
/// returns them.
pub fn render_daily_sales(rows: &[DailySales], output: &Path) -> Result<(), ReportError> {
    let points: Vec<(NaiveDateTime, f64)> = rows
        .iter()
        .map(|row| (row.invoice_date, to_f64(row.daily_sales)))
        .collect();

    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => return Err(ReportError::Render("No data points to plot".to_string()))
    };

    // A single-point series would otherwise produce an empty axis range.
    let pad = Duration::hours(12);
    let x_range = (first - pad)..(last + pad);
    let y_max = axis_ceiling(points.iter().map(|(_, value)| *value));

    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily Sales Over Time", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(RangedDateTime::from(x_range), 0f64..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Total Sales ($)")
        .x_labels(10)
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(LineSeries::new(points.clone(), &BLUE))
        .map_err(render_error)?
        .label("Daily Sales")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &BLUE));

    chart
        .draw_series(points.iter().map(|point| Circle::new(*point, 3, BLUE.filled())))
        .map_err(render_error)?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;

    Ok(())
}

/// Renders per-country totals as a bar chart, highest first.
///
/// The rows are expected in descending total order, as the country sales
/// query returns them.
pub fn render_sales_by_country(rows: &[CountrySales], output: &Path) -> Result<(), ReportError> {
    if rows.is_empty() {
        return Err(ReportError::Render("No data points to plot".to_string()));
    }

    let y_max = axis_ceiling(rows.iter().map(|row| to_f64(row.total_sales)));

    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Total Sales by Country", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(96)
        .y_label_area_size(72)
        .build_cartesian_2d((0..rows.len()).into_segmented(), 0f64..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Country")
        .y_desc("Total Sales ($)")
        .x_labels(rows.len().min(30))
        .x_label_formatter(&|segment| country_label(rows, segment))
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(index, row)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(index), 0.0), (SegmentValue::Exact(index + 1), to_f64(row.total_sales))],
                GREEN.filled()
            );
            bar.set_margin(0, 0, 4, 4);
            bar
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)?;

    Ok(())
}

fn country_label(rows: &[CountrySales], segment: &SegmentValue<usize>) -> String {
    let index = match segment {
        SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => *index,
        SegmentValue::Last => return String::new()
    };

    rows.get(index).map(|row| row.country_name.clone()).unwrap_or_default()
}

fn axis_ceiling(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0f64, f64::max) * 1.05;

    if max > 0.0 { max } else { 1.0 }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn render_error(error: impl std::fmt::Display) -> ReportError {
    ReportError::Render(error.to_string())
}
