use std::{ops::Range, path::PathBuf};

use plotters::prelude::*;
use tracing::info;

use super::{ReportError, ScenarioSeries};

/// Chart layout and output settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Output PNG path.
    pub path: PathBuf,

    /// Chart title.
    pub caption: String,

    /// Horizontal axis label.
    pub x_label: String,

    /// Vertical axis label.
    pub y_label: String,

    /// Image size in pixels.
    pub size: (u32, u32),
}

impl Default for ChartConfig {
    /// A 6.4 × 4.8 in figure at 200 DPI written to `absorbed_vs_distance.png`.
    fn default() -> Self {
        Self {
            path: PathBuf::from("absorbed_vs_distance.png"),
            caption: "Absorbed IR vs distance (baseline assumptions)".to_owned(),
            x_label: "Distance from emitter surface (ft)".to_owned(),
            y_label: "Absorbed IR power per standing person (W)".to_owned(),
            size: (1280, 960),
        }
    }
}

/// Draws one labelled curve per scenario and writes the chart to `chart.path`.
///
/// Distances are plotted in feet and absorbed power in watts.
///
/// # Errors
///
/// Returns [`ReportError::NoData`] if the series have no finite extent, or
/// [`ReportError::Render`] if drawing or writing the image fails.
pub fn render_chart(
    series: &[ScenarioSeries],
    chart: &ChartConfig,
) -> Result<PathBuf, ReportError> {
    let (x_range, y_range) = plot_bounds(series).ok_or(ReportError::NoData)?;

    let root = BitMapBackend::new(&chart.path, chart.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| ReportError::render("fill background", err))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.caption, ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|err| ReportError::render("build axes", err))?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .bold_line_style(BLACK.mix(0.25))
        .light_line_style(BLACK.mix(0.08))
        .label_style(("sans-serif", 22))
        .axis_desc_style(("sans-serif", 26))
        .draw()
        .map_err(|err| ReportError::render("draw grid", err))?;

    for (index, scenario) in series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let points = scenario
            .distances
            .to_feet()
            .into_iter()
            .zip(scenario.absorbed.to_watts());

        ctx.draw_series(LineSeries::new(points, color.stroke_width(3)))
            .map_err(|err| ReportError::render("draw series", err))?
            .label(scenario.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(3)));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 24))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|err| ReportError::render("draw legend", err))?;

    root.present()
        .map_err(|err| ReportError::render("write image", err))?;

    info!(path = %chart.path.display(), curves = series.len(), "wrote chart");
    Ok(chart.path.clone())
}

/// Axis ranges covering every finite point, with headroom above the largest value.
///
/// The vertical range always includes zero.
fn plot_bounds(series: &[ScenarioSeries]) -> Option<(Range<f64>, Range<f64>)> {
    let points = series.iter().flat_map(|scenario| {
        scenario
            .distances
            .to_feet()
            .into_iter()
            .zip(scenario.absorbed.to_watts())
    });

    let (x_min, x_max, y_min, y_max) = points
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0_f64, 0.0_f64),
            |(x_lo, x_hi, y_lo, y_hi), (x, y)| (x_lo.min(x), x_hi.max(x), y_lo.min(y), y_hi.max(y)),
        );

    if x_min < x_max && y_min < y_max {
        let headroom = 0.05 * (y_max - y_min);
        Some((x_min..x_max, y_min..y_max + headroom))
    } else {
        None
    }
}
