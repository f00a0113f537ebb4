//! PNG line chart of monthly spending

use std::io::Cursor;

use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::MonthlyTotal;

/// Size of the rendered image in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl ChartSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Number of horizontal grid lines drawn behind the series
const GRID_LINES: u32 = 5;

/// Render monthly totals as a line chart and encode it as PNG
///
/// The plot carries no text: months run left to right in chronological order
/// and the y axis starts at zero. An empty series still produces a valid
/// (empty) plot.
pub fn render_monthly_chart(monthly: &[MonthlyTotal], size: ChartSize) -> Result<Vec<u8>> {
    let ChartSize { width, height } = size;
    if width == 0 || height == 0 {
        return Err(Error::Chart("Chart size must be non-zero".to_string()));
    }

    let points: Vec<(i32, f64)> = monthly
        .iter()
        .enumerate()
        .map(|(i, m)| (i as i32, m.total.to_f64().unwrap_or(0.0)))
        .collect();

    let y_max = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    let x_max = (points.len() as i32 - 1).max(1);

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        // Plotters is built without a font backend, so nothing here may draw text
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(0i32..x_max, 0f64..y_max)
            .map_err(chart_err)?;

        for step in 0..=GRID_LINES {
            let y = y_max * f64::from(step) / f64::from(GRID_LINES);
            chart
                .draw_series(LineSeries::new([(0, y), (x_max, y)], &BLACK.mix(0.15)))
                .map_err(chart_err)?;
        }
        for x in 0..=x_max {
            chart
                .draw_series(LineSeries::new([(x, 0.0), (x, y_max)], &BLACK.mix(0.08)))
                .map_err(chart_err)?;
        }

        chart
            .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))
            .map_err(chart_err)?;
        chart
            .draw_series(points.iter().map(|p| Circle::new(*p, 4, BLUE.filled())))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    let image = image::RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| Error::Chart("Pixel buffer does not match chart size".to_string()))?;

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(chart_err)?;

    debug!(months = monthly.len(), bytes = png.len(), "Rendered monthly chart");
    Ok(png)
}
