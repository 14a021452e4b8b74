use crate::error::PlotError;
use crate::figure::{Figure, LegendPosition, LineStyle, Panel};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::error::Error;
use std::path::Path;

const MARGIN: u32 = 15;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 80;
const STROKE_WIDTH: u32 = 2;
const DASH_SIZE: u32 = 8;
const DASH_SPACING: u32 = 6;
const LEGEND_LINE_LENGTH: i32 = 30;

/// draws the figure to an svg file
pub fn to_svg_file(figure: &Figure, fout: &Path) -> Result<(), PlotError> {
    let root = SVGBackend::new(fout, figure.size).into_drawing_area();
    draw_on(figure, &root).map_err(drawing_error)
}

/// draws the figure to a png (or any bitmap format the extension names)
pub fn to_bitmap_file(figure: &Figure, fout: &Path) -> Result<(), PlotError> {
    let root = BitMapBackend::new(fout, figure.size).into_drawing_area();
    draw_on(figure, &root).map_err(drawing_error)
}

/// draws the figure to an svg document held in memory
pub fn to_svg_string(figure: &Figure) -> Result<String, PlotError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, figure.size).into_drawing_area();
        draw_on(figure, &root).map_err(drawing_error)?;
    }
    Ok(svg)
}

fn drawing_error(e: Box<dyn Error>) -> PlotError {
    PlotError::Drawing(e.to_string())
}

/// Title on top, then the panels stacked vertically, each taking an even share.
pub fn draw_on<DB>(figure: &Figure, root: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut extents = Vec::with_capacity(figure.panels.len());
    for panel in figure.panels.iter() {
        let (x0, x1) = panel.x_range;
        let x = drawable_range(panel.x_range)
            .ok_or_else(|| format!("time axis [{}, {}] is not finite", x0, x1))?;
        let (y0, y1) = panel.y_range();
        let y = drawable_range((y0, y1))
            .ok_or_else(|| format!("{} axis [{}, {}] is not finite", panel.y_label, y0, y1))?;
        extents.push((x, y));
    }

    root.fill(&WHITE)?;
    let body = root.titled(
        &figure.title,
        ("sans-serif", figure.title_font_size).into_font(),
    )?;
    if figure.panels.is_empty() {
        root.present()?;
        return Ok(());
    }
    let areas = body.split_evenly((figure.panels.len(), 1));
    for ((panel, extent), area) in figure.panels.iter().zip(extents).zip(areas.iter()) {
        draw_panel(figure, panel, extent, area)?;
    }
    root.present()?;
    Ok(())
}

fn draw_panel<DB>(
    figure: &Figure,
    panel: &Panel,
    ((xmin, xmax), (ymin, ymax)): ((f64, f64), (f64, f64)),
    area: &DrawingArea<DB, Shift>,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)?;

    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(&TRANSPARENT)
        .bold_line_style(RGBColor(200, 200, 200).stroke_width(1))
        .label_style(("sans-serif", figure.tick_font_size))
        .axis_desc_style(("sans-serif", figure.label_font_size))
        .y_desc(panel.y_label.as_str());
    if let Some(x_label) = panel.x_label.as_ref() {
        mesh.x_desc(x_label.as_str());
    }
    mesh.draw()?;

    for series in panel.series.iter() {
        let style = series.color.stroke_width(STROKE_WIDTH);
        let path = series.step_path();
        let annotation = match series.style {
            LineStyle::Solid => chart.draw_series(LineSeries::new(path, style))?,
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                path,
                DASH_SIZE,
                DASH_SPACING,
                style,
            ))?,
        };
        if let Some(label) = series.label.as_ref() {
            annotation.label(label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + LEGEND_LINE_LENGTH, y)], style)
            });
        }
    }

    if !panel.legend_entries().is_empty() {
        let position = match panel.legend {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        };
        chart
            .configure_series_labels()
            .position(position)
            .label_font(("sans-serif", figure.legend_font_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .draw()?;
    }
    Ok(())
}

/// Axis bounds plotters can lay out, None when a bound is not finite.
/// A single sample has no span and gets widened; a reversed range is put in order.
fn drawable_range((lo, hi): (f64, f64)) -> Option<(f64, f64)> {
    if !lo.is_finite() || !hi.is_finite() {
        None
    } else if lo == hi {
        Some((lo - 0.5, hi + 0.5))
    } else if lo < hi {
        Some((lo, hi))
    } else {
        Some((hi, lo))
    }
}
