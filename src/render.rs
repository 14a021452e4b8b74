use crate::config::{
    PlotConfig, DISPLACEMENT_LABEL, FORCE_LABEL, INPUT_LABEL, LIMIT_LABEL, OUTPUT_LABEL,
    SET_POINT_LABEL, TIME_LABEL,
};
use crate::error::PlotError;
use crate::figure::{Figure, LegendPosition, LineStyle, Panel, Series};
use crate::SampleTable;
use tracing::debug;

/// Maps the sample table onto the two-panel control chart:
/// tracking (set-point and output) on top, actuation (input and limits) below.
/// The table is only read.
pub fn render(table: &SampleTable, config: &PlotConfig) -> Result<Figure, PlotError> {
    let (t_first, t_last) = match (table.time.first(), table.time.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(PlotError::EmptyDataset),
    };
    let x_range = (t_first, t_last);
    let t = &table.time[..];

    let tracking = Panel {
        x_range,
        x_label: None,
        y_label: DISPLACEMENT_LABEL.to_string(),
        legend: LegendPosition::UpperLeft,
        series: vec![
            Series::step(
                Some(SET_POINT_LABEL),
                config.set_point_color,
                LineStyle::Dashed,
                t,
                &table.setpoint,
            ),
            Series::step(
                Some(OUTPUT_LABEL),
                config.output_color,
                LineStyle::Solid,
                t,
                &table.output,
            ),
        ],
    };

    // the lower bound stays unlabeled so "Limit" shows up once in the legend
    let actuation = Panel {
        x_range,
        x_label: Some(TIME_LABEL.to_string()),
        y_label: FORCE_LABEL.to_string(),
        legend: LegendPosition::UpperLeft,
        series: vec![
            Series::step(
                Some(LIMIT_LABEL),
                config.limit_color,
                LineStyle::Dashed,
                t,
                &table.input_upper_limit,
            ),
            Series::step(
                None,
                config.limit_color,
                LineStyle::Dashed,
                t,
                &table.input_lower_limit,
            ),
            Series::step(
                Some(INPUT_LABEL),
                config.input_color,
                LineStyle::Solid,
                t,
                &table.control_input,
            ),
        ],
    };

    debug!(
        "rendered {} samples over t = [{}, {}]",
        table.len(),
        t_first,
        t_last
    );
    Ok(Figure {
        title: config.title.clone(),
        size: config.figure_size,
        title_font_size: config.title_font_size,
        label_font_size: config.label_font_size,
        tick_font_size: config.tick_font_size,
        legend_font_size: config.legend_font_size,
        panels: vec![tracking, actuation],
    })
}
