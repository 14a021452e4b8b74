// tests/chart_test.rs

use control_plot::figure::LineStyle;
use control_plot::{draw, render, run, Delimiter, HeadlessPresenter, PlotConfig, PlotError, SampleTable};
use std::fs;

const THREE_SAMPLES: &str = "0,1,0,0,-5,5\n1,1,0.5,2,-5,5\n2,1,1,2,-5,5\n";

fn table() -> SampleTable {
    SampleTable::from_reader(THREE_SAMPLES.as_bytes(), Delimiter::Comma).unwrap()
}

#[test]
fn axis_clamp_and_single_limit_legend() {
    let figure = render(&table(), &PlotConfig::default()).unwrap();
    assert_eq!(figure.x_range(), Some((0., 2.)));

    let tracking = &figure.panels[0];
    assert_eq!(tracking.series.len(), 2);
    assert!(tracking.series.iter().all(|s| s.points.len() == 3));

    let actuation = &figure.panels[1];
    assert_eq!(actuation.x_range, (0., 2.));
    let limit_color = PlotConfig::default().limit_color;
    let limit_lines = actuation
        .series
        .iter()
        .filter(|s| s.color == limit_color)
        .count();
    assert_eq!(limit_lines, 2);
    let limit_entries = actuation
        .legend_entries()
        .into_iter()
        .filter(|l| *l == "Limit")
        .count();
    assert_eq!(limit_entries, 1);
}

#[test]
fn output_holds_until_next_sample() {
    let figure = render(&table(), &PlotConfig::default()).unwrap();
    let output = figure.panels[0]
        .series
        .iter()
        .find(|s| s.label.as_deref() == Some("Plant output"))
        .unwrap();
    assert_eq!(output.style, LineStyle::Solid);
    assert_eq!(output.value_at(0.99), Some(0.));
    assert_eq!(output.value_at(1.0), Some(0.5));

    // the drawn path jumps vertically at t = 1, no slanted segment
    let path = output.step_path();
    assert_eq!(path[1], (1., 0.));
    assert_eq!(path[2], (1., 0.5));
    for w in path.windows(2) {
        assert!(w[0].0 == w[1].0 || w[0].1 == w[1].1);
    }
}

#[test]
fn empty_table_produces_no_figure() {
    let res = render(&SampleTable::new(0), &PlotConfig::default());
    assert!(matches!(res, Err(PlotError::EmptyDataset)));
}

#[test]
fn run_hands_the_figure_to_the_presenter() {
    let path = std::env::temp_dir().join(format!("control_plot_{}_run.csv", std::process::id()));
    fs::write(&path, THREE_SAMPLES).unwrap();
    let mut presenter = HeadlessPresenter::new();
    let res = run(&path, Delimiter::Comma, &PlotConfig::default(), &mut presenter);
    fs::remove_file(&path).unwrap();
    res.unwrap();

    assert_eq!(presenter.figures.len(), 1);
    let figure = presenter.last().unwrap();
    assert_eq!(figure.panels.len(), 2);
    assert_eq!(figure.panels[0].y_label, "Displacement [m]");
    assert_eq!(figure.panels[1].x_label.as_deref(), Some("Time [s]"));
    assert_eq!(figure.panels[1].y_label, "Force [N]");
}

#[test]
fn run_on_empty_log_presents_nothing() {
    let path = std::env::temp_dir().join(format!("control_plot_{}_run_empty.csv", std::process::id()));
    fs::write(&path, "").unwrap();
    let mut presenter = HeadlessPresenter::new();
    let res = run(&path, Delimiter::Comma, &PlotConfig::default(), &mut presenter);
    fs::remove_file(&path).unwrap();
    assert!(matches!(res, Err(PlotError::EmptyDataset)));
    assert!(presenter.figures.is_empty());
}

#[test]
#[ignore = "text layout needs a system sans-serif font"]
fn svg_document_carries_titles_and_labels() {
    let figure = render(&table(), &PlotConfig::default()).unwrap();
    let svg = draw::to_svg_string(&figure).unwrap();
    assert!(svg.starts_with("<svg"));
    for text in [
        "Spring-Mass-Damper System",
        "Displacement [m]",
        "Force [N]",
        "Time [s]",
        "Set-point",
        "Plant output",
        "Limit",
        "Control input",
    ]
    .iter()
    {
        assert!(svg.contains(text), "missing {}", text);
    }
}
