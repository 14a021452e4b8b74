//! In-memory description of a chart, independent of any drawing backend.
//! A test can inspect panels, series and styles without a display;
//! the `draw` module turns it into pixels.

use plotters::style::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
}

/// One step-interpolated line.
/// `points` are the samples as loaded, in time order;
/// the value of sample i is held until the time of sample i + 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub color: RGBColor,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn step(
        label: Option<&str>,
        color: RGBColor,
        style: LineStyle,
        x: &[f64],
        y: &[f64],
    ) -> Series {
        Series {
            label: label.map(String::from),
            color,
            style,
            points: x.iter().copied().zip(y.iter().copied()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// vertices of the staircase actually drawn:
    /// (x0, y0), (x1, y0), (x1, y1), (x2, y1), ... , (xn, yn)
    pub fn step_path(&self) -> Vec<(f64, f64)> {
        let mut path = Vec::with_capacity(self.points.len() * 2);
        let mut previous: Option<f64> = None;
        for &(x, y) in self.points.iter() {
            if let Some(py) = previous {
                path.push((x, py));
            }
            path.push((x, y));
            previous = Some(y);
        }
        path
    }

    /// value of the staircase at `x`, None outside the sampled time range
    pub fn value_at(&self, x: f64) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if x < first.0 || x > last.0 {
            return None;
        }
        self.points
            .iter()
            .take_while(|(px, _)| *px <= x)
            .last()
            .map(|&(_, py)| py)
    }
}

/// One set of axes with its series and legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub x_range: (f64, f64),
    pub x_label: Option<String>,
    pub y_label: String,
    pub legend: LegendPosition,
    pub series: Vec<Series>,
}

impl Panel {
    /// labels shown in the legend, in drawing order
    pub fn legend_entries(&self) -> Vec<&str> {
        self.series
            .iter()
            .filter_map(|s| s.label.as_deref())
            .collect()
    }

    /// vertical extent covering every finite value, padded by a tenth of the span
    pub fn y_range(&self) -> (f64, f64) {
        let values: Vec<f64> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, y)| y))
            .filter(|y| y.is_finite())
            .collect();
        let (ymin, ymax) = match min_and_max(&values[..]) {
            Some(bounds) => bounds,
            None => return (-0.5, 0.5),
        };
        let span = ymax - ymin;
        let margin = if span == 0. { 0.5 } else { span / 10. };
        (ymin - margin, ymax + margin)
    }
}

/// A titled canvas holding vertically stacked panels that share the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub size: (u32, u32),
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub tick_font_size: u32,
    pub legend_font_size: u32,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// the shared time extent, taken from the first panel
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.panels.first().map(|p| p.x_range)
    }
}

fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> Option<(T, T)> {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => return None,
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    Some((min, max))
}
