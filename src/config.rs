use plotters::style::RGBColor;
use std::str::FromStr;

pub const DEFAULT_TITLE: &str = "Spring-Mass-Damper System";

pub const SET_POINT_COLOR: RGBColor = RGBColor(65, 105, 225); // royalblue
pub const OUTPUT_COLOR: RGBColor = RGBColor(50, 205, 50); // limegreen
pub const LIMIT_COLOR: RGBColor = RGBColor(255, 0, 0);
pub const INPUT_COLOR: RGBColor = RGBColor(255, 165, 0); // orange

/// 10 x 7 inches at 100 px per inch
pub const FIGURE_SIZE: (u32, u32) = (1000, 700);

pub const TITLE_FONT_SIZE: u32 = 20;
pub const LABEL_FONT_SIZE: u32 = 15;
pub const TICK_FONT_SIZE: u32 = 13;
pub const LEGEND_FONT_SIZE: u32 = 15;

pub const DISPLACEMENT_LABEL: &str = "Displacement [m]";
pub const FORCE_LABEL: &str = "Force [N]";
pub const TIME_LABEL: &str = "Time [s]";

pub const SET_POINT_LABEL: &str = "Set-point";
pub const OUTPUT_LABEL: &str = "Plant output";
pub const LIMIT_LABEL: &str = "Limit";
pub const INPUT_LABEL: &str = "Control input";

/// Presentation settings of the two-panel control chart.
/// `Default` reproduces the reference chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub set_point_color: RGBColor,
    pub output_color: RGBColor,
    pub limit_color: RGBColor,
    pub input_color: RGBColor,
    pub figure_size: (u32, u32),
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub tick_font_size: u32,
    pub legend_font_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            title: DEFAULT_TITLE.to_string(),
            set_point_color: SET_POINT_COLOR,
            output_color: OUTPUT_COLOR,
            limit_color: LIMIT_COLOR,
            input_color: INPUT_COLOR,
            figure_size: FIGURE_SIZE,
            title_font_size: TITLE_FONT_SIZE,
            label_font_size: LABEL_FONT_SIZE,
            tick_font_size: TICK_FONT_SIZE,
            legend_font_size: LEGEND_FONT_SIZE,
        }
    }
}

/// Field separator of the input records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Whitespace,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Comma
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(Delimiter::Comma),
            "whitespace" | "space" | "tab" => Ok(Delimiter::Whitespace),
            other => Err(format!("unknown delimiter {}", other)),
        }
    }
}
