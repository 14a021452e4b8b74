use super::VERSION;
use crate::config::{Delimiter, PlotConfig};
use clap::{App, Arg};
use std::path::{Path, PathBuf};

/// Settings collected from the command line.
#[derive(Debug, Clone)]
pub struct PlotArgs {
    pub csvin: PathBuf,
    pub fout: PathBuf,
    pub delimiter: Delimiter,
    pub config: PlotConfig,
    pub verbose: bool,
}

/// Takes the CLI arguments that control the plotting of the control log.
pub fn parse_cli() -> Result<PlotArgs, String> {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name of the log file, one sample per line")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .default_value("result.csv");
    let arg_fout = Arg::with_name("output_file")
        .help("name of the output chart, .png for a bitmap, svg otherwise")
        .short("o")
        .long("outfile")
        .takes_value(true);
    let arg_delimiter = Arg::with_name("delimiter")
        .help("field separator of the log")
        .short("d")
        .long("delimiter")
        .takes_value(true)
        .possible_values(&["comma", "whitespace"])
        .default_value("comma");
    let arg_title = Arg::with_name("title")
        .help("title of the chart, names the system under observation")
        .short("t")
        .long("title")
        .takes_value(true);
    let arg_verbose = Arg::with_name("verbose")
        .help("print debug information")
        .short("v")
        .long("verbose")
        .takes_value(false);
    let cli_args = App::new("control_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot plant output vs set-point and control input vs limits")
        .arg(arg_csvin)
        .arg(arg_fout)
        .arg(arg_delimiter)
        .arg(arg_title)
        .arg(arg_verbose)
        .get_matches();

    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let fout = match cli_args.value_of("output_file") {
        Some(p) => PathBuf::from(p),
        None => default_fout(&csvin),
    };
    let delimiter = cli_args
        .value_of("delimiter")
        .unwrap_or_default()
        .parse::<Delimiter>()?;
    let mut config = PlotConfig::default();
    if let Some(title) = cli_args.value_of("title") {
        config.title = title.to_string();
    }
    Ok(PlotArgs {
        csvin,
        fout,
        delimiter,
        config,
        verbose: cli_args.is_present("verbose"),
    })
}

/// the input path with an svg extension
pub fn default_fout(csvin: &Path) -> PathBuf {
    csvin.with_extension("svg")
}
