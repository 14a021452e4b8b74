use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};
pub mod config;
pub mod draw;
pub mod error;
pub mod figure;
pub mod plot;
pub mod present;
pub mod render;

pub use config::{Delimiter, PlotConfig};
pub use error::PlotError;
pub use figure::Figure;
pub use present::{FilePresenter, HeadlessPresenter, Presenter};
pub use render::render;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Number of leading fields every record must carry.
pub const FIELDS_PER_RECORD: usize = 6;

/// The closed-loop log, one column per quantity and one index per sample.
/// Time in seconds, set-point and output in meters, input and limits in newtons.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    pub time: Vec<f64>,
    pub setpoint: Vec<f64>,
    pub output: Vec<f64>,
    pub control_input: Vec<f64>,
    pub input_lower_limit: Vec<f64>,
    pub input_upper_limit: Vec<f64>,
}

impl SampleTable {
    pub fn new(capacity: usize) -> SampleTable {
        SampleTable {
            time: Vec::with_capacity(capacity),
            setpoint: Vec::with_capacity(capacity),
            output: Vec::with_capacity(capacity),
            control_input: Vec::with_capacity(capacity),
            input_lower_limit: Vec::with_capacity(capacity),
            input_upper_limit: Vec::with_capacity(capacity),
        }
    }

    /// Init a SampleTable from a delimited text file.
    /// Every line is a record, there is no header.
    /// The file is closed when this returns, whatever the outcome.
    pub fn from_csv(fin: &Path, delimiter: Delimiter) -> Result<SampleTable, PlotError> {
        let file = File::open(fin).map_err(|source| PlotError::Io {
            path: fin.to_path_buf(),
            source,
        })?;
        let table = SampleTable::from_reader(file, delimiter).map_err(|e| match e {
            PlotError::Read(source) => PlotError::Io {
                path: fin.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("loaded {} samples from {}", table.len(), fin.display());
        Ok(table)
    }

    /// Parses records from any reader, in order.
    /// Blank lines are not records; quoted fields are unquoted.
    /// All the tokens of a record are parsed, only the first six are kept.
    pub fn from_reader<R: Read>(rdr: R, delimiter: Delimiter) -> Result<SampleTable, PlotError> {
        let mut table = SampleTable::new(10000);
        match delimiter {
            Delimiter::Comma => {
                let mut csv_rdr = ReaderBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .trim(Trim::All)
                    .from_reader(rdr);
                for (record, result) in csv_rdr.records().enumerate() {
                    let fields = result.map_err(|e| PlotError::Read(e.into()))?;
                    table.push_record(record, fields.iter())?;
                }
            }
            Delimiter::Whitespace => {
                let lines = BufReader::new(rdr)
                    .lines()
                    .filter(|l| l.as_ref().map_or(true, |s| !s.trim().is_empty()));
                for (record, l) in lines.enumerate() {
                    let line = l.map_err(PlotError::Read)?;
                    table.push_record(record, line.split_whitespace())?;
                }
            }
        }
        debug!("parsed {} records", table.len());
        Ok(table)
    }

    fn push_record<'a, I>(&mut self, record: usize, tokens: I) -> Result<(), PlotError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut nums: Vec<f64> = Vec::with_capacity(FIELDS_PER_RECORD);
        for (field, token) in tokens.enumerate() {
            let v: f64 = token.parse().map_err(|_| PlotError::Parse {
                record,
                field,
                token: token.to_string(),
            })?;
            nums.push(v);
        }
        if nums.len() < FIELDS_PER_RECORD {
            return Err(PlotError::MalformedRecord {
                record,
                found: nums.len(),
            });
        }
        self.push_row(&nums);
        Ok(())
    }

    fn push_row(&mut self, nums: &[f64]) {
        self.time.push(nums[0]);
        self.setpoint.push(nums[1]);
        self.output.push(nums[2]);
        self.control_input.push(nums[3]);
        self.input_lower_limit.push(nums[4]);
        self.input_upper_limit.push(nums[5]);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// the six values of sample i, in file order
    pub fn row(&self, i: usize) -> Option<[f64; FIELDS_PER_RECORD]> {
        if i >= self.len() {
            return None;
        }
        Some([
            self.time[i],
            self.setpoint[i],
            self.output[i],
            self.control_input[i],
            self.input_lower_limit[i],
            self.input_upper_limit[i],
        ])
    }

    /// true when time never decreases; nothing is enforced, the chart
    /// just looks wrong otherwise
    pub fn is_time_ordered(&self) -> bool {
        self.time.windows(2).all(|w| w[0] <= w[1])
    }
}

/// one comma separated line per sample, readable back by the loader
impl std::fmt::Display for SampleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.len() {
            writeln!(
                f,
                "{},{},{},{},{},{}",
                self.time[i],
                self.setpoint[i],
                self.output[i],
                self.control_input[i],
                self.input_lower_limit[i],
                self.input_upper_limit[i]
            )?;
        }
        Ok(())
    }
}

/// Loads a comma separated log.
pub fn load(fin: &Path) -> Result<SampleTable, PlotError> {
    SampleTable::from_csv(fin, Delimiter::Comma)
}

/// Loads the log, renders the chart and hands it to the presenter.
pub fn run<P: Presenter>(
    fin: &Path,
    delimiter: Delimiter,
    config: &PlotConfig,
    presenter: &mut P,
) -> Result<(), PlotError> {
    let table = SampleTable::from_csv(fin, delimiter)?;
    if !table.is_time_ordered() {
        warn!("time is not monotonic in {}, the chart may look odd", fin.display());
    }
    let figure = render(&table, config)?;
    presenter.present(&figure)
}
