use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a load or a render.
/// None of these are recovered locally; they go straight back to the caller.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("record {record} has {found} fields, at least 6 are required")]
    MalformedRecord { record: usize, found: usize },

    #[error("record {record}, field {field}: could not parse {token:?} as a number")]
    Parse {
        record: usize,
        field: usize,
        token: String,
    },

    #[error("the sample table is empty, nothing to plot")]
    EmptyDataset,

    #[error("drawing failed: {0}")]
    Drawing(String),
}
