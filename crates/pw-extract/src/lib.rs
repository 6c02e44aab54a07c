//! pw-extract: simulation output discovery and series extraction.

pub mod contents;
pub mod descriptor;
pub mod reader;
pub mod series;
pub mod time;
pub mod types;

pub use contents::{TIME_TITLE, VariableDescriptor, resolve_variable};
pub use descriptor::{AxisSource, PlotDescriptor, PlotShape, build_descriptor};
pub use reader::RowReader;
pub use series::extract;
pub use time::TimeAxis;
pub use types::*;

use std::path::PathBuf;

pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed contents row for '{title}' in {path}: {detail}")]
    MalformedIndexRow {
        path: PathBuf,
        title: String,
        detail: String,
    },
}
