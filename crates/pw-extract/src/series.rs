//! Series extraction over resolved plot descriptors.

use crate::ExtractResult;
use crate::descriptor::{AxisSource, PlotDescriptor, PlotShape};
use crate::reader::RowReader;
use crate::time::TimeAxis;
use crate::types::Series;
use pw_core::{OutputLayout, parse_field};
use tracing::debug;

/// Header rows preceding data in a variable storage file (title plus
/// units/metadata).
const DATA_HEADER_ROWS: usize = 2;
/// The implicit-time layout carries a single header row instead.
const TIME_DATA_HEADER_ROWS: usize = 1;

/// Extract every series a descriptor yields.
///
/// `Scalar` and `Higher` shapes deterministically produce no series.
/// Unparseable values are dropped at point granularity; a partially-bad
/// row still contributes its good fields.
pub fn extract(layout: &OutputLayout, descriptor: &PlotDescriptor) -> ExtractResult<Vec<Series>> {
    match descriptor.shape {
        PlotShape::Scalar => Ok(Vec::new()),
        PlotShape::OneDim => match descriptor.y_axis {
            AxisSource::Declared => extract_one_dim(layout, descriptor),
            AxisSource::ImplicitTime => extract_one_dim_time(layout, descriptor),
        },
        PlotShape::TwoDim => match descriptor.y_axis {
            AxisSource::Declared => extract_two_dim(layout, descriptor),
            AxisSource::ImplicitTime => extract_two_dim_time(layout, descriptor),
        },
        PlotShape::Higher(dimension) => {
            debug!(
                dimension,
                plot = %descriptor.name,
                "extraction not supported for this dimensionality; returning no series"
            );
            Ok(Vec::new())
        }
    }
}

/// 1-D with a declared y variable: zip rows pairwise, then fields
/// pairwise within each row. Exactly one series, named after the plot.
fn extract_one_dim(layout: &OutputLayout, d: &PlotDescriptor) -> ExtractResult<Vec<Series>> {
    let mut x_rows = RowReader::open(&d.x.storage_file, layout.data_delimiter)?;
    let mut y_rows = RowReader::open(&d.y.storage_file, layout.data_delimiter)?;
    x_rows.skip_rows(DATA_HEADER_ROWS)?;
    y_rows.skip_rows(DATA_HEADER_ROWS)?;

    let mut series = Series::new(d.name.as_str());
    while let (Some(x_fields), Some(y_fields)) = (x_rows.next_row()?, y_rows.next_row()?) {
        for (x_field, y_field) in x_fields.iter().zip(&y_fields) {
            if let (Some(x), Some(y)) = (parse_field(x_field), parse_field(y_field)) {
                series.push(x, y);
            }
        }
    }
    Ok(vec![series])
}

/// 2-D with a declared y variable: row index is the step, column index is
/// the trace. Each row contributes one point to every trace series.
fn extract_two_dim(layout: &OutputLayout, d: &PlotDescriptor) -> ExtractResult<Vec<Series>> {
    let mut x_rows = RowReader::open(&d.x.storage_file, layout.data_delimiter)?;
    let mut y_rows = RowReader::open(&d.y.storage_file, layout.data_delimiter)?;
    x_rows.skip_rows(DATA_HEADER_ROWS)?;
    y_rows.skip_rows(DATA_HEADER_ROWS)?;

    let mut traces: Vec<Series> = Vec::new();
    while let (Some(x_fields), Some(y_fields)) = (x_rows.next_row()?, y_rows.next_row()?) {
        for (column, (x_field, y_field)) in x_fields.iter().zip(&y_fields).enumerate() {
            ensure_trace(&mut traces, column);
            if let (Some(x), Some(y)) = (parse_field(x_field), parse_field(y_field)) {
                traces[column].push(x, y);
            }
        }
    }
    Ok(traces)
}

/// 2-D against the implicit time axis: the steppers time row supplies the
/// x coordinate for data row r, and each data column is a trace.
fn extract_two_dim_time(layout: &OutputLayout, d: &PlotDescriptor) -> ExtractResult<Vec<Series>> {
    let time = TimeAxis::load(&d.y.storage_file, layout.data_delimiter)?;
    let mut x_rows = RowReader::open(&d.x.storage_file, layout.data_delimiter)?;
    x_rows.skip_rows(TIME_DATA_HEADER_ROWS)?;

    let mut traces: Vec<Series> = Vec::new();
    let mut row = 0usize;
    while let Some(x_fields) = x_rows.next_row()? {
        // Data rows beyond the time vector have no x coordinate.
        if row >= time.len() {
            break;
        }
        for (column, x_field) in x_fields.iter().enumerate() {
            ensure_trace(&mut traces, column);
            if let (Some(t), Some(x)) = (time.get(row), parse_field(x_field)) {
                traces[column].push(t, x);
            }
        }
        row += 1;
    }
    Ok(traces)
}

/// 1-D against the implicit time axis: fields are consumed in row-major
/// order and paired positionally with the time vector.
fn extract_one_dim_time(layout: &OutputLayout, d: &PlotDescriptor) -> ExtractResult<Vec<Series>> {
    let time = TimeAxis::load(&d.y.storage_file, layout.data_delimiter)?;
    let mut x_rows = RowReader::open(&d.x.storage_file, layout.data_delimiter)?;
    x_rows.skip_rows(TIME_DATA_HEADER_ROWS)?;

    let mut series = Series::new(d.name.as_str());
    // Position advances on every field so a bad value never shifts later
    // pairings.
    let mut position = 0usize;
    'rows: while let Some(x_fields) = x_rows.next_row()? {
        for x_field in &x_fields {
            if position >= time.len() {
                break 'rows;
            }
            if let (Some(t), Some(x)) = (time.get(position), parse_field(x_field)) {
                series.push(t, x);
            }
            position += 1;
        }
    }
    Ok(vec![series])
}

/// Trace series are indexed by column; create any missing predecessors so
/// a column that never parses still occupies its slot.
fn ensure_trace(traces: &mut Vec<Series>, column: usize) {
    while traces.len() <= column {
        traces.push(Series::new(format!("Trace: {}", traces.len())));
    }
}
