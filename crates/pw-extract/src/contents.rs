//! Contents index resolution.

use crate::reader::RowReader;
use crate::{ExtractError, ExtractResult};
use pw_core::OutputLayout;
use std::path::{Path, PathBuf};

/// Axis title used when a plot omits its y variable.
pub const TIME_TITLE: &str = "Time";
/// Units of the implicit time axis.
pub const TIME_UNITS: &str = "ms";
/// Declared-type tag for the implicit time axis.
pub const UNTYPED: &str = "untyped";

/// One variable declared in a contents index.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDescriptor {
    pub title: String,
    pub units: String,
    /// `None` is the unresolved sentinel carried by the implicit time
    /// axis; the descriptor builder substitutes the x dimension for it.
    pub dimension: Option<u32>,
    pub storage_file: PathBuf,
    pub declared_type: String,
}

impl VariableDescriptor {
    /// Synthetic descriptor for the implicit time axis, backed by the
    /// steppers file.
    pub fn implicit_time(layout: &OutputLayout, data_path: &Path) -> Self {
        Self {
            title: TIME_TITLE.to_string(),
            units: TIME_UNITS.to_string(),
            dimension: None,
            storage_file: layout.steppers_path(data_path),
            declared_type: UNTYPED.to_string(),
        }
    }

    /// Axis label shown to the presentation layer.
    pub fn axis_label(&self) -> String {
        if self.units.is_empty() {
            self.title.clone()
        } else {
            format!("{} ({})", self.title, self.units)
        }
    }
}

/// Look `title` up in the contents index under `data_path`.
///
/// The scan stops at the first row whose title field matches; duplicate
/// titles resolve to the earliest row. `Ok(None)` means the variable is
/// not declared, which callers treat as "unavailable" rather than an
/// error. A matched row that is too short or carries a non-integer
/// dimension is a malformed index and fails the resolution.
pub fn resolve_variable(
    layout: &OutputLayout,
    data_path: &Path,
    title: &str,
) -> ExtractResult<Option<VariableDescriptor>> {
    let index_path = layout.contents_path(data_path);
    let mut rows = RowReader::open(&index_path, layout.manifest_delimiter)?;
    rows.skip_rows(1)?;

    while let Some(fields) = rows.next_row()? {
        if fields.first().map(String::as_str) != Some(title) {
            continue;
        }
        if fields.len() < 5 {
            return Err(ExtractError::MalformedIndexRow {
                path: index_path.clone(),
                title: title.to_string(),
                detail: format!("expected 5 fields, found {}", fields.len()),
            });
        }
        let dimension =
            fields[2]
                .trim()
                .parse::<u32>()
                .map_err(|_| ExtractError::MalformedIndexRow {
                    path: index_path.clone(),
                    title: title.to_string(),
                    detail: format!("dimension field '{}' is not an integer", fields[2]),
                })?;
        return Ok(Some(VariableDescriptor {
            title: fields[0].clone(),
            units: fields[1].clone(),
            dimension: Some(dimension),
            storage_file: data_path.join(&fields[3]),
            declared_type: fields[4].clone(),
        }));
    }

    Ok(None)
}
