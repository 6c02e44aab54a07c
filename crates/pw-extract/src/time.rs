//! Implicit time axis loading.

use crate::ExtractResult;
use crate::reader::RowReader;
use pw_core::parse_field;
use std::path::Path;

/// Marker field identifying the time row in a steppers file.
const TIME_MARKER: &str = "time";
/// Columns preceding the time values on the marker row (name and units).
const VALUE_OFFSET: usize = 2;

/// Per-row time values recovered from a steppers file.
///
/// Values keep their position; an unparseable entry becomes a hole so
/// later entries stay aligned with their data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeAxis {
    values: Vec<Option<f64>>,
}

impl TimeAxis {
    /// Scan `path` for the first row whose leading field is the time
    /// marker and collect the values after the name and units columns. A
    /// file without a marker row yields an empty axis.
    pub fn load(path: &Path, delimiter: char) -> ExtractResult<Self> {
        let mut rows = RowReader::open(path, delimiter)?;
        while let Some(fields) = rows.next_row()? {
            if fields.first().map(String::as_str) == Some(TIME_MARKER) {
                let values = fields
                    .iter()
                    .skip(VALUE_OFFSET)
                    .map(|field| parse_field(field))
                    .collect();
                return Ok(Self { values });
            }
        }
        Ok(Self::default())
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
