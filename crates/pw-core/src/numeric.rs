//! Numeric field parsing shared by the extraction pipeline.

/// Parse one delimited field as a chart coordinate.
///
/// Surrounding whitespace is tolerated. Returns `None` when the field does
/// not parse as `f64`; callers drop the affected point and continue with
/// the rest of the row.
pub fn parse_field(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}
