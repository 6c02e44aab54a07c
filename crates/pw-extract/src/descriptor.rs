//! Plot descriptor resolution and dimension checking.

use crate::ExtractResult;
use crate::contents::{VariableDescriptor, resolve_variable};
use pw_core::OutputLayout;
use std::path::Path;
use tracing::debug;

/// Where the y axis of a plot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSource {
    /// y is a variable declared in the contents index.
    Declared,
    /// y was omitted; the steppers time row supplies it.
    ImplicitTime,
}

/// Extraction strategy, tagged by the common dimension of x and y.
///
/// `Scalar` and `Higher` are reserved: they extract to zero series until
/// scalar and 3-D outputs are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotShape {
    Scalar,
    OneDim,
    TwoDim,
    Higher(u32),
}

impl PlotShape {
    pub fn from_dimension(dimension: u32) -> Self {
        match dimension {
            0 => PlotShape::Scalar,
            1 => PlotShape::OneDim,
            2 => PlotShape::TwoDim,
            n => PlotShape::Higher(n),
        }
    }
}

/// A fully resolved, dimension-checked plot ready for extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDescriptor {
    pub model: String,
    pub name: String,
    pub x: VariableDescriptor,
    pub y: VariableDescriptor,
    pub y_axis: AxisSource,
    pub shape: PlotShape,
    pub traces_hint: Option<String>,
}

/// Resolve one default-plots row into a descriptor.
///
/// `Ok(None)` marks an invalid plot definition (unknown variable or
/// mismatched dimensions); the caller records zero series for it and moves
/// on. One bad plot never fails the batch. An empty `y_title` is treated
/// as absent and falls back to the implicit time axis, whose unresolved
/// dimension inherits x's.
pub fn build_descriptor(
    layout: &OutputLayout,
    data_path: &Path,
    plot_name: &str,
    model: &str,
    x_title: &str,
    y_title: Option<&str>,
    traces_hint: Option<String>,
) -> ExtractResult<Option<PlotDescriptor>> {
    let Some(x) = resolve_variable(layout, data_path, x_title)? else {
        debug!(
            model,
            plot = plot_name,
            x_title,
            "x variable not declared; skipping plot"
        );
        return Ok(None);
    };

    let (y, y_axis) = match y_title.filter(|t| !t.is_empty()) {
        Some(title) => match resolve_variable(layout, data_path, title)? {
            Some(y) => (y, AxisSource::Declared),
            None => {
                debug!(
                    model,
                    plot = plot_name,
                    y_title = title,
                    "y variable not declared; skipping plot"
                );
                return Ok(None);
            }
        },
        None => (
            VariableDescriptor::implicit_time(layout, data_path),
            AxisSource::ImplicitTime,
        ),
    };

    let x_dim = match x.dimension {
        Some(d) => d,
        None => return Ok(None),
    };
    let dimension = match y.dimension {
        None => x_dim,
        Some(d) if d == x_dim => d,
        Some(d) => {
            debug!(
                model,
                plot = plot_name,
                x_dim,
                y_dim = d,
                "dimension mismatch; skipping plot"
            );
            return Ok(None);
        }
    };

    Ok(Some(PlotDescriptor {
        model: model.to_string(),
        name: plot_name.to_string(),
        x,
        y,
        y_axis,
        shape: PlotShape::from_dimension(dimension),
        traces_hint,
    }))
}
