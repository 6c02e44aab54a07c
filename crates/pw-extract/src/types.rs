//! Plot result data types.

use serde::{Deserialize, Serialize};

/// One chart coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ordered point sequence with a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push(Point { x, y });
    }
}

/// All series assembled for one default-plots manifest row.
///
/// An invalid plot definition still produces a result, with zero series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotResult {
    pub model: String,
    pub protocol: String,
    pub name: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traces_hint: Option<String>,
    pub series: Vec<Series>,
}

/// Result set for one catalog request, in manifest order across all
/// requested models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotResultSet {
    pub plots: Vec<PlotResult>,
}

impl PlotResultSet {
    pub fn push(&mut self, plot: PlotResult) {
        self.plots.push(plot);
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }
}
