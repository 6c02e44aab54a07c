//! Plot catalog loading: the batch driver over models and protocols.

use pw_core::OutputLayout;
use pw_extract::{PlotResult, PlotResultSet, RowReader, TIME_TITLE, build_descriptor, extract};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Batch loader for default plots.
///
/// Holds the output layout for the lifetime of the service; each request
/// is otherwise stateless and nothing is cached between calls.
pub struct PlotCatalog {
    layout: OutputLayout,
}

impl PlotCatalog {
    pub fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Assemble every default plot for the requested models under one
    /// protocol. Models are processed sequentially in input order and
    /// duplicates are kept; the result set preserves manifest order.
    ///
    /// A model without a readable default-plots manifest fails the whole
    /// request; an individual plot that resolves badly contributes an
    /// empty result instead.
    pub fn load_plots(&self, models: &[String], protocol: &str) -> AppResult<PlotResultSet> {
        let mut results = PlotResultSet::default();

        for model in models {
            let data_path = self.layout.data_path(model, protocol);
            let manifest_path = self.layout.default_plots_path(&data_path);
            let mut rows = RowReader::open(&manifest_path, self.layout.manifest_delimiter)
                .map_err(|err| {
                    AppError::InvalidRequest(format!(
                        "no default plots for model '{model}' under protocol '{protocol}': {err}"
                    ))
                })?;
            rows.skip_rows(1)?;

            while let Some(fields) = rows.next_row()? {
                if fields.len() < 2 {
                    warn!(
                        model = %model,
                        path = %manifest_path.display(),
                        "short default-plots row skipped"
                    );
                    continue;
                }
                let plot_name = fields[0].as_str();
                let x_title = fields[1].as_str();
                let y_title = fields.get(2).map(String::as_str);
                let traces_hint = fields.get(3).cloned().filter(|t| !t.is_empty());

                let descriptor = build_descriptor(
                    &self.layout,
                    &data_path,
                    plot_name,
                    model,
                    x_title,
                    y_title,
                    traces_hint.clone(),
                )?;

                let result = match descriptor {
                    Some(descriptor) => PlotResult {
                        model: model.clone(),
                        protocol: protocol.to_string(),
                        name: descriptor.name.clone(),
                        x_axis_label: descriptor.x.axis_label(),
                        y_axis_label: descriptor.y.axis_label(),
                        traces_hint: descriptor.traces_hint.clone(),
                        series: extract(&self.layout, &descriptor)?,
                    },
                    None => {
                        debug!(
                            model = %model,
                            plot = plot_name,
                            "invalid plot definition; recording empty result"
                        );
                        PlotResult {
                            model: model.clone(),
                            protocol: protocol.to_string(),
                            name: plot_name.to_string(),
                            x_axis_label: x_title.to_string(),
                            y_axis_label: y_title
                                .filter(|t| !t.is_empty())
                                .unwrap_or(TIME_TITLE)
                                .to_string(),
                            traces_hint,
                            series: Vec::new(),
                        }
                    }
                };
                results.push(result);
            }
        }

        Ok(results)
    }
}
