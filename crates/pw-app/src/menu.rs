//! Model and protocol discovery.

use pw_core::OutputLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::catalog::PlotCatalog;
use crate::error::AppResult;

/// Names offered to the presentation layer for selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuData {
    pub models: Vec<String>,
    pub protocols: Vec<String>,
}

impl PlotCatalog {
    /// Enumerate computed models and available protocols.
    ///
    /// A model is listed only when every protocol subdirectory beneath it
    /// carries the success sentinel; unfinished models are omitted rather
    /// than shown with partial output. Both lists are sorted.
    pub fn menu(&self) -> AppResult<MenuData> {
        let layout = self.layout();

        let mut models = Vec::new();
        for name in visible_entries(&layout.models_dir)? {
            let model_dir = layout.models_dir.join(&name);
            if !model_dir.is_dir() {
                continue;
            }
            if model_is_computed(layout, &model_dir)? {
                models.push(name);
            } else {
                debug!(model = %name, "missing success sentinel; omitted from menu");
            }
        }
        models.sort();

        let mut protocols = visible_entries(&layout.protocols_dir)?;
        protocols.sort();

        Ok(MenuData { models, protocols })
    }
}

/// Immediate children of `dir`, minus hidden (leading-dot) entries. A
/// missing directory lists as empty.
fn visible_entries(dir: &Path) -> AppResult<Vec<String>> {
    let mut names = Vec::new();
    if !dir.exists() {
        return Ok(names);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    Ok(names)
}

fn model_is_computed(layout: &OutputLayout, model_dir: &Path) -> AppResult<bool> {
    for entry in fs::read_dir(model_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() || entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if !layout.success_path(&path).exists() {
            return Ok(false);
        }
    }
    Ok(true)
}
