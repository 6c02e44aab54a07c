//! pw-app: catalog service layer over the extraction pipeline.

pub mod catalog;
pub mod error;
pub mod menu;

pub use catalog::PlotCatalog;
pub use error::{AppError, AppResult};
pub use menu::MenuData;
