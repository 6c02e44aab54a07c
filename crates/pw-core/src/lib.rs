//! pw-core: stable foundation for plotwell.
//!
//! Contains:
//! - layout (output directory and manifest naming conventions)
//! - numeric (field parsing helpers shared by the extraction pipeline)

pub mod layout;
pub mod numeric;

pub use layout::OutputLayout;
pub use numeric::parse_field;
