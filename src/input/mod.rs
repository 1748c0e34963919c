//! Calculator input: raw form text, parsed metrics, and CSV loading

mod data;
mod form;
pub mod loader;

pub use data::EstimatorInput;
pub use form::{parse_float, Field, FormState};
pub use loader::{load_forms, load_forms_from_reader, FormRecord};
