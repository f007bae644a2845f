//! "Generar lotes": one run split into contiguous lots, created in one request.

mod view;
mod view_model;

pub use view::LotGeneratorDialog;
pub use view_model::{build_plan, LotInputs};
