mod view;
mod view_model;

pub use view::{ProductionDetails, QualitySelect};
pub use view_model::ProductionFields;
