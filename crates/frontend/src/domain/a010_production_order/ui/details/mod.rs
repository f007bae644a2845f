//! Production order dialog: header fields plus editable product lines.

mod view;
mod view_model;

pub use view::ProductionOrderDetails;
pub use view_model::{lines_to_forms, DetailLine, OrderFields};
