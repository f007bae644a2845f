//! Sector Details UI Module
//!
//! - view_model.rs: input signals of the form
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SectorDetails;
pub use view_model::SectorFields;
