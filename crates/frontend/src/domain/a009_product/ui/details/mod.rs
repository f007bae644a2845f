//! Product Details UI Module
//!
//! - view_model.rs: input signals, text → number parsing
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductFields;
