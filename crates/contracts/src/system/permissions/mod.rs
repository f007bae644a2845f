//! Permission model: screens, degrees and the per-user degree matrix.

pub mod aggregate;
pub mod degree;
pub mod matrix;
pub mod screen;

pub use aggregate::{Permission, PermissionBulkRequest, PermissionEntry, PermissionForm};
pub use degree::{Action, Degree};
pub use matrix::{AccessContext, PermissionMatrix};
pub use screen::Screen;
