//! Tabs of the center zone
//!
//! - `page` - TabPage, one per open tab
//! - `registry` - tab.key → View
//! - `tab_labels` - titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
