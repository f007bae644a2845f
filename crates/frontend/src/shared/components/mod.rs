pub mod column_picker;
pub mod crud_table;
pub mod date_range_filter;
pub mod entity_select;
pub mod pagination_controls;
pub mod table;
