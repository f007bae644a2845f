pub mod a001_sector;
pub mod a002_process;
pub mod a003_sector_process;
pub mod a004_machine;
pub mod a005_product_model;
pub mod a006_color;
pub mod a007_unit;
pub mod a008_formula;
pub mod a009_product;
pub mod a010_production_order;
pub mod a011_production;
