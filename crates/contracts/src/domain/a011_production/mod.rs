pub mod aggregate;
pub mod lots;
