pub mod catalog;
pub mod ports;
pub mod pricing;
pub mod records;
