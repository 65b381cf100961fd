//! HTTP request handlers

pub mod health;
pub mod region;

pub use health::health_check;
pub use region::get_region_info;
