//! Shared types and models for the Region Insight service
//!
//! This crate contains the region report data model and the keyword rule
//! tables used to classify generated text and catalog images.

pub mod classification;
pub mod models;
pub mod text;
pub mod types;

pub use classification::*;
pub use models::*;
pub use types::*;
