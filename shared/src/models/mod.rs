//! Domain models for the region report

mod background;
mod image;
mod narrative;
mod report;
mod weather;

pub use background::*;
pub use image::*;
pub use narrative::*;
pub use report::*;
pub use weather::*;
