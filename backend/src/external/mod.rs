//! External API integrations

pub mod encyclopedia;
pub mod image_catalog;
pub mod text_generation;
pub mod weather;

pub use encyclopedia::EncyclopediaClient;
pub use image_catalog::ImageCatalogClient;
pub use text_generation::TextGenerationClient;
pub use weather::WeatherClient;
