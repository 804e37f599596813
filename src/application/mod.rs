pub mod catalog_loader;
pub mod chart_service;
pub mod conversion;

pub use catalog_loader::*;
pub use chart_service::*;
pub use conversion::*;
