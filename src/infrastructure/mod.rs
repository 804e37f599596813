pub mod http;
pub mod rendering;
pub mod services;

pub use http::MindicadorClient;
pub use rendering::{CanvasLineChart, CanvasSurface};
pub use services::{BrowserTimeProvider, ConsoleLogger};
