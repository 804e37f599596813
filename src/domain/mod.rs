pub mod chart;
pub mod conversion;
pub mod errors;
pub mod indicators;
pub mod logging;
