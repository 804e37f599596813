use leptos::view;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Install panic hook, logger and clock as soon as the module loads
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    crate::log_info!(LogComponent::Presentation("Initialize"), "🚀 Indicator converter initialized");
}

/// Mount the converter widget into `<body>`
#[wasm_bindgen(js_name = mountConverter)]
pub fn mount_converter() {
    crate::log_info!(LogComponent::Presentation("Mount"), "Mounting converter widget");
    leptos::mount_to_body(|| view! { <App /> });
}
