use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://mindicador.cl/api";
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Widget settings. Everything has a compiled-in default; there is no config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub base_url: String,
    pub history_window: usize,
    pub canvas_id: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            history_window: DEFAULT_HISTORY_WINDOW,
            canvas_id: "history".to_string(),
            chart_width: 800,
            chart_height: 400,
        }
    }
}

impl WidgetConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_width = width;
        self.chart_height = height;
        self
    }

    pub fn catalog_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    pub fn series_url(&self, code: &str) -> String {
        format!("{}/{}", self.catalog_url(), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        let config = WidgetConfig::default();
        assert_eq!(config.catalog_url(), "https://mindicador.cl/api");
        assert_eq!(config.series_url("dolar"), "https://mindicador.cl/api/dolar");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let config = WidgetConfig::default().with_base_url("http://localhost:8080/api/");
        assert_eq!(config.series_url("uf"), "http://localhost:8080/api/uf");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: WidgetConfig = serde_json::from_str(r#"{"history_window": 5}"#).unwrap();
        assert_eq!(config.history_window, 5);
        assert_eq!(config.canvas_id, "history");
    }
}
