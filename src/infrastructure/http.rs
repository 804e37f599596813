pub mod dto;

use crate::config::WidgetConfig;
use crate::domain::{
    errors::{ConversionError, WidgetResult},
    indicators::{IndicatorCatalog, IndicatorCode, IndicatorRepository, IndicatorSeries},
    logging::LogComponent,
};
use crate::{log_debug, log_error, log_info};
use gloo_net::http::Request;

/// REST client for the mindicador.cl API
#[derive(Debug, Clone)]
pub struct MindicadorClient {
    config: WidgetConfig,
}

impl Default for MindicadorClient {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl MindicadorClient {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }

    /// GET `url` and return the body of a 2xx response.
    async fn get_text(&self, url: &str) -> WidgetResult<String> {
        log_debug!(LogComponent::Infrastructure("Mindicador"), "🌐 GET: {url}");

        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ConversionError::FetchFailure(format!("{e}")))?;

        if !response.ok() {
            let error_msg = format!("HTTP {} {}", response.status(), response.status_text());
            log_error!(LogComponent::Infrastructure("Mindicador"), "{error_msg}");
            return Err(ConversionError::FetchFailure(error_msg));
        }

        response
            .text()
            .await
            .map_err(|e| ConversionError::FetchFailure(format!("failed to read body: {e}")))
    }
}

impl IndicatorRepository for MindicadorClient {
    async fn fetch_catalog(&self) -> WidgetResult<IndicatorCatalog> {
        let body = self.get_text(&self.config.catalog_url()).await?;
        let catalog = dto::parse_catalog(&body)?;

        log_info!(LogComponent::Infrastructure("Mindicador"), "✅ Catalog loaded with {} indicators", catalog.len());
        Ok(catalog)
    }

    async fn fetch_series(&self, code: IndicatorCode) -> WidgetResult<IndicatorSeries> {
        let body = self.get_text(&self.config.series_url(code.as_str())).await?;
        let series = dto::parse_series(code, &body)?;

        log_info!(LogComponent::Infrastructure("Mindicador"), "📈 Loaded {} points for {}", series.len(), code);
        Ok(series)
    }
}
