use crate::domain::{
    errors::WidgetResult,
    indicators::{IndicatorOption, IndicatorRepository},
    logging::LogComponent,
};
use crate::{log_error, log_info};

pub const CATALOG_FETCH_ERROR: &str = "Error al obtener las divisas desde la API";

/// Use Case: fill the indicator dropdown on page load
pub struct LoadCatalogUseCase<R: IndicatorRepository> {
    repository: R,
}

impl<R: IndicatorRepository> LoadCatalogUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Options for `uf`, `dolar` and `euro`, in that order.
    pub async fn execute(&self) -> WidgetResult<Vec<IndicatorOption>> {
        log_info!(LogComponent::Application("LoadCatalog"), "📡 Loading indicator catalog...");

        let options = self
            .repository
            .fetch_catalog()
            .await
            .map_err(|e| e.with_context(CATALOG_FETCH_ERROR))
            .and_then(|catalog| catalog.options());

        match &options {
            Ok(options) => {
                log_info!(LogComponent::Application("LoadCatalog"), "✅ {} indicators ready", options.len());
            }
            Err(e) => {
                log_error!(LogComponent::Application("LoadCatalog"), "❌ Catalog failed: {e}");
            }
        }

        options
    }
}
