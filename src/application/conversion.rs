use crate::config::DEFAULT_HISTORY_WINDOW;
use crate::domain::{
    chart::ChartData,
    conversion::{ConversionRequest, ConversionResult},
    errors::{ConversionError, WidgetResult},
    indicators::IndicatorRepository,
    logging::LogComponent,
};
use crate::{log_info, log_warn};

pub const SERIES_FETCH_ERROR: &str = "Error al obtener los datos de la API";

/// Everything a successful submission produces
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub result: ConversionResult,
    pub chart: ChartData,
}

impl Conversion {
    pub fn message(&self) -> String {
        self.result.message()
    }
}

/// Use Case: convert an amount with the latest value of an indicator
pub struct ConvertAmountUseCase<R: IndicatorRepository> {
    repository: R,
    history_window: usize,
}

impl<R: IndicatorRepository> ConvertAmountUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository, history_window: DEFAULT_HISTORY_WINDOW }
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    /// Validate the raw form values, fetch the series and convert.
    ///
    /// Validation errors return before the repository is touched.
    pub async fn execute(&self, raw_amount: &str, raw_code: &str) -> WidgetResult<Conversion> {
        let request = ConversionRequest::validate(raw_amount, raw_code).inspect_err(|e| {
            log_warn!(LogComponent::Application("Convert"), "Rejected input: {e}");
        })?;

        log_info!(LogComponent::Application("Convert"), "🔄 Converting {} CLP to {}", request.amount, request.code);

        let series = self
            .repository
            .fetch_series(request.code)
            .await
            .map_err(|e| e.with_context(SERIES_FETCH_ERROR))?;

        let latest = series.latest().ok_or(ConversionError::EmptySeries)?;
        let result = ConversionResult::compute(request, latest.value)?;
        let chart = series.chart_data(self.history_window);

        log_info!(
            LogComponent::Application("Convert"),
            "✅ {} (rate {} on {})",
            result.message(),
            latest.value,
            latest.date_label()
        );

        Ok(Conversion { result, chart })
    }
}
