use super::{IndicatorCatalog, IndicatorCode, IndicatorSeries};
use crate::domain::errors::WidgetResult;

/// Source of indicator data.
///
/// Implementations report transport and status problems as
/// `ConversionError::FetchFailure` carrying the raw reason; the use cases
/// add the user-facing context.
#[allow(async_fn_in_trait)]
pub trait IndicatorRepository {
    async fn fetch_catalog(&self) -> WidgetResult<IndicatorCatalog>;

    async fn fetch_series(&self, code: IndicatorCode) -> WidgetResult<IndicatorSeries>;
}
