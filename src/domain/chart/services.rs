use super::{ChartData, ChartHandle, ChartStyle};
use crate::domain::errors::WidgetResult;

/// Something a line chart can be drawn onto (a canvas in the browser, a fake in tests).
pub trait ChartSurface {
    type Handle: ChartHandle;

    /// Draw `data` and hand back the live chart.
    fn draw(&self, data: &ChartData, style: &ChartStyle) -> WidgetResult<Self::Handle>;
}
