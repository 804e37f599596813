use crate::domain::{
    chart::{ChartData, ChartSlot, ChartStyle, ChartSurface},
    errors::WidgetResult,
    logging::LogComponent,
};
use crate::{log_debug, log_info};

/// Draws the history chart, keeping exactly one chart on the surface
pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    style: ChartStyle,
    slot: ChartSlot<S::Handle>,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, ChartStyle::default())
    }

    pub fn with_style(surface: S, style: ChartStyle) -> Self {
        Self { surface, style, slot: ChartSlot::new() }
    }

    /// Destroy the current chart, then draw `labels`/`values` for `code`.
    pub fn render(&mut self, labels: Vec<String>, values: Vec<f64>, code: &str) -> WidgetResult<()> {
        self.render_data(&ChartData::new(labels, values, code))
    }

    pub fn render_data(&mut self, data: &ChartData) -> WidgetResult<()> {
        if self.slot.is_occupied() {
            log_debug!(LogComponent::Application("ChartRenderer"), "Destroying previous chart");
        }

        let (surface, style) = (&self.surface, &self.style);
        self.slot.replace_with(|| surface.draw(data, style))?;

        log_info!(
            LogComponent::Application("ChartRenderer"),
            "📊 Chart #{} drawn: {}",
            self.slot.generation(),
            data.dataset_label
        );
        Ok(())
    }

    pub fn has_chart(&self) -> bool {
        self.slot.is_occupied()
    }

    pub fn slot(&self) -> &ChartSlot<S::Handle> {
        &self.slot
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clear(&mut self) {
        self.slot.clear();
    }
}
