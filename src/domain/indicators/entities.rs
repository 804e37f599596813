use super::value_objects::{IndicatorCode, IndicatorOption};
use crate::domain::chart::ChartData;
use crate::domain::errors::{ConversionError, WidgetResult};
use std::collections::HashMap;

/// Metadata the service publishes for one indicator
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorMeta {
    pub name: String,
}

/// Domain entity - indicator code to metadata, as published by the catalog endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorCatalog {
    entries: HashMap<String, IndicatorMeta>,
}

impl IndicatorCatalog {
    pub fn new(entries: HashMap<String, IndicatorMeta>) -> Self {
        Self { entries }
    }

    pub fn get(&self, code: &str) -> Option<&IndicatorMeta> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dropdown options for the allowed codes, in `IndicatorCode::ALLOWED` order.
    ///
    /// All three codes must be present; a partial dropdown is never produced.
    pub fn options(&self) -> WidgetResult<Vec<IndicatorOption>> {
        IndicatorCode::ALLOWED
            .iter()
            .map(|code| {
                self.get(code.as_str())
                    .map(|meta| IndicatorOption { value: *code, label: meta.name.clone() })
                    .ok_or_else(|| ConversionError::MissingIndicator(code.as_str().to_string()))
            })
            .collect()
    }
}

/// One dated value of a series
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    /// ISO-8601 date-time as sent by the service
    pub date: String,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self { date: date.into(), value }
    }

    /// Calendar date part, everything before the first `T`.
    pub fn date_label(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }
}

/// Domain entity - time series of an indicator, newest point first
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub code: IndicatorCode,
    points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    pub fn new(code: IndicatorCode, points: Vec<IndicatorPoint>) -> Self {
        Self { code, points }
    }

    pub fn points(&self) -> &[IndicatorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point; the service sends newest first.
    pub fn latest(&self) -> Option<&IndicatorPoint> {
        self.points.first()
    }

    /// The first `window` points, reordered oldest to newest.
    pub fn recent_window(&self, window: usize) -> Vec<&IndicatorPoint> {
        let mut selected: Vec<_> = self.points.iter().take(window).collect();
        selected.reverse();
        selected
    }

    pub fn chart_data(&self, window: usize) -> ChartData {
        let recent = self.recent_window(window);
        let labels = recent.iter().map(|p| p.date_label().to_string()).collect();
        let values = recent.iter().map(|p| p.value).collect();
        ChartData::new(labels, values, self.code.as_str())
    }
}
