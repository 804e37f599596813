use crate::domain::errors::{ConversionError, WidgetResult};
use crate::domain::indicators::IndicatorCode;
use derive_more::Display;
use std::str::FromStr;

/// Value Object - a positive, finite amount of local currency (CLP)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> WidgetResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ConversionError::InvalidAmount)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = ConversionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConversionError::InvalidAmount);
        }
        let value = trimmed.parse::<f64>().map_err(|_| ConversionError::InvalidAmount)?;
        Self::new(value)
    }
}

/// Validated form input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub amount: Amount,
    pub code: IndicatorCode,
}

impl ConversionRequest {
    /// Amount is checked before the selection, matching the order of the form.
    pub fn validate(raw_amount: &str, raw_code: &str) -> WidgetResult<Self> {
        let amount = raw_amount.parse::<Amount>()?;
        let code = IndicatorCode::from_selection(raw_code).ok_or(ConversionError::InvalidCurrency)?;
        Ok(Self { amount, code })
    }
}

/// Outcome of one conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub amount: f64,
    pub rate: f64,
    pub converted: f64,
    pub code: IndicatorCode,
}

impl ConversionResult {
    pub fn compute(request: ConversionRequest, rate: f64) -> WidgetResult<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConversionError::MalformedResponse(format!(
                "valor no válido para {}: {rate}",
                request.code
            )));
        }
        let amount = request.amount.value();
        Ok(Self { amount, rate, converted: amount / rate, code: request.code })
    }

    /// Converted amount rounded half away from zero to cents
    pub fn rounded(&self) -> f64 {
        round_cents(self.converted)
    }

    /// `Resultado: <symbol> <amount with two decimals>`
    pub fn message(&self) -> String {
        format!("Resultado: {} {:.2}", self.code.symbol(), self.rounded())
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
