use crate::domain::errors::{ConversionError, WidgetResult};
use crate::domain::indicators::{IndicatorCatalog, IndicatorCode, IndicatorMeta, IndicatorPoint, IndicatorSeries};
use crate::domain::logging::LogComponent;
use crate::log_warn;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// DTO for one catalog entry (`https://mindicador.cl/api`)
#[derive(Debug, Deserialize)]
pub struct CatalogEntryDto {
    pub nombre: String,
}

impl CatalogEntryDto {
    pub fn to_domain(self) -> IndicatorMeta {
        IndicatorMeta { name: self.nombre }
    }
}

/// DTO for `https://mindicador.cl/api/<code>`
#[derive(Debug, Deserialize)]
pub struct SeriesResponseDto {
    pub codigo: Option<String>,
    pub serie: Option<Vec<SeriesPointDto>>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesPointDto {
    pub fecha: String,
    pub valor: f64,
}

impl SeriesPointDto {
    pub fn to_domain(self) -> IndicatorPoint {
        IndicatorPoint::new(self.fecha, self.valor)
    }
}

/// Parse the catalog body.
///
/// The top level mixes indicator objects with plain fields (`version`,
/// `autor`, `fecha`); only objects are read. An allowed indicator whose object
/// does not have the expected shape is a malformed response, other
/// unreadable entries are skipped.
pub fn parse_catalog(body: &str) -> WidgetResult<IndicatorCatalog> {
    let root: HashMap<String, Value> = serde_json::from_str(body)?;

    let mut entries = HashMap::new();
    for (key, value) in root {
        if !value.is_object() {
            continue;
        }
        match serde_json::from_value::<CatalogEntryDto>(value) {
            Ok(dto) => {
                let meta = dto.to_domain();
                entries.insert(key, meta);
            }
            Err(e) if IndicatorCode::from_selection(&key).is_some() => {
                return Err(ConversionError::MalformedResponse(format!("{key}: {e}")));
            }
            Err(_) => continue,
        }
    }

    Ok(IndicatorCatalog::new(entries))
}

/// Parse a series body. A missing or empty `serie` is `EmptySeries`.
pub fn parse_series(code: IndicatorCode, body: &str) -> WidgetResult<IndicatorSeries> {
    let dto: SeriesResponseDto = serde_json::from_str(body)?;

    if let Some(reported) = dto.codigo.as_deref() {
        if reported != code.as_str() {
            log_warn!(
                LogComponent::Infrastructure("Mindicador"),
                "⚠️ Asked for '{}' but the service answered '{}'",
                code,
                reported
            );
        }
    }

    let points: Vec<IndicatorPoint> = dto
        .serie
        .unwrap_or_default()
        .into_iter()
        .map(SeriesPointDto::to_domain)
        .collect();

    if points.is_empty() {
        return Err(ConversionError::EmptySeries);
    }

    Ok(IndicatorSeries::new(code, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "version": "1.7.0",
        "autor": "mindicador.cl",
        "fecha": "2024-05-10T20:00:00.000Z",
        "uf": {"codigo": "uf", "nombre": "Unidad de fomento (UF)", "unidad_medida": "Pesos", "fecha": "2024-05-10T04:00:00.000Z", "valor": 37412.85},
        "dolar": {"codigo": "dolar", "nombre": "Dólar observado", "unidad_medida": "Pesos", "fecha": "2024-05-10T04:00:00.000Z", "valor": 928.44},
        "euro": {"codigo": "euro", "nombre": "Euro", "unidad_medida": "Pesos", "fecha": "2024-05-10T04:00:00.000Z", "valor": 1000.5},
        "tasa_desempleo": {"codigo": "tasa_desempleo", "nombre": "Tasa de desempleo", "unidad_medida": "Porcentaje", "fecha": "2024-03-01T03:00:00.000Z", "valor": 8.7}
    }"#;

    #[test]
    fn catalog_reads_indicator_objects_only() {
        let catalog = parse_catalog(CATALOG).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("dolar").map(|m| m.name.as_str()), Some("Dólar observado"));
        assert!(catalog.get("version").is_none());
    }

    #[test]
    fn catalog_without_name_for_allowed_code_is_malformed() {
        let body = r#"{"dolar": {"codigo": "dolar", "valor": 900}}"#;
        assert!(matches!(parse_catalog(body), Err(ConversionError::MalformedResponse(m)) if m.starts_with("dolar")));
    }

    #[test]
    fn catalog_skips_unknown_broken_entries() {
        let body = r#"{"bitcoin": {"valor": 1}, "euro": {"nombre": "Euro"}}"#;
        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("euro").map(|m| m.name.as_str()), Some("Euro"));
    }

    #[test]
    fn catalog_that_is_not_json_is_malformed() {
        assert!(matches!(parse_catalog("<html>"), Err(ConversionError::MalformedResponse(_))));
    }

    #[test]
    fn series_keeps_service_order() {
        let body = r#"{
            "codigo": "dolar",
            "nombre": "Dólar observado",
            "serie": [
                {"fecha": "2024-05-10T04:00:00.000Z", "valor": 928.44},
                {"fecha": "2024-05-09T04:00:00.000Z", "valor": 931.2}
            ]
        }"#;
        let series = parse_series(IndicatorCode::Dolar, body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest().map(|p| p.value), Some(928.44));
        assert_eq!(series.points()[1].date_label(), "2024-05-09");
    }

    #[test]
    fn empty_or_missing_series() {
        assert_eq!(
            parse_series(IndicatorCode::Euro, r#"{"codigo": "euro", "serie": []}"#),
            Err(ConversionError::EmptySeries)
        );
        assert_eq!(parse_series(IndicatorCode::Euro, r#"{"codigo": "euro"}"#), Err(ConversionError::EmptySeries));
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let body = r#"{"serie": [{"fecha": "2024-05-10T04:00:00.000Z", "valor": "928"}]}"#;
        assert!(matches!(parse_series(IndicatorCode::Dolar, body), Err(ConversionError::MalformedResponse(_))));
    }
}
