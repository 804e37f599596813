use indicator_converter_wasm::domain::conversion::{ConversionRequest, ConversionResult};
use indicator_converter_wasm::domain::indicators::{IndicatorCode, IndicatorPoint, IndicatorSeries, currency_symbol};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn displayed_result_is_quotient_rounded_to_cents(amount_cents: u32, rate_cents: u32) -> TestResult {
    if amount_cents == 0 || rate_cents == 0 {
        return TestResult::discard();
    }
    let amount = amount_cents as f64 / 100.0;
    let rate = rate_cents as f64 / 100.0;

    let request = ConversionRequest::validate(&amount.to_string(), "dolar").unwrap();
    let result = ConversionResult::compute(request, rate).unwrap();

    let message = result.message();
    let shown: f64 = message.trim_start_matches("Resultado: $ ").parse().unwrap();
    let expected = (amount / rate * 100.0).round() / 100.0;

    TestResult::from_bool((shown - expected).abs() < 1e-9 && message.starts_with("Resultado: $ "))
}

#[quickcheck]
fn non_positive_amounts_are_rejected(amount: i32) -> TestResult {
    if amount > 0 {
        return TestResult::discard();
    }
    TestResult::from_bool(ConversionRequest::validate(&amount.to_string(), "euro").is_err())
}

#[quickcheck]
fn chart_window_is_reversed_prefix(values: Vec<u16>) -> bool {
    let points: Vec<_> = values
        .iter()
        .enumerate()
        .map(|(i, v)| IndicatorPoint::new(format!("day-{i}T00:00:00Z"), *v as f64))
        .collect();
    let series = IndicatorSeries::new(IndicatorCode::Uf, points);

    let data = series.chart_data(10);
    let expected_len = values.len().min(10);
    let mut expected: Vec<f64> = values.iter().take(10).map(|v| *v as f64).collect();
    expected.reverse();

    data.values.len() == expected_len
        && data.labels.len() == expected_len
        && data.values == expected
        && data.labels.iter().rev().enumerate().all(|(i, label)| *label == format!("day-{i}"))
}

#[quickcheck]
fn unknown_codes_have_no_symbol(code: String) -> bool {
    match code.as_str() {
        "uf" => currency_symbol(&code) == "UF",
        "dolar" => currency_symbol(&code) == "$",
        "euro" => currency_symbol(&code) == "€",
        _ => currency_symbol(&code).is_empty(),
    }
}
