#![cfg(target_arch = "wasm32")]
use indicator_converter_wasm::application::ChartRenderer;
use indicator_converter_wasm::domain::chart::ChartStyle;
use indicator_converter_wasm::infrastructure::CanvasSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn blank_data_url(width: u32, height: u32) -> String {
    let document = web_sys::window().unwrap().document().unwrap();
    let blank = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    blank.set_width(width);
    blank.set_height(height);
    blank.to_data_url().unwrap()
}

fn mount_canvas(id: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn renders_and_replaces_history_chart() {
    let canvas = mount_canvas("history-test");
    let mut renderer = ChartRenderer::new(CanvasSurface::new("history-test", 400, 200));

    renderer
        .render(vec!["2024-05-09".into(), "2024-05-10".into()], vec![931.2, 928.44], "dolar")
        .unwrap();
    let first = canvas.to_data_url().unwrap();

    renderer.render(vec!["2024-05-10".into()], vec![1000.5], "euro").unwrap();
    let second = canvas.to_data_url().unwrap();

    assert_eq!(canvas.width(), 400);
    assert_ne!(first, second);
    assert_eq!(renderer.slot().generation(), 2);
    assert!(renderer.slot().current().is_some_and(|chart| !chart.is_destroyed()));
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_rendering_error() {
    let mut renderer = ChartRenderer::new(CanvasSurface::new("does-not-exist", 400, 200));
    let err = renderer.render(vec![], vec![], "uf").unwrap_err();
    assert!(err.user_message().contains("does-not-exist"));
}

#[wasm_bindgen_test]
fn failed_draw_leaves_a_blank_canvas() {
    let canvas = mount_canvas("history-broken");
    // arc() rejects a negative radius after legend and axes are painted
    let style = ChartStyle { point_radius: -1.0, ..ChartStyle::default() };
    let mut renderer = ChartRenderer::with_style(CanvasSurface::new("history-broken", 400, 200), style);

    let err = renderer
        .render(vec!["2024-05-09".into(), "2024-05-10".into()], vec![931.2, 928.44], "dolar")
        .unwrap_err();

    assert!(err.user_message().starts_with("Error: "));
    assert!(!renderer.has_chart());
    assert_eq!(canvas.to_data_url().unwrap(), blank_data_url(400, 200));
}
