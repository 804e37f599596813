use indicator_converter_wasm::application::ChartRenderer;
use indicator_converter_wasm::domain::chart::{ChartData, ChartHandle, ChartStyle, ChartSurface};
use indicator_converter_wasm::domain::errors::{ConversionError, WidgetResult};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Keeps track of how many charts are alive on the fake surface
#[derive(Default)]
struct FakeSurface {
    live: Rc<Cell<usize>>,
    drawn: RefCell<Vec<ChartData>>,
    fail_next: Cell<bool>,
}

struct FakeChart {
    live: Rc<Cell<usize>>,
}

impl ChartHandle for FakeChart {
    fn destroy(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl ChartSurface for FakeSurface {
    type Handle = FakeChart;

    fn draw(&self, data: &ChartData, _style: &ChartStyle) -> WidgetResult<FakeChart> {
        if self.fail_next.replace(false) {
            return Err(ConversionError::Rendering("canvas 'history' not found".into()));
        }
        // a new chart must never be created while another is alive
        assert_eq!(self.live.get(), 0, "previous chart still attached");
        self.live.set(self.live.get() + 1);
        self.drawn.borrow_mut().push(data.clone());
        Ok(FakeChart { live: self.live.clone() })
    }
}

fn labels(n: usize) -> Vec<String> {
    (1..=n).map(|d| format!("2024-05-{d:02}")).collect()
}

#[test]
fn two_renders_leave_one_live_chart() {
    let mut renderer = ChartRenderer::new(FakeSurface::default());

    renderer.render(labels(3), vec![1.0, 2.0, 3.0], "uf").unwrap();
    renderer.render(labels(2), vec![5.0, 4.0], "dolar").unwrap();

    assert_eq!(renderer.surface().live.get(), 1);
    assert_eq!(renderer.slot().generation(), 2);
    assert!(renderer.has_chart());
}

#[test]
fn render_passes_labels_values_and_caption() {
    let mut renderer = ChartRenderer::new(FakeSurface::default());

    renderer.render(labels(2), vec![930.5, 931.0], "euro").unwrap();

    let drawn = renderer.surface().drawn.borrow();
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].labels, vec!["2024-05-01", "2024-05-02"]);
    assert_eq!(drawn[0].values, vec![930.5, 931.0]);
    assert_eq!(drawn[0].dataset_label, "Historial últimos 10 días de EURO");
}

#[test]
fn failed_render_leaves_nothing_attached() {
    let mut renderer = ChartRenderer::new(FakeSurface::default());
    renderer.render(labels(1), vec![1.0], "uf").unwrap();

    renderer.surface().fail_next.set(true);
    let err = renderer.render(labels(1), vec![2.0], "uf").unwrap_err();

    assert!(matches!(err, ConversionError::Rendering(_)));
    assert_eq!(renderer.surface().live.get(), 0);
    assert!(!renderer.has_chart());
}

#[test]
fn clear_destroys_the_chart() {
    let mut renderer = ChartRenderer::new(FakeSurface::default());
    renderer.render(labels(1), vec![1.0], "uf").unwrap();

    renderer.clear();

    assert_eq!(renderer.surface().live.get(), 0);
}
