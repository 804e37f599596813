use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartData, ChartHandle, ChartLayout, ChartStyle, ChartSurface, ValueScale},
    errors::{ConversionError, WidgetResult},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

fn rendering_error(e: JsValue) -> ConversionError {
    ConversionError::Rendering(format!("{e:?}"))
}

/// Canvas 2D surface the history chart is drawn onto
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.into(), width, height }
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> WidgetResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ConversionError::Rendering("document not available".to_string()))?;

        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| ConversionError::Rendering(format!("canvas '{}' not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ConversionError::Rendering(format!("'{}' is not a canvas", self.canvas_id)))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(rendering_error)?
            .ok_or_else(|| ConversionError::Rendering("2D context not available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ConversionError::Rendering("failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }
}

impl ChartSurface for CanvasSurface {
    type Handle = CanvasLineChart;

    fn draw(&self, data: &ChartData, style: &ChartStyle) -> WidgetResult<CanvasLineChart> {
        let (_canvas, context) = self.get_canvas_context()?;
        let mut chart = CanvasLineChart {
            context,
            layout: ChartLayout::new(self.width, self.height),
            destroyed: false,
        };
        if let Err(e) = chart.render(data, style) {
            chart.destroy();
            return Err(rendering_error(e));
        }

        log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Rendered '{}' with {} points",
            data.dataset_label,
            data.len()
        );
        Ok(chart)
    }
}

/// A line chart currently painted on the canvas
pub struct CanvasLineChart {
    context: CanvasRenderingContext2d,
    layout: ChartLayout,
    destroyed: bool,
}

impl CanvasLineChart {
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn render(&self, data: &ChartData, style: &ChartStyle) -> Result<(), JsValue> {
        let ctx = &self.context;
        let layout = &self.layout;

        ctx.clear_rect(0.0, 0.0, layout.width, layout.height);
        ctx.set_fill_style_str(&style.background);
        ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

        let scale = ValueScale::fit(&data.values, style.begin_at_zero, style.max_ticks);

        self.render_legend(data, style)?;
        self.render_value_axis(&scale, style)?;
        self.render_category_axis(data, style)?;

        if data.is_empty() {
            log_warn!(LogComponent::Infrastructure("CanvasRenderer"), "No points to render");
            return Ok(());
        }

        self.render_line(data, &scale, style)
    }

    fn render_legend(&self, data: &ChartData, style: &ChartStyle) -> Result<(), JsValue> {
        let ctx = &self.context;
        let center = self.layout.width / 2.0;
        let baseline = self.layout.padding + 16.0;

        ctx.set_font(&style.font);
        let text_width = ctx.measure_text(&data.dataset_label)?.width();
        let swatch_x = center - text_width / 2.0 - 48.0;

        // legend swatch
        ctx.set_stroke_style_str(&style.line_color);
        ctx.set_line_width(style.line_width);
        ctx.stroke_rect(swatch_x, baseline - 10.0, 40.0, 12.0);

        ctx.set_fill_style_str(&style.text_color);
        ctx.set_text_align("left");
        ctx.fill_text(&data.dataset_label, swatch_x + 48.0, baseline)
    }

    fn render_value_axis(&self, scale: &ValueScale, style: &ChartStyle) -> Result<(), JsValue> {
        let ctx = &self.context;
        let layout = &self.layout;

        ctx.set_font(&style.font);
        ctx.set_text_align("right");
        ctx.set_line_width(1.0);

        for tick in scale.ticks() {
            let y = layout.value_to_y(tick, scale);

            ctx.set_stroke_style_str(&style.grid_color);
            ctx.begin_path();
            ctx.move_to(layout.plot_left(), y);
            ctx.line_to(layout.plot_right(), y);
            ctx.stroke();

            ctx.set_fill_style_str(&style.text_color);
            ctx.fill_text(&format_tick(tick, scale.step), layout.plot_left() - 6.0, y + 4.0)?;
        }
        Ok(())
    }

    fn render_category_axis(&self, data: &ChartData, style: &ChartStyle) -> Result<(), JsValue> {
        let ctx = &self.context;
        let layout = &self.layout;
        let count = data.labels.len();

        ctx.set_font(&style.font);
        ctx.set_text_align("center");
        ctx.set_fill_style_str(&style.text_color);

        for (i, label) in data.labels.iter().enumerate() {
            let x = layout.index_to_x(i, count);
            ctx.fill_text(label, x, layout.plot_bottom() + 18.0)?;
        }
        Ok(())
    }

    fn render_line(&self, data: &ChartData, scale: &ValueScale, style: &ChartStyle) -> Result<(), JsValue> {
        let ctx = &self.context;
        let layout = &self.layout;
        let count = data.values.len();
        let points: Vec<(f64, f64)> = data
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (layout.index_to_x(i, count), layout.value_to_y(*v, scale)))
            .collect();

        ctx.set_stroke_style_str(&style.line_color);
        ctx.set_line_width(style.line_width);
        ctx.begin_path();
        for (i, (x, y)) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(*x, *y);
            } else {
                ctx.line_to(*x, *y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style_str(&style.background);
        for (x, y) in &points {
            ctx.begin_path();
            ctx.arc(*x, *y, style.point_radius, 0.0, std::f64::consts::TAU)?;
            ctx.fill();
            ctx.stroke();
        }
        Ok(())
    }
}

impl ChartHandle for CanvasLineChart {
    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.context.clear_rect(0.0, 0.0, self.layout.width, self.layout.height);
        self.destroyed = true;
    }
}

/// Tick label with as many decimals as the step needs
fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10()).ceil() as usize };
    format!("{:.*}", decimals, value)
}
