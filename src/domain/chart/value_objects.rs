/// Value Object - what one line chart shows
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, values: Vec<f64>, code: &str) -> Self {
        Self { dataset_label: Self::history_label(code), labels, values }
    }

    /// Legend caption, `Historial últimos 10 días de <CODE>`
    pub fn history_label(code: &str) -> String {
        format!("Historial últimos 10 días de {}", code.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Value Object - fixed visual style of the history chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub line_color: String,
    pub line_width: f64,
    pub point_radius: f64,
    pub background: String,
    pub grid_color: String,
    pub text_color: String,
    pub font: String,
    /// Chart.js `beginAtZero`
    pub begin_at_zero: bool,
    pub max_ticks: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: "rgba(75, 192, 192, 1)".to_string(),
            line_width: 2.0,
            point_radius: 3.0,
            background: "#ffffff".to_string(),
            grid_color: "rgba(0, 0, 0, 0.1)".to_string(),
            text_color: "#666666".to_string(),
            font: "12px sans-serif".to_string(),
            begin_at_zero: false,
            max_ticks: 6,
        }
    }
}

/// Upper bound on grid lines per axis
const TICK_LIMIT: usize = 64;

/// Value Object - vertical axis range with "nice" tick spacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueScale {
    pub fn fit(values: &[f64], begin_at_zero: bool, max_ticks: usize) -> Self {
        let (mut lo, mut hi) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if (hi - lo).abs() < f64::EPSILON {
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
            lo -= pad;
            hi += pad;
        }
        // no finite values, or a span wider than f64
        if !(hi - lo).is_finite() {
            lo = 0.0;
            hi = 1.0;
        }

        let intervals = max_ticks.max(2) - 1;
        let step = nice_step((hi - lo) / intervals as f64);

        Self { min: (lo / step).floor() * step, max: (hi / step).ceil() * step, step }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.range() / self.step).round() as usize).min(TICK_LIMIT);
        (0..=count).map(|i| self.min + i as f64 * self.step).collect()
    }

    /// 0.0 at `min`, 1.0 at `max`
    pub fn normalize(&self, value: f64) -> f64 {
        if self.range() == 0.0 {
            return 0.5;
        }
        (value - self.min) / self.range()
    }
}

/// 1, 2 or 5 times a power of ten, at least `raw`
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Value Object - pixel geometry of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub y_label_space: f64,
    pub x_label_space: f64,
    pub legend_space: f64,
}

impl ChartLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            padding: 10.0,
            y_label_space: 60.0,
            x_label_space: 30.0,
            legend_space: 30.0,
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.padding + self.y_label_space
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn plot_top(&self) -> f64 {
        self.padding + self.legend_space
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding - self.x_label_space
    }

    /// X of the `index`-th category; a single category sits in the middle.
    pub fn index_to_x(&self, index: usize, count: usize) -> f64 {
        let (left, right) = (self.plot_left(), self.plot_right());
        if count <= 1 {
            return (left + right) / 2.0;
        }
        left + index as f64 * (right - left) / (count - 1) as f64
    }

    pub fn value_to_y(&self, value: f64, scale: &ValueScale) -> f64 {
        let (top, bottom) = (self.plot_top(), self.plot_bottom());
        bottom - scale.normalize(value) * (bottom - top)
    }
}
