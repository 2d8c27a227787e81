use crate::axis::AxisRange;

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (10.0, 4.5);
pub const DEFAULT_DPI: u32 = 200;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Stroke {
    Solid,
    Dashed,
}

/// Polyline through `points`; non-finite coordinates break the line.
#[derive(Debug)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: String,
    pub width: f64,
}

/// Horizontal line spanning the whole plot area at `y`.
#[derive(Debug)]
pub struct HLine {
    pub y: f64,
    pub color: String,
    pub width: f64,
    pub stroke: Stroke,
}

/// Vertical band covering `[start, end]` on the x axis.
#[derive(Debug)]
pub struct Band {
    pub start: f64,
    pub end: f64,
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug)]
pub struct ScorePlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<Line>,
    pub hlines: Vec<HLine>,
    pub bands: Vec<Band>,
    pub font_family: String,
    /// Figure size in inches
    pub size: (f64, f64),
    /// Raster resolution; only used for PNG output
    pub dpi: u32,
}

impl ScorePlot {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            lines: Vec::new(),
            hlines: Vec::new(),
            bands: Vec::new(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FIGURE_SIZE,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn set_font_family(&mut self, font_family: &str) {
        self.font_family = font_family.to_string();
    }

    pub(crate) fn x_range(&self) -> AxisRange {
        let line_xs = self
            .lines
            .iter()
            .flat_map(|line| line.points.iter().map(|(x, _)| *x));
        let band_xs = self.bands.iter().flat_map(|band| [band.start, band.end]);
        AxisRange::from_values(line_xs.chain(band_xs))
    }

    pub(crate) fn y_range(&self) -> AxisRange {
        let line_ys = self
            .lines
            .iter()
            .flat_map(|line| line.points.iter().map(|(_, y)| *y));
        let hline_ys = self.hlines.iter().map(|hline| hline.y);
        AxisRange::from_values(line_ys.chain(hline_ys))
    }
}
