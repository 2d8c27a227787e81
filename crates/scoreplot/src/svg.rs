use crate::axis::{format_tick, nice_ticks, AxisRange};
use crate::plot::{Band, HLine, Line, ScorePlot, Stroke};
use std::path::Path;

const POINTS_PER_INCH: f64 = 72.0;
const MARGIN_LEFT: f64 = 58.0;
const MARGIN_RIGHT: f64 = 14.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 40.0;
const TICK_LEN: f64 = 4.0;
const MAX_TICKS: usize = 8;
const TITLE_FONT_SIZE: f64 = 12.0;
const LABEL_FONT_SIZE: f64 = 10.0;
const TICK_FONT_SIZE: f64 = 8.0;
const DASH_PATTERN: &str = "5.5,2.5";

pub fn generate_string(plot: &ScorePlot) -> String {
    let width = plot.size.0 * POINTS_PER_INCH;
    let height = plot.size.1 * POINTS_PER_INCH;
    let mut generator = Generator::new(
        (width, height),
        plot.x_range(),
        plot.y_range(),
        &plot.font_family,
    );
    generator.generate(plot);
    generator.svg
}

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| e.to_string())
}

struct Generator {
    dims: (f64, f64),
    x_range: AxisRange,
    y_range: AxisRange,
    font_family: String,
    svg: String,
}

impl Generator {
    fn new(dims: (f64, f64), x_range: AxisRange, y_range: AxisRange, font_family: &str) -> Self {
        Self {
            dims,
            x_range,
            y_range,
            font_family: escape(font_family),
            svg: String::new(),
        }
    }

    fn generate(&mut self, plot: &ScorePlot) {
        self.start_svg();
        self.add_background();
        self.add_clip_path();

        for band in &plot.bands {
            self.plot_band(band);
        }
        for hline in &plot.hlines {
            self.plot_hline(hline);
        }
        for line in &plot.lines {
            self.plot_line(line);
        }

        self.plot_frame();
        self.plot_x_ticks();
        self.plot_y_ticks();
        self.plot_labels(plot);
        self.end_svg();
    }

    fn plot_band(&mut self, band: &Band) {
        let x1 = self.to_x(band.start.min(band.end));
        let x2 = self.to_x(band.start.max(band.end));
        let pos = format!("x=\"{}\" y=\"{}\"", x1, MARGIN_TOP);
        let dim = format!("height=\"{}\" width=\"{}\"", self.plot_height(), x2 - x1);
        let style = format!(
            "fill=\"{}\" fill-opacity=\"{}\" stroke=\"none\"",
            band.color, band.opacity
        );
        self.emit(format!(
            "<rect {} {} {} clip-path=\"url(#plot-area)\" />",
            pos, dim, style
        ));
    }

    fn plot_hline(&mut self, hline: &HLine) {
        if !hline.y.is_finite() {
            return;
        }
        let y = self.to_y(hline.y);
        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", MARGIN_LEFT, y);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", MARGIN_LEFT + self.plot_width(), y);
        let mut style = format!("stroke=\"{}\" stroke-width=\"{}\"", hline.color, hline.width);
        if hline.stroke == Stroke::Dashed {
            style += &format!(" stroke-dasharray=\"{}\"", DASH_PATTERN);
        }
        self.emit(format!("<line {} {} {} />", x1y1, x2y2, style));
    }

    fn plot_line(&mut self, line: &Line) {
        let mut path = String::new();
        let mut pen_down = false;
        for (x, y) in &line.points {
            if !x.is_finite() || !y.is_finite() {
                pen_down = false;
                continue;
            }
            let cmd = if pen_down { 'L' } else { 'M' };
            path += &format!("{} {} {} ", cmd, self.to_x(*x), self.to_y(*y));
            pen_down = true;
        }
        if path.is_empty() {
            return;
        }

        let style = format!(
            "stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" fill=\"none\"",
            line.color, line.width
        );
        self.emit(format!(
            "<path d=\"{}\" {} clip-path=\"url(#plot-area)\" />",
            path.trim_end(),
            style
        ));
    }

    fn plot_frame(&mut self) {
        let dimensions = format!(
            "width=\"{}\" height=\"{}\"",
            self.plot_width(),
            self.plot_height()
        );
        let pos = format!("x=\"{}\" y=\"{}\"", MARGIN_LEFT, MARGIN_TOP);
        let style = r##"stroke="#000000" stroke-width="0.8" fill="none""##;
        self.emit(format!("<rect {} {} {} />", dimensions, pos, style));
    }

    fn plot_x_ticks(&mut self) {
        let (step, ticks) = nice_ticks(&self.x_range, MAX_TICKS);
        let y = MARGIN_TOP + self.plot_height();
        for tick in ticks {
            let x = self.to_x(tick);
            self.add_tick_mark((x, y), (x, y + TICK_LEN));
            let point = format!("x=\"{}\" y=\"{}\"", x, y + TICK_LEN + TICK_FONT_SIZE + 1.0);
            self.add_text(&point, TICK_FONT_SIZE, "middle", &format_tick(tick, step));
        }
    }

    fn plot_y_ticks(&mut self) {
        let (step, ticks) = nice_ticks(&self.y_range, MAX_TICKS);
        for tick in ticks {
            let y = self.to_y(tick);
            self.add_tick_mark((MARGIN_LEFT - TICK_LEN, y), (MARGIN_LEFT, y));
            let point = format!(
                "x=\"{}\" y=\"{}\"",
                MARGIN_LEFT - TICK_LEN - 2.0,
                y + TICK_FONT_SIZE / 3.0
            );
            self.add_text(&point, TICK_FONT_SIZE, "end", &format_tick(tick, step));
        }
    }

    fn plot_labels(&mut self, plot: &ScorePlot) {
        let center_x = MARGIN_LEFT + self.plot_width() / 2.0;

        let point = format!("x=\"{}\" y=\"{}\"", center_x, MARGIN_TOP - 9.0);
        self.add_text(&point, TITLE_FONT_SIZE, "middle", &plot.title);

        let point = format!("x=\"{}\" y=\"{}\"", center_x, self.dims.1 - 8.0);
        self.add_text(&point, LABEL_FONT_SIZE, "middle", &plot.x_label);

        let (x, y) = (14.0, MARGIN_TOP + self.plot_height() / 2.0);
        let point = format!(
            "x=\"{}\" y=\"{}\" transform=\"rotate(-90 {} {})\"",
            x, y, x, y
        );
        self.add_text(&point, LABEL_FONT_SIZE, "middle", &plot.y_label);
    }

    fn add_tick_mark(&mut self, from: (f64, f64), to: (f64, f64)) {
        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", from.0, from.1);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", to.0, to.1);
        let style = r##"stroke="#000000" stroke-width="0.8""##;
        self.emit(format!("<line {} {} {} />", x1y1, x2y2, style));
    }

    fn add_text(&mut self, point: &str, font_size: f64, anchor: &str, text: &str) {
        if text.is_empty() {
            return;
        }
        let style = format!(
            "font-family=\"{}\" font-size=\"{}px\" text-anchor=\"{}\"",
            self.font_family, font_size, anchor
        );
        self.emit(format!("<text {} {} >{}</text>", point, style, escape(text)));
    }

    fn add_clip_path(&mut self) {
        let rect = format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" />",
            MARGIN_LEFT,
            MARGIN_TOP,
            self.plot_width(),
            self.plot_height()
        );
        self.emit(format!(
            "<defs><clipPath id=\"plot-area\">{}</clipPath></defs>",
            rect
        ));
    }

    fn start_svg(&mut self) {
        self.emit(r#"<?xml version="1.0"?>"#.to_string());
        let line = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#;
        self.emit(format!(
            "{}width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            line, self.dims.0, self.dims.1, self.dims.0, self.dims.1
        ));
    }

    fn end_svg(&mut self) {
        self.emit("</svg>".to_string());
    }

    fn add_background(&mut self) {
        self.emit(r#"<rect width="100%" height="100%" fill="white"/>"#.to_string());
    }

    fn emit(&mut self, line: String) {
        self.svg.push_str(&line);
        self.svg.push('\n');
    }

    fn plot_width(&self) -> f64 {
        self.dims.0 - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        self.dims.1 - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn to_x(&self, x: f64) -> f64 {
        MARGIN_LEFT + self.x_range.fraction(x) * self.plot_width()
    }

    fn to_y(&self, y: f64) -> f64 {
        MARGIN_TOP + (1.0 - self.y_range.fraction(y)) * self.plot_height()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
