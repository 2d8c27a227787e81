use super::region::Region;
use scoreplot::{Band, HLine, Line, ScorePlot, Stroke};
use std::fmt;

const SCORE_LINE_WIDTH: f64 = 1.5;
const THRESHOLD_LINE_WIDTH: f64 = 1.0;
const REGION_OPACITY: f64 = 0.2;

#[derive(Debug, PartialEq, Clone)]
pub enum Color {
    Blue,
    Orange,
    Teal,
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Blue => write!(formatter, "#1383C6"),
            Color::Orange => write!(formatter, "#E16A2C"),
            Color::Teal => write!(formatter, "#009CA2"),
        }
    }
}

/// Score line over 1-based residue numbers, a dashed line at the threshold,
/// and one shaded band per called region.
pub fn build_score_plot(
    protein_id: &str,
    scores: &[f64],
    threshold: f64,
    regions: &[Region],
) -> ScorePlot {
    let title_id = protein_id.trim_start_matches('>');
    let mut plot = ScorePlot::new(format!("DFLpred scores — {}", title_id));
    plot.x_label = "Residue number".to_string();
    plot.y_label = "DFLpred score".to_string();

    plot.lines.push(Line {
        points: (1usize..).zip(scores).map(|(i, s)| (i as f64, *s)).collect(),
        color: Color::Blue.to_string(),
        width: SCORE_LINE_WIDTH,
    });

    plot.hlines.push(HLine {
        y: threshold,
        color: Color::Orange.to_string(),
        width: THRESHOLD_LINE_WIDTH,
        stroke: Stroke::Dashed,
    });

    plot.bands = regions
        .iter()
        .map(|region| Band {
            start: region.start as f64,
            end: region.end as f64,
            color: Color::Teal.to_string(),
            opacity: REGION_OPACITY,
        })
        .collect();

    plot
}
