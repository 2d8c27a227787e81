/*!
This crate provides functionality to generate simple score plots: one or more
lines drawn over a numeric x axis, horizontal reference lines, and shaded
vertical bands marking intervals of interest. Plots carry a title, axis labels,
and automatically chosen tick marks. The crate supports rendering of score plots
as SVG, PNG, and PDF images.

Score plots are useful for showing per-position values along a sequence
together with a cutoff and the intervals that fall below it.
*/

mod axis;
mod image;
mod pdf;
mod plot;
mod png;
mod svg;

pub use image::generate as generate_image;
pub use plot::{Band, HLine, Line, ScorePlot, Stroke, DEFAULT_DPI};

use usvg::Tree;

pub fn prepare_svg_tree(svg_data: &[u8]) -> Result<Tree, String> {
    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_system_fonts();
    let tree = usvg::Tree::from_data(svg_data, &options).map_err(|e| e.to_string())?;
    Ok(tree)
}
