use crate::prepare_svg_tree;
use std::path::Path;

const POINTS_PER_INCH: f32 = 72.0;

pub fn render_from_string(svg_content: &str, path: &Path, dpi: u32) -> Result<(), String> {
    let tree = prepare_svg_tree(svg_content.as_bytes())?;
    let zoom = dpi as f32 / POINTS_PER_INCH;
    let size = tree.size();
    let width = (size.width() * zoom).round() as u32;
    let height = (size.height() * zoom).round() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or("Unable to init image".to_string())?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(zoom, zoom),
        &mut pixmap.as_mut(),
    );
    pixmap.save_png(path).map_err(|e| e.to_string())?;
    Ok(())
}
