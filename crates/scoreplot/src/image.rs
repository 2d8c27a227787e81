use crate::{pdf, png, svg, ScorePlot};
use std::path::Path;

/// Renders `plot` to `path`. `.svg` and `.pdf` select vector output; any other
/// or missing extension is rasterised to PNG.
pub fn generate(plot: &ScorePlot, path: &Path) -> Result<(), String> {
    let svg_content = svg::generate_string(plot);
    match FileType::from_path(path) {
        FileType::Svg => svg::render_from_string(&svg_content, path),
        FileType::Pdf => pdf::render_from_string(&svg_content, path),
        FileType::Png => png::render_from_string(&svg_content, path, plot.dpi),
    }
}

#[derive(Debug, PartialEq)]
enum FileType {
    Svg,
    Png,
    Pdf,
}

impl FileType {
    fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());
        match extension.as_deref() {
            Some("svg") => FileType::Svg,
            Some("pdf") => FileType::Pdf,
            _ => FileType::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Band, HLine, Line, Stroke};

    fn example_plot() -> ScorePlot {
        let mut plot = ScorePlot::new("example");
        plot.lines.push(Line {
            points: vec![(1.0, 0.9), (2.0, 0.1), (3.0, 0.2), (4.0, 0.8)],
            color: "#1383C6".to_string(),
            width: 1.5,
        });
        plot.hlines.push(HLine {
            y: 0.5,
            color: "#E16A2C".to_string(),
            width: 1.0,
            stroke: Stroke::Dashed,
        });
        plot.bands.push(Band {
            start: 2.0,
            end: 3.0,
            color: "#009CA2".to_string(),
            opacity: 0.2,
        });
        plot
    }

    #[test]
    fn file_type_follows_extension() {
        assert_eq!(FileType::from_path(Path::new("a.PNG")), FileType::Png);
        assert_eq!(FileType::from_path(Path::new("a.svg")), FileType::Svg);
        assert_eq!(FileType::from_path(Path::new("a.Pdf")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("a.jpg")), FileType::Png);
        assert_eq!(FileType::from_path(Path::new("myplot")), FileType::Png);
        assert_eq!(FileType::from_path(Path::new("dir.svg/plot")), FileType::Png);
    }

    #[test]
    fn png_is_scaled_by_dpi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let mut plot = example_plot();
        plot.dpi = 144;
        generate(&plot, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        assert_eq!((width, height), (1440, 648));
    }

    #[test]
    fn svg_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let plot = example_plot();
        generate(&plot, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, svg::generate_string(&plot));
    }

    #[test]
    fn pdf_has_pdf_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.pdf");
        generate(&example_plot(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn other_extensions_are_written_as_png() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["plot.jpg", "myplot"] {
            let path = dir.path().join(name);
            generate(&example_plot(), &path).unwrap();
            let bytes = std::fs::read(&path).unwrap();
            assert_eq!(&bytes[1..4], b"PNG");
        }
    }
}
