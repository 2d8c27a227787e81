use crate::utils::Result;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Reads every line of `path` with surrounding whitespace removed.
pub fn read_trimmed_lines(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    BufReader::new(file)
        .lines()
        .map(|line| {
            line.map(|l| l.trim().to_string())
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lines_are_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  0.1 \n0.2,0.3\n\n\t0.4").unwrap();
        let lines = read_trimmed_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["0.1", "0.2,0.3", "", "0.4"]);
    }

    #[test]
    fn missing_file_err() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_trimmed_lines(&path).unwrap_err();
        assert!(err.starts_with("Failed to open"));
    }
}
