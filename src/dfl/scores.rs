use crate::utils::{read_trimmed_lines, Result};
use std::path::Path;

/// Parses scores given either inline as a comma-separated list or as the path
/// to a file holding one score per line (comma lists within lines are allowed).
pub fn parse_scores(input: &str) -> Result<Vec<f64>> {
    let path = Path::new(input);
    if path.is_file() {
        log::debug!("Reading scores from {}", path.display());
        let flat = read_trimmed_lines(path)?.join(",");
        parse_score_list(&flat)
    } else {
        parse_score_list(input)
    }
}

/// Splits on commas, skipping tokens that are empty after trimming.
pub fn parse_score_list(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("Could not parse score: '{}'", token))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::io::Write;

    #[test]
    fn inline_scores_are_trimmed() {
        assert_eq!(parse_scores(" 1.0, 2.5 ,3"), Ok(vec![1.0, 2.5, 3.0]));
    }

    #[test]
    fn empty_tokens_are_skipped() {
        assert_eq!(parse_scores(",0.1,,0.2,"), Ok(vec![0.1, 0.2]));
        assert_eq!(parse_scores(""), Ok(vec![]));
        assert_eq!(parse_scores(" , ,"), Ok(vec![]));
    }

    #[test]
    fn scientific_and_negative_scores() {
        assert_eq!(parse_scores("-0.5,1e-3,+2"), Ok(vec![-0.5, 0.001, 2.0]));
    }

    #[test]
    fn invalid_token_err() {
        assert_eq!(
            parse_scores("0.1,abc,0.3"),
            Err("Could not parse score: 'abc'".to_string())
        );
        assert!(parse_scores("0.1 0.2").is_err());
    }

    #[test]
    fn scores_from_file_one_per_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.9\n 0.8 \n\n0.1").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(parse_scores(path), Ok(vec![0.9, 0.8, 0.1]));
    }

    #[test]
    fn scores_from_file_with_comma_lists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.9,0.8\n0.1, 0.2,\n0.3").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(parse_scores(path), Ok(vec![0.9, 0.8, 0.1, 0.2, 0.3]));
    }

    #[test]
    fn invalid_token_in_file_err() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.9\nNA\n0.1").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(
            parse_scores(path),
            Err("Could not parse score: 'NA'".to_string())
        );
    }

    #[test]
    fn reparsing_serialized_scores_is_stable() {
        let inputs = [
            "0.18, 0.2,0.000001,123456.789",
            "1,2,3",
            "-0.1,0.1000000000000000055511151231257827,1e300",
            "",
        ];
        for input in inputs {
            let parsed = parse_scores(input).unwrap();
            let serialized = parsed.iter().join(",");
            assert_eq!(parse_scores(&serialized).unwrap(), parsed);
        }
    }
}
