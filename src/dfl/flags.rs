use crate::utils::Result;

/// Lowercase residues are annotated as DFL.
pub fn annotation_flags(sequence: &str) -> Vec<bool> {
    sequence.chars().map(char::is_lowercase).collect()
}

/// Residues scoring strictly below `threshold` are called DFL.
pub fn threshold_flags(scores: &[f64], threshold: f64) -> Vec<bool> {
    scores.iter().map(|score| *score < threshold).collect()
}

/// Number of positions at which the two flag series disagree.
pub fn count_disagreements(annotated: &[bool], called: &[bool]) -> Result<usize> {
    if annotated.len() != called.len() {
        return Err(format!(
            "Cannot compare flag series of different lengths ({} != {})",
            annotated.len(),
            called.len()
        ));
    }
    Ok(annotated
        .iter()
        .zip(called)
        .filter(|(a, b)| a != b)
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn lowercase_marks_annotation() {
        assert_eq!(annotation_flags("AAaaAA"), vec![F, F, T, T, F, F]);
        assert_eq!(annotation_flags("mK-x*"), vec![T, F, F, T, F]);
        assert!(annotation_flags("").is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        let scores = [0.9, 0.8, 0.1, 0.2, 0.9, 0.5];
        assert_eq!(threshold_flags(&scores, 0.5), vec![F, F, T, T, F, F]);
    }

    #[test]
    fn nan_scores_are_never_called() {
        assert_eq!(threshold_flags(&[f64::NAN, 0.0], 0.18), vec![F, T]);
    }

    #[test]
    fn matching_calls_have_no_disagreements() {
        let annotated = annotation_flags("AAaaAA");
        let called = threshold_flags(&[0.9, 0.8, 0.1, 0.2, 0.9, 0.9], 0.5);
        assert_eq!(count_disagreements(&annotated, &called), Ok(0));
    }

    #[test]
    fn disagreements_are_counted() {
        assert_eq!(count_disagreements(&[T, F, T, F], &[T, T, F, F]), Ok(2));
        assert_eq!(count_disagreements(&[], &[]), Ok(0));
    }

    #[test]
    fn unequal_lengths_err() {
        assert!(count_disagreements(&[T], &[T, F]).is_err());
    }
}
