use super::region::Region;
use std::fmt;

/// Summary of one protein's DFL calls as printed on stdout.
#[derive(Debug)]
pub struct Report<'a> {
    pub protein_id: &'a str,
    pub sequence: &'a str,
    pub threshold: f64,
    pub disagreements: usize,
    pub regions: &'a [Region],
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.protein_id)?;
        writeln!(f, "Length: {} aa", self.sequence.chars().count())?;
        writeln!(f, "DFL threshold: {}", format_threshold(self.threshold))?;
        if self.disagreements > 0 {
            writeln!(
                f,
                "Note: {} residues differ between case-annotation and threshold calls.",
                self.disagreements
            )?;
        }
        writeln!(f, "Predicted DFL regions (threshold-based):")?;
        if self.regions.is_empty() {
            writeln!(f, "  none")?;
        }
        for region in self.regions {
            writeln!(
                f,
                "  {:>4}-{:<4}  len={:<3}  seq={}",
                region.start,
                region.end,
                region.length(),
                region.slice(self.sequence)
            )?;
        }
        Ok(())
    }
}

pub fn render_report(
    protein_id: &str,
    sequence: &str,
    threshold: f64,
    disagreements: usize,
    regions: &[Region],
) -> String {
    Report {
        protein_id,
        sequence,
        threshold,
        disagreements,
        regions,
    }
    .to_string()
}

/// Shortest decimal form of `value` that always shows a fractional part
/// for whole numbers, e.g. `0.18`, `1.0`. Magnitudes below 1e-4 or from 1e16
/// up use exponent notation with a signed two-digit exponent, e.g. `1e-05`.
pub fn format_threshold(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format_exponent(value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((mantissa, Ok(exp))) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => formatted,
    }
}
