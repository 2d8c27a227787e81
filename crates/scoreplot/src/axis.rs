const MARGIN: f64 = 0.05;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct AxisRange {
    pub lo: f64,
    pub hi: f64,
}

impl AxisRange {
    /// Range covering all finite values plus a margin on each side.
    /// Without finite values the range defaults to `[0, 1]`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let bounds = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            });

        match bounds {
            None => AxisRange { lo: 0.0, hi: 1.0 },
            Some((lo, hi)) if lo == hi => AxisRange {
                lo: lo - 0.5,
                hi: hi + 0.5,
            },
            Some((lo, hi)) => {
                let pad = (hi - lo) * MARGIN;
                AxisRange {
                    lo: lo - pad,
                    hi: hi + pad,
                }
            }
        }
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Maps `value` onto `[0, 1]` relative to the range.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.lo) / self.span()
    }
}

/// Evenly spaced "round" tick positions inside `[lo, hi]`, at most about
/// `max_ticks` of them. Returns the step along with the ticks.
pub fn nice_ticks(range: &AxisRange, max_ticks: usize) -> (f64, Vec<f64>) {
    if max_ticks < 2 || !(range.span() > 0.0) || !range.span().is_finite() {
        return (0.0, Vec::new());
    }
    let step = nice_step(range.span() / (max_ticks - 1) as f64);
    let eps = step * 1e-9;
    let first = (range.lo / step).ceil();
    let ticks = (0..)
        .map(|k| (first + k as f64) * step)
        .take_while(|tick| *tick <= range.hi + eps)
        .map(|tick| if tick.abs() < eps { 0.0 } else { tick })
        .collect();
    (step, ticks)
}

fn nice_step(raw: f64) -> f64 {
    let base = 10f64.powf(raw.log10().floor());
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Tick label with just enough decimals to tell neighbouring ticks apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step <= 0.0 || step.fract() == 0.0 {
        0
    } else {
        let magnitude = (-step.log10().floor()).max(0.0) as usize;
        (magnitude + 1).min(6)
    };
    let label = format!("{:.*}", decimals, value);
    if label.contains('.') {
        label
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        label
    }
}
