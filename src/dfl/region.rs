use std::fmt;

/// A run of DFL residues, 1-based and inclusive on both ends.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    /// Residues of `sequence` covered by the region.
    pub fn slice(&self, sequence: &str) -> String {
        sequence
            .chars()
            .skip(self.start - 1)
            .take(self.length())
            .collect()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Collapses runs of `true` into regions, in ascending order.
pub fn call_regions(flags: &[bool]) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut start = None;
    let n = flags.len();
    for (i, &flag) in (1..).zip(flags) {
        if flag && start.is_none() {
            start = Some(i);
        }
        if !flag || i == n {
            if let Some(s) = start.take() {
                let end = if flag { i } else { i - 1 };
                regions.push(Region::new(s, end));
            }
        }
    }
    regions
}
