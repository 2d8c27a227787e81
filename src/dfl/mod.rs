pub mod flags;
pub mod plot;
pub mod region;
pub mod report;
pub mod scores;

pub use flags::{annotation_flags, count_disagreements, threshold_flags};
pub use plot::build_score_plot;
pub use region::{call_regions, Region};
pub use report::{format_threshold, render_report, Report};
pub use scores::parse_scores;
