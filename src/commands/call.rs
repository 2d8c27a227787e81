use crate::cli::Cli;
use crate::dfl::{
    annotation_flags, build_score_plot, call_regions, count_disagreements, parse_scores,
    render_report, threshold_flags,
};
use crate::utils::Result;
use itertools::Itertools;
use scoreplot::generate_image;
use std::path::Path;

pub fn dflplot(args: Cli) -> Result<()> {
    let sequence = args.sequence.trim();
    let scores = parse_scores(&args.scores)?;
    log::debug!("Parsed {} scores", scores.len());

    let seq_len = sequence.chars().count();
    if seq_len != scores.len() {
        return Err(format!(
            "sequence length ({}) != number of scores ({})",
            seq_len,
            scores.len()
        ));
    }

    let annotated = annotation_flags(sequence);
    let called = threshold_flags(&scores, args.threshold);
    let disagreements = count_disagreements(&annotated, &called)?;
    if disagreements > 0 {
        log::info!(
            "{} of {} residues differ between case-annotation and threshold calls",
            disagreements,
            seq_len
        );
    }

    let regions = call_regions(&called);
    log::info!(
        "Called {} DFL regions at threshold {}",
        regions.len(),
        args.threshold
    );
    log::debug!("Regions: {}", regions.iter().join(", "));

    print!(
        "{}",
        render_report(
            &args.protein_id,
            sequence,
            args.threshold,
            disagreements,
            &regions
        )
    );

    let mut plot = build_score_plot(&args.protein_id, &scores, args.threshold, &regions);
    plot.dpi = args.dpi;
    if let Some(font_family) = args.font_family {
        plot.set_font_family(&font_family);
    }

    let output_path = Path::new(&args.output_path);
    generate_image(&plot, output_path)?;
    log::info!("Wrote plot to {}", output_path.display());
    println!("Saved figure: {}", args.output_path);
    Ok(())
}
