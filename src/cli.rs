use crate::utils::Result;
use chrono::Datelike;
use clap::{ArgAction, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{io::Write, path::Path};

pub const DEFAULT_THRESHOLD: f64 = 0.18;
pub const DEFAULT_OUTPUT: &str = "dflpred_plot.png";

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser, Debug)]
#[command(name="dflplot",
          version=&**FULL_VERSION,
          about="Plot DFLpred scores and call DFL regions (scores < threshold)",
          long_about = None,
          arg_required_else_help = true,
          after_help = format!("Copyright (C) 2024-{}
Scores are consumed as provided; no prediction is performed.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[clap(required = true)]
    #[clap(long = "protein-id")]
    #[clap(help = "Protein identifier")]
    #[clap(value_name = "PROTEIN_ID")]
    pub protein_id: String,

    #[clap(required = true)]
    #[clap(long = "sequence")]
    #[clap(help = "Amino acid sequence; lowercase letters mark DFL residues by annotation")]
    #[clap(value_name = "SEQUENCE")]
    pub sequence: String,

    #[clap(required = true)]
    #[clap(long = "scores")]
    #[clap(help = "Comma-separated scores or a file path with one score per line")]
    #[clap(value_name = "SCORES")]
    #[clap(allow_hyphen_values = true)]
    pub scores: String,

    #[clap(long = "threshold")]
    #[clap(help = "DFL score threshold; residues scoring below it are called DFL")]
    #[clap(value_name = "THRESHOLD")]
    #[clap(default_value_t = DEFAULT_THRESHOLD)]
    #[clap(allow_negative_numbers = true)]
    pub threshold: f64,

    #[clap(short = 'o')]
    #[clap(long = "out")]
    #[clap(help = "Output image path; .svg and .pdf select vector output, anything else is PNG")]
    #[clap(value_name = "OUT")]
    #[clap(default_value = DEFAULT_OUTPUT)]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: String,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "dpi")]
    #[clap(help = "Resolution of PNG output")]
    #[clap(value_name = "DPI")]
    #[clap(default_value_t = scoreplot::DEFAULT_DPI)]
    #[arg(value_parser = dpi_in_range)]
    pub dpi: u32,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "font-family")]
    #[clap(value_name = "FONT_FAMILY")]
    #[clap(help = "Font family to use for plot text")]
    pub font_family: Option<String>,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn dpi_in_range(s: &str) -> Result<u32> {
    let dpi: u32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid resolution", s))?;
    if dpi >= 1 {
        Ok(dpi)
    } else {
        Err("Resolution must be at least 1 dpi".into())
    }
}
